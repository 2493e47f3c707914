//! End-to-end countdown scenarios
//!
//! Drives the controller through the public API the way the terminal program
//! does: every scheduled request is delivered back once its delay has
//! "passed", in the order a real clock would deliver them.

use lipgloss_extras::lipgloss;
use pomoruler::prelude::*;
use pomoruler::ARM_DELAY;
use std::time::Duration;

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

/// A fake clock that delivers scheduled events in due order.
struct Harness {
    controller: Controller<Vec<Scheduled>>,
    now: Duration,
    queue: Vec<(Duration, TimerEvent)>,
}

impl Harness {
    fn new() -> Self {
        Self {
            controller: Controller::new(TimerState::default(), Vec::new()),
            now: Duration::ZERO,
            queue: Vec::new(),
        }
    }

    fn state(&self) -> &TimerState {
        self.controller.state()
    }

    fn press(&mut self, event: TimerEvent) {
        self.controller.handle(event);
        self.collect();
    }

    fn collect(&mut self) {
        let now = self.now;
        let scheduled: Vec<Scheduled> = self.controller.sink_mut().drain(..).collect();
        self.queue
            .extend(scheduled.into_iter().map(|s| (now + s.delay, s.event)));
    }

    /// Advances the clock, delivering everything that falls due.
    fn advance(&mut self, by: Duration) {
        let until = self.now + by;
        loop {
            self.queue.sort_by_key(|(at, _)| *at);
            match self.queue.first() {
                Some((at, _)) if *at <= until => {
                    let (at, event) = self.queue.remove(0);
                    self.now = at;
                    self.controller.handle(event);
                    self.collect();
                }
                _ => break,
            }
        }
        self.now = until;
    }

    fn display(&self) -> String {
        lipgloss::strip_ansi(&Renderer::default().view(self.state()))
    }
}

#[test]
fn test_increase_wait_count_and_cancel() {
    let mut h = Harness::new();
    assert_eq!(h.state().phase(), Phase::Idle);
    assert!(h.display().contains("25:00"));

    h.press(TimerEvent::Increase);
    assert_eq!(h.state().duration(), minutes(30));
    assert_eq!(h.state().remaining(), minutes(30));
    assert_eq!(h.state().phase(), Phase::Armed);

    h.advance(Duration::from_secs(3));
    assert_eq!(h.state().phase(), Phase::Armed);

    h.advance(Duration::from_secs(1));
    assert_eq!(h.state().phase(), Phase::Running);
    assert_eq!(format_time(h.state().remaining()), "29:59");
    assert!(h.display().contains("29:59"));

    h.advance(Duration::from_secs(1));
    assert_eq!(format_time(h.state().remaining()), "29:58");

    h.advance(Duration::from_secs(10));
    assert_eq!(format_time(h.state().remaining()), "29:48");

    h.press(TimerEvent::Decrease);
    assert_eq!(h.state().phase(), Phase::Armed);
    assert_eq!(h.state().remaining(), minutes(30));

    // The tick that was in flight lands but must not move the clock.
    h.advance(Duration::from_secs(2));
    assert_eq!(h.state().remaining(), minutes(30));
    assert_eq!(h.state().phase(), Phase::Armed);

    h.advance(Duration::from_secs(2));
    assert_eq!(h.state().phase(), Phase::Running);
    assert_eq!(format_time(h.state().remaining()), "29:59");
}

#[test]
fn test_rapid_adjustments_start_once() {
    let mut h = Harness::new();
    for _ in 0..3 {
        h.press(TimerEvent::Decrease);
        h.advance(Duration::from_secs(2));
    }
    assert_eq!(h.state().duration(), minutes(10));
    assert_eq!(h.state().phase(), Phase::Armed);

    h.advance(ARM_DELAY - Duration::from_secs(2));
    assert_eq!(h.state().phase(), Phase::Running);
    assert_eq!(format_time(h.state().remaining()), "09:59");

    // Three expiries were scheduled but only one countdown runs.
    h.advance(Duration::from_secs(5));
    assert_eq!(format_time(h.state().remaining()), "09:54");
}

#[test]
fn test_countdown_runs_to_idle() {
    let mut h = Harness::new();
    for _ in 0..4 {
        h.press(TimerEvent::Decrease);
    }
    assert_eq!(h.state().duration(), minutes(5));

    h.advance(ARM_DELAY);
    assert_eq!(h.state().phase(), Phase::Running);

    h.advance(minutes(5) - Duration::from_secs(1));
    assert_eq!(h.state().phase(), Phase::Running);
    assert_eq!(h.state().remaining(), Duration::ZERO);
    assert!(h.display().contains("00:00"));

    h.advance(Duration::from_secs(1));
    assert_eq!(h.state().phase(), Phase::Idle);
    assert_eq!(h.state().remaining(), minutes(5));
    assert!(h.queue.is_empty());

    h.advance(minutes(1));
    assert_eq!(h.state().remaining(), minutes(5));
}

#[test]
fn test_quit_reports_flow() {
    let mut c = Controller::new(TimerState::default(), Vec::<Scheduled>::new());
    assert_eq!(c.handle(TimerEvent::Quit), Flow::Quit);
    assert_eq!(c.handle(TimerEvent::Increase), Flow::Continue);
}
