//! Countdown state machine.
//!
//! The [`Controller`] owns the [`TimerState`] and applies [`TimerEvent`]s to it.
//! Anything that has to happen later (the idle auto-start, the next tick) is
//! handed to an [`EventSink`] as a [`Scheduled`] request; whoever drives the
//! controller is responsible for delivering the event back after the delay.
//!
//! Timer events carry the generation of the arming or run that produced them.
//! Re-arming or stopping bumps the generation, so an event still in flight
//! from an older arming is recognised and dropped instead of restarting a
//! countdown the user already cancelled.
//!
//! # Examples
//!
//! ```rust
//! use pomoruler::controller::{Controller, Scheduled, TimerEvent};
//! use pomoruler::state::{Phase, TimerState};
//! use std::time::Duration;
//!
//! let mut controller = Controller::new(TimerState::default(), Vec::<Scheduled>::new());
//! controller.handle(TimerEvent::Increase);
//! assert_eq!(controller.state().phase(), Phase::Armed);
//! assert_eq!(controller.state().duration(), Duration::from_secs(30 * 60));
//!
//! // The driver delivers the pending auto-start once its delay has passed.
//! let pending = controller.sink_mut().pop().unwrap();
//! assert_eq!(pending.delay, Duration::from_secs(4));
//! controller.handle(pending.event);
//! assert_eq!(controller.state().phase(), Phase::Running);
//! ```

use crate::state::{format_time, round_down, Countdown, Phase, TimerState, STEP, TICK};
use std::time::Duration;

/// Delay between the last adjustment and the automatic start.
pub const ARM_DELAY: Duration = Duration::from_secs(4);

/// Everything the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Shorten the duration by one step, or cancel a running countdown.
    Decrease,
    /// Lengthen the duration by one step, or cancel a running countdown.
    Increase,
    /// The idle delay of the arming with this generation has elapsed.
    IdleExpired {
        /// Generation of the arming that scheduled this event.
        arm: u64,
    },
    /// One second of the run with this generation has elapsed.
    Tick {
        /// Generation of the run that scheduled this event.
        run: u64,
    },
    /// Leave the program.
    Quit,
}

/// What the driver should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// Terminate the program.
    Quit,
}

/// A request to deliver `event` back to the controller after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// How long to wait before delivering the event.
    pub delay: Duration,
    /// The event to deliver.
    pub event: TimerEvent,
}

/// Capability to push a future event back into the driver's event stream.
pub trait EventSink {
    /// Asks for `event` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, event: TimerEvent);
}

/// Collects requests so the driver can drain them after each event.
impl EventSink for Vec<Scheduled> {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        self.push(Scheduled { delay, event });
    }
}

#[derive(Debug, Clone, Copy)]
enum Adjustment {
    Shorter,
    Longer,
}

/// Applies events to a [`TimerState`], scheduling follow-ups through `S`.
#[derive(Debug, Clone)]
pub struct Controller<S> {
    state: TimerState,
    sink: S,
    arm: u64,
    run: u64,
}

impl<S: EventSink> Controller<S> {
    /// Creates a controller for `state` that schedules through `sink`.
    pub fn new(state: TimerState, sink: S) -> Self {
        Self {
            state,
            sink,
            arm: 0,
            run: 0,
        }
    }

    /// The current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the event sink, used by drivers to drain requests.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Applies one event.
    ///
    /// Never fails: adjustments clamp, and timer events that no longer match
    /// the current phase or generation are ignored.
    pub fn handle(&mut self, event: TimerEvent) -> Flow {
        match event {
            TimerEvent::Decrease => self.adjust(Adjustment::Shorter),
            TimerEvent::Increase => self.adjust(Adjustment::Longer),
            TimerEvent::IdleExpired { arm } => self.idle_expired(arm),
            TimerEvent::Tick { run } => self.tick(run),
            TimerEvent::Quit => {
                tracing::debug!("quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn adjust(&mut self, adjustment: Adjustment) {
        if self.state.is_running() {
            // Any adjustment key while counting down means stop and re-arm.
            self.stop_ticks();
            self.state.set_duration(self.state.duration());
            tracing::info!(
                duration = %format_time(self.state.duration()),
                "countdown cancelled"
            );
        } else {
            let current = round_down(self.state.duration());
            let next = match adjustment {
                Adjustment::Shorter => current.saturating_sub(STEP),
                Adjustment::Longer => current.saturating_add(STEP),
            };
            self.state.set_duration(next);
            tracing::debug!(
                ?adjustment,
                duration = %format_time(next),
                "duration adjusted"
            );
        }
        self.state.reset_remaining();
        self.enter(Phase::Armed);
        self.arm();
    }

    fn arm(&mut self) {
        self.arm += 1;
        self.sink
            .schedule(ARM_DELAY, TimerEvent::IdleExpired { arm: self.arm });
    }

    fn idle_expired(&mut self, arm: u64) {
        if self.state.phase() != Phase::Armed || arm != self.arm {
            tracing::trace!(arm, current = self.arm, "stale idle expiry ignored");
            return;
        }
        self.enter(Phase::Running);
        self.run += 1;
        // First tick goes out immediately so the display starts moving now.
        self.sink
            .schedule(Duration::ZERO, TimerEvent::Tick { run: self.run });
    }

    fn tick(&mut self, run: u64) {
        if self.state.phase() != Phase::Running || run != self.run {
            tracing::trace!(run, current = self.run, "stale tick ignored");
            return;
        }
        match self.state.tick_down() {
            Countdown::Ticked => {
                self.sink.schedule(TICK, TimerEvent::Tick { run: self.run });
            }
            Countdown::Expired => {
                self.stop_ticks();
                self.state.reset_remaining();
                self.enter(Phase::Idle);
                tracing::info!(
                    duration = %format_time(self.state.duration()),
                    "countdown complete"
                );
            }
        }
    }

    fn stop_ticks(&mut self) {
        self.run += 1;
    }

    fn enter(&mut self, phase: Phase) {
        let from = self.state.phase();
        if from != phase {
            tracing::debug!(from = from.as_str(), to = phase.as_str(), "phase change");
        }
        self.state.set_phase(phase);
    }
}
