//! Timer state shared by the controller and the renderer.
//!
//! [`TimerState`] is a plain data holder. It knows how to clamp a duration to
//! the five minute grid and how to count down by one second, but it has no
//! notion of time passing: the [`Controller`](crate::controller::Controller)
//! decides when those operations happen.
//!
//! # Examples
//!
//! ```rust
//! use pomoruler::state::{format_time, Phase, TimerState};
//! use std::time::Duration;
//!
//! let mut state = TimerState::default();
//! assert_eq!(state.phase(), Phase::Idle);
//! assert_eq!(format_time(state.remaining()), "25:00");
//!
//! state.set_duration(Duration::from_secs(17 * 60));
//! assert_eq!(format_time(state.duration()), "15:00");
//! ```

use std::time::Duration;

/// Size of one duration adjustment, and the grid durations are rounded to.
pub const STEP: Duration = Duration::from_secs(5 * 60);

/// Duration a fresh timer starts with.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(25 * 60);

/// Amount removed from the remaining time by one tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Where the timer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No countdown and no pending auto-start.
    #[default]
    Idle,
    /// The duration was just adjusted; an auto-start is pending.
    Armed,
    /// Counting down once per second.
    Running,
}

impl Phase {
    /// Lowercase name used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Armed => "armed",
            Phase::Running => "running",
        }
    }
}

/// Result of [`TimerState::tick_down`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// One second was removed from the remaining time.
    Ticked,
    /// The remaining time was already zero; nothing changed.
    Expired,
}

/// Duration, remaining time and phase of the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    duration: Duration,
    remaining: Duration,
    phase: Phase,
}

impl TimerState {
    /// Creates an idle timer set to `duration`, rounded down to the grid.
    pub fn new(duration: Duration) -> Self {
        let duration = round_down(duration);
        Self {
            duration,
            remaining: duration,
            phase: Phase::Idle,
        }
    }

    /// Configured total time.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left in the active countdown, or the duration when not running.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a countdown is active.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Sets the duration, rounded down to the nearest multiple of [`STEP`].
    ///
    /// The remaining time is left alone; callers pair this with
    /// [`reset_remaining`](Self::reset_remaining).
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = round_down(duration);
    }

    /// Makes the remaining time equal to the duration again.
    pub fn reset_remaining(&mut self) {
        self.remaining = self.duration;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Removes one [`TICK`] from the remaining time.
    ///
    /// Returns [`Countdown::Expired`] without touching anything when the
    /// remaining time is already zero.
    pub fn tick_down(&mut self) -> Countdown {
        if self.remaining.is_zero() {
            return Countdown::Expired;
        }
        self.remaining = self.remaining.saturating_sub(TICK);
        Countdown::Ticked
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

/// Rounds `d` down to a whole multiple of [`STEP`].
pub fn round_down(d: Duration) -> Duration {
    let step = STEP.as_secs();
    Duration::from_secs(d.as_secs() / step * step)
}

/// Formats `d` as `MM:SS`, truncated to the second.
///
/// Minutes are not wrapped into hours, so 90 minutes reads `90:00`.
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
