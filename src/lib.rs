#![warn(missing_docs)]

//! # pomoruler
//!
//! A terminal countdown timer built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! and lipgloss. The screen shows a ruler of minutes centered on the selected
//! duration; the arrow keys move it in five minute steps and, once the keys
//! have been left alone for four seconds, the timer counts down to zero.
//!
//! ## Architecture
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | `TimerState`: duration, remaining time and phase |
//! | [`controller`] | State machine applying events, scheduling follow-ups through an `EventSink` |
//! | [`render`] | Pure rendering of a `TimerState` into the framed view |
//! | [`style`] | Style and layout values handed to the renderer |
//! | [`key`] | Key bindings resolving key presses to events |
//! | [`app`] | The bubbletea-rs `Model` driving everything |
//! | [`config`] | Command-line options and launch settings |
//! | [`logging`] | Optional file logging with `tracing` |
//!
//! ## Phases
//!
//! | Phase | Entered by | Ticking | Left by |
//! |-------|------------|---------|---------|
//! | `Idle` | start, countdown reaching zero | no | adjustment → `Armed` |
//! | `Armed` | any adjustment | no | 4s without input → `Running`; adjustment → `Armed` |
//! | `Running` | idle expiry | every second | adjustment → `Armed`; zero → `Idle` |
//!
//! ## Driving the controller by hand
//!
//! ```rust
//! use pomoruler::prelude::*;
//! use std::time::Duration;
//!
//! let mut controller = Controller::new(TimerState::default(), Vec::<Scheduled>::new());
//! controller.handle(TimerEvent::Decrease);
//! assert_eq!(controller.state().duration(), Duration::from_secs(20 * 60));
//!
//! let view = Renderer::default().view(controller.state());
//! assert!(view.contains("20:00"));
//! ```

pub mod app;
pub mod config;
pub mod controller;
pub mod key;
pub mod logging;
pub mod render;
pub mod state;
pub mod style;

pub use app::App;
pub use controller::{Controller, EventSink, Flow, Scheduled, TimerEvent, ARM_DELAY};
pub use key::{Binding, KeyPress, TimerKeyMap};
pub use render::Renderer;
pub use state::{format_time, Phase, TimerState, DEFAULT_DURATION, STEP, TICK};
pub use style::{Layout, Styles, Weight};

/// Commonly used types in one import.
///
/// ```rust
/// use pomoruler::prelude::*;
///
/// let state = TimerState::default();
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::app::App;
    pub use crate::controller::{Controller, EventSink, Flow, Scheduled, TimerEvent};
    pub use crate::key::TimerKeyMap;
    pub use crate::render::Renderer;
    pub use crate::state::{format_time, Phase, TimerState};
    pub use crate::style::{Layout, Styles};
}
