//! The bubbletea-rs model that drives the timer.
//!
//! [`App`] is the glue between the runtime and the core: key presses are
//! resolved through the [`TimerKeyMap`], timer messages come back as
//! [`TimerEvent`]s, and every request the [`Controller`] schedules is turned
//! into a `bubbletea_rs::tick` command. The runtime processes messages one
//! at a time, which is what keeps the controller free of locks.
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use pomoruler::App;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<App>::builder().build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

use crate::config::{self, Settings};
use crate::controller::{Controller, Flow, Scheduled, TimerEvent};
use crate::key::TimerKeyMap;
use crate::render::Renderer;
use crate::state::TimerState;
use bubbletea_rs::{
    batch, quit, tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg,
};
use std::time::Duration;

/// Timer application model.
#[derive(Debug, Clone)]
pub struct App {
    controller: Controller<Vec<Scheduled>>,
    renderer: Renderer,
    /// Key bindings in effect.
    pub keymap: TimerKeyMap,
}

impl App {
    /// Creates an idle timer from launch settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: Controller::new(TimerState::new(settings.duration), Vec::new()),
            renderer: Renderer::default(),
            keymap: TimerKeyMap::default(),
        }
    }

    /// The current timer state.
    pub fn state(&self) -> &TimerState {
        self.controller.state()
    }

    fn dispatch(&mut self, event: TimerEvent) -> Option<Cmd> {
        if self.controller.handle(event) == Flow::Quit {
            return Some(quit());
        }

        let mut cmds: Vec<Cmd> = self
            .controller
            .sink_mut()
            .drain(..)
            .map(schedule)
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(batch(cmds)),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// Turns a scheduled event into a command that delivers it after the delay.
fn schedule(scheduled: Scheduled) -> Cmd {
    // Immediate messages still go through the runtime, one nanosecond out.
    let delay = scheduled.delay.max(Duration::from_nanos(1));
    let event = scheduled.event;
    bubbletea_tick(delay, move |_| Box::new(event) as Msg)
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let settings = config::settings();
        tracing::debug!(duration = ?settings.duration, "timer initialised");
        (Self::new(&settings), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let event = if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.keymap.event_for(key_msg)?
        } else if let Some(event) = msg.downcast_ref::<TimerEvent>() {
            *event
        } else {
            return None;
        };
        self.dispatch(event)
    }

    fn view(&self) -> String {
        self.renderer.view(self.controller.state())
    }
}
