//! Key bindings for the timer.
//!
//! A [`Binding`] lists the key presses that trigger one logical command;
//! [`TimerKeyMap`] groups the bindings the timer understands and resolves an
//! incoming [`KeyMsg`] to a [`TimerEvent`].
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use pomoruler::controller::TimerEvent;
//! use pomoruler::key::TimerKeyMap;
//!
//! let keymap = TimerKeyMap::default();
//! let left = KeyMsg { key: KeyCode::Left, modifiers: KeyModifiers::NONE };
//! assert_eq!(keymap.event_for(&left), Some(TimerEvent::Decrease));
//! ```

use crate::controller::TimerEvent;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// A key code together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held, exactly.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// The key presses bound to one command, with the text shown in help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: String,
    description: String,
}

impl Binding {
    /// Creates a binding for `keys` without help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: String::new(),
            description: String::new(),
        }
    }

    /// Adds more key presses to the binding.
    pub fn with_keys<K: Into<KeyPress>>(mut self, keys: Vec<K>) -> Self {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Sets the short key label shown in help, e.g. `"←/h"`.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets what the binding does, as shown in help.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The key label shown in help.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// What the binding does.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `key_msg` is one of this binding's key presses.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == key_msg.key && k.modifiers == key_msg.modifiers)
    }
}

/// Key bindings for the timer's commands.
#[derive(Debug, Clone)]
pub struct TimerKeyMap {
    /// Shorten the duration, or cancel a running countdown.
    pub decrease: Binding,
    /// Lengthen the duration, or cancel a running countdown.
    pub increase: Binding,
    /// Leave the program.
    pub quit: Binding,
}

impl Default for TimerKeyMap {
    fn default() -> Self {
        Self {
            decrease: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h")
                .with_description("5 minutes shorter (stops a running countdown)"),
            increase: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l")
                .with_description("5 minutes longer (stops a running countdown)"),
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc])
                .with_keys(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("q/esc/ctrl+c")
                .with_description("quit"),
        }
    }
}

impl TimerKeyMap {
    /// All bindings, in the order they are listed in help.
    pub fn bindings(&self) -> [&Binding; 3] {
        [&self.decrease, &self.increase, &self.quit]
    }

    /// One line per binding: key label padded to a column, then description.
    pub fn help_text(&self) -> String {
        let bindings = self.bindings();
        let width = bindings
            .iter()
            .map(|b| b.help().width())
            .max()
            .unwrap_or(0);
        bindings
            .iter()
            .map(|b| {
                let pad = width - b.help().width();
                format!("  {}{}  {}", b.help(), " ".repeat(pad), b.description())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The event bound to `key_msg`, if any.
    pub fn event_for(&self, key_msg: &KeyMsg) -> Option<TimerEvent> {
        if self.quit.matches(key_msg) {
            Some(TimerEvent::Quit)
        } else if self.decrease.matches(key_msg) {
            Some(TimerEvent::Decrease)
        } else if self.increase.matches(key_msg) {
            Some(TimerEvent::Increase)
        } else {
            None
        }
    }
}
