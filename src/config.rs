//! Command-line options and launch settings.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so the binary parses the
//! command line into [`Cli`], converts it to [`Settings`] and installs them
//! with [`install`] before the program starts. [`settings`] hands them to the
//! [`App`](crate::app::App), falling back to the defaults.

use crate::key::TimerKeyMap;
use crate::state::{round_down, DEFAULT_DURATION};
use clap::{CommandFactory, FromArgMatches, Parser};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::time::Duration;

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// A countdown timer with a minute ruler.
///
/// The countdown starts four seconds after the last adjustment; adjusting
/// while it runs cancels it.
#[derive(Debug, Clone, Parser)]
#[command(name = "pomoruler", version, about, long_about = None)]
pub struct Cli {
    /// Initial duration in minutes, rounded down to a multiple of five.
    #[arg(short = 'd', long, default_value_t = DEFAULT_DURATION.as_secs() / 60)]
    pub minutes: u64,

    /// Draw in the terminal's alternate screen instead of inline.
    #[arg(long)]
    pub alt_screen: bool,

    /// Write log output to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used with --log-file, overridden by RUST_LOG.
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl Cli {
    /// The command definition, with the key bindings listed after the options.
    pub fn command_with_keys() -> clap::Command {
        Cli::command().after_help(format!("Keys:\n{}", TimerKeyMap::default().help_text()))
    }

    /// Parses the process arguments, exiting with usage on error.
    pub fn parse_with_keys() -> Self {
        let matches = Self::command_with_keys().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }

    /// Launch settings described by these options.
    pub fn settings(&self) -> Settings {
        Settings {
            duration: round_down(Duration::from_secs(self.minutes.saturating_mul(60))),
        }
    }
}

/// Values the timer starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Initial duration, on the five minute grid.
    pub duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
        }
    }
}

/// Installs the launch settings. Only the first call has an effect.
///
/// Returns `false` if settings were already installed.
pub fn install(settings: Settings) -> bool {
    SETTINGS.set(settings).is_ok()
}

/// The installed launch settings, or the defaults.
pub fn settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}
