//! # pomoruler
//!
//! Terminal countdown timer.
//!
//! ```bash
//! # 25 minutes, drawn inline
//! pomoruler
//!
//! # start from 50 minutes in the alternate screen, with a debug log
//! pomoruler --minutes 50 --alt-screen --log-file timer.log --log-level debug
//! ```
//!
//! ←/→ change the duration in five minute steps. Four seconds after the last
//! change the countdown starts; pressing an arrow while it runs stops it.
//! `q`, `esc` or `ctrl+c` quits.

use anyhow::{Context, Result};
use bubbletea_rs::Program;
use pomoruler::config::{self, Cli};
use pomoruler::{logging, App};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_with_keys();

    if let Err(err) = run(cli).await {
        tracing::error!("{err:#}");
        eprintln!("Alas, there's been an error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        logging::init(path, &cli.log_level)?;
    }

    let settings = cli.settings();
    tracing::info!(duration = ?settings.duration, alt_screen = cli.alt_screen, "starting");
    if !config::install(settings) {
        tracing::warn!("launch settings were already installed; keeping the earlier ones");
    }

    let program = Program::<App>::builder()
        .alt_screen(cli.alt_screen)
        .build()
        .context("failed to set up the terminal program")?;
    program.run().await.context("terminal program failed")?;

    tracing::info!("exiting");
    Ok(())
}
