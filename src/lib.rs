pub mod collectors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod input;
pub mod models;
pub mod renderer;
pub mod utils;

use crate::collectors::collector::Collector;
use crate::collectors::SourcePaths;
use crate::config::AppConfig;
use crate::input::KeyAction;
use crate::renderer::terminal::{self, Terminal};
use anyhow::Context;
use log::{debug, error, info};
use std::io;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);
/// Gap between the baseline network snapshot and the first tick.
pub const WARM_UP: Duration = Duration::from_millis(500);

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting system monitor");

    match monitor(&config).await {
        Ok(_) => info!("System monitor stopped"),
        Err(e) => {
            error!("Application error: {e:#}");
            // Print chain of error causes
            let mut source = e.source();
            while let Some(e) = source {
                error!("Caused by: {e}");
                source = e.source();
            }
            return Err(e).context("Monitor failed to run");
        }
    }

    Ok(())
}

async fn monitor(config: &AppConfig) -> anyhow::Result<()> {
    debug!("Using {:?}", config.monitor);
    let mut collector = Collector::new(SourcePaths::from(&config.monitor), REFRESH_INTERVAL);
    tokio::time::sleep(WARM_UP).await;

    terminal::install_panic_hook();
    let mut terminal = Terminal::init().context("Failed to initialise terminal")?;

    let result = main_loop(&mut collector).await;
    let restored = terminal.restore().context("Failed to restore terminal");
    result.and(restored)
}

async fn main_loop(collector: &mut Collector) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut stdout = io::stdout();

    loop {
        interval.tick().await; // Wait for the next tick

        if input::poll_action().context("Failed to read terminal input")? == KeyAction::Quit {
            info!("Quit requested");
            return Ok(());
        }

        let frame = collector.collect();
        dashboard::render(&mut stdout, &frame).context("Failed to draw dashboard")?;
    }
}
