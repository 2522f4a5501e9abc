use env_logger::{Builder, Target, WriteStyle};
use log::{error, LevelFilter};
use std::fs::OpenOptions;
use std::process::ExitCode;
use sysmon::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load configuration first (without logging)
    let config = AppConfig::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {:#}", e);
        // Fall back to default configuration
        AppConfig::default()
    });

    init_logger(&config);

    match sysmon::run(config).await {
        Ok(()) => {
            println!("System monitor stopped.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Exiting after fatal error");
            // the terminal is restored by now, so this is visible.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to a file; the terminal is reserved for the dashboard.
fn init_logger(config: &AppConfig) {
    let mut builder = Builder::new();
    builder
        .filter_level(config.get_log_level())
        .format_timestamp_secs()
        .write_style(WriteStyle::Never);

    if let Some(path) = config.log_file() {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", path, e);
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    builder.init();
}
