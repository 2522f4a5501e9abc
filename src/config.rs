use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Path whose filesystem is shown in the disk bar.
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
    #[serde(default = "default_procfs")]
    pub procfs: String,
    #[serde(default = "default_sysfs")]
    pub sysfs: String,
}

fn default_mount_point() -> String {
    "/".to_string()
}

fn default_procfs() -> String {
    "/proc".to_string()
}

fn default_sysfs() -> String {
    "/sys".to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            procfs: default_procfs(),
            sysfs: default_sysfs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file, appended to. Empty means `sysmon.log` once a level is set.
    #[serde(default)]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

// stdout belongs to the dashboard, so nothing is logged unless asked for.
fn default_log_level() -> String {
    "off".to_string()
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(rename = "MONITOR", alias = "monitor", default)]
    pub monitor: MonitorConfig,
    #[serde(rename = "LOGGING", alias = "logging", default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "config.ini";
    pub const DEFAULT_LOG_FILE: &'static str = "sysmon.log";

    /// Loads `config.ini` from the working directory, or defaults if there is none.
    pub fn new() -> Result<Self> {
        if !Path::new(Self::DEFAULT_PATH).exists() {
            return Ok(Self::default());
        }
        Self::from_file(Self::DEFAULT_PATH)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    /// Where log records go. The terminal is never a target, since the dashboard owns it.
    pub fn log_file(&self) -> Option<&str> {
        if self.get_log_level() == LevelFilter::Off {
            return None;
        }
        if self.logging.file.is_empty() {
            Some(Self::DEFAULT_LOG_FILE)
        } else {
            Some(&self.logging.file)
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(config::FileFormat::Ini))
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!(
            "[MONITOR]\nmount_point = {}\nprocfs = {}\nsysfs = {}\n\n",
            self.monitor.mount_point, self.monitor.procfs, self.monitor.sysfs
        ));

        config_str.push_str(&format!(
            "[LOGGING]\nlevel = {}\nfile = {}\n",
            self.logging.level, self.logging.file
        ));

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
