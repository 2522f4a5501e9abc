use crate::config::MonitorConfig;
use std::path::PathBuf;

pub mod collector;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod system;
pub mod thermal;

/// Locations of every counter source, derived from the `procfs`/`sysfs` roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub stat: PathBuf,
    pub meminfo: PathBuf,
    pub uptime: PathBuf,
    pub net_dev: PathBuf,
    pub sysfs: PathBuf,
    pub mount_point: PathBuf,
}

impl From<&MonitorConfig> for SourcePaths {
    fn from(config: &MonitorConfig) -> Self {
        let procfs = PathBuf::from(&config.procfs);
        Self {
            stat: procfs.join("stat"),
            meminfo: procfs.join("meminfo"),
            uptime: procfs.join("uptime"),
            net_dev: procfs.join("net/dev"),
            sysfs: PathBuf::from(&config.sysfs),
            mount_point: PathBuf::from(&config.mount_point),
        }
    }
}
