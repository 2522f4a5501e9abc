pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod sensor;
pub mod system;

/// Everything drawn in one tick. Built fresh by the collector and dropped after rendering.
///
/// A `None` metric could not be read this tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayFrame {
    pub identity: system::Identity,
    pub uptime_secs: Option<f64>,
    pub temperature: Option<sensor::ThermalReading>,
    /// `None` until two network snapshots have been taken.
    pub network: Option<network::NetworkRates>,
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub disk_percent: Option<f64>,
}
