use crate::collectors::cpu::CpuSampler;
use crate::collectors::{disk, memory, network, system, thermal, SourcePaths};
use crate::error::ReadError;
use crate::models::network::{NetworkRates, NetworkSnapshot};
use crate::models::DisplayFrame;
use log::{debug, error, info};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Owns all state that survives between ticks: the cpu baseline and the
/// previous network snapshot.
pub struct Collector {
    paths: SourcePaths,
    interval: Duration,
    cpu: CpuSampler,
    previous_network: Option<NetworkSnapshot>,
    /// Sources whose last read failed, so a persistent failure is logged once.
    failing: HashSet<&'static str>,
}

impl Collector {
    /// Creates a collector and takes the baseline network snapshot.
    pub fn new(paths: SourcePaths, interval: Duration) -> Self {
        let mut collector = Self {
            cpu: CpuSampler::new(&paths.stat),
            paths,
            interval,
            previous_network: None,
            failing: HashSet::new(),
        };
        let baseline = network::collect_io(&collector.paths.net_dev);
        collector.previous_network = collector.settle("network", baseline);
        collector
    }

    pub fn collect(&mut self) -> DisplayFrame {
        let start = Instant::now();

        let cpu = self.cpu.sample();
        let cpu_percent = self.settle("cpu", cpu);
        let memory_percent = self.settle("memory", memory::collect_usage(&self.paths.meminfo));
        let uptime_secs = self.settle("uptime", system::collect_uptime(&self.paths.uptime));
        let disk_percent = self.settle("disk", disk::collect_usage(&self.paths.mount_point));
        let temperature = self.settle(
            "temperature",
            thermal::collect_temperature(&self.paths.sysfs),
        );
        let network = self.network_rates();
        let identity = system::collect_identity();

        let frame = DisplayFrame {
            identity,
            uptime_secs,
            temperature,
            network,
            cpu_percent,
            memory_percent,
            disk_percent,
        };

        debug!("{:?}", frame);
        debug!("collect took: {} ms", start.elapsed().as_millis());
        frame
    }

    /// Rates against the previous snapshot, after which the current snapshot
    /// becomes the previous one. A failed read keeps the old baseline.
    fn network_rates(&mut self) -> Option<NetworkRates> {
        let current = network::collect_io(&self.paths.net_dev);
        let current = self.settle("network", current)?;

        let rates = self
            .previous_network
            .as_ref()
            .map(|previous| NetworkRates::between(previous, &current, self.interval));
        self.previous_network = Some(current);
        rates
    }

    /// Logs a failed read the first time it happens and when it recovers.
    fn settle<T>(&mut self, source: &'static str, result: Result<T, ReadError>) -> Option<T> {
        match result {
            Ok(value) => {
                if self.failing.remove(source) {
                    info!("{source} readings recovered");
                }
                Some(value)
            }
            Err(e) => {
                if self.failing.insert(source) {
                    error!("{source} unavailable: {e}");
                } else {
                    debug!("{source} still unavailable: {e}");
                }
                None
            }
        }
    }
}
