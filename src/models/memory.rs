/// Memory counters from `/proc/meminfo`, in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemorySnapshot {
    pub total: u64,
    pub available: u64,
}

impl MemorySnapshot {
    /// Share of memory in use, `None` when the total is unknown.
    pub fn percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let used = self.total.saturating_sub(self.available);
        Some(used as f64 * 100.0 / self.total as f64)
    }
}
