/// Cumulative cpu time from the aggregate `cpu` line of `/proc/stat`, in clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuTimes {
    /// idle + iowait.
    pub idle_time: u64,
    /// user + nice + system + irq + softirq + steal.
    pub non_idle_time: u64,
    pub total_time: u64,
}

impl CpuTimes {
    /// Builds the aggregate from the first eight `/proc/stat` columns, in kernel order.
    pub fn from_fields(
        [user, nice, system, idle, iowait, irq, softirq, steal]: [u64; 8],
    ) -> Self {
        let idle_time = idle + iowait;
        let non_idle_time = user + nice + system + irq + softirq + steal;
        Self {
            idle_time,
            non_idle_time,
            total_time: idle_time + non_idle_time,
        }
    }
}
