/// Capacity of the filesystem backing one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiskSnapshot {
    /// `f_blocks * f_frsize`.
    pub total_bytes: u64,
    /// `f_bavail * f_frsize`, i.e. what an unprivileged user may still write.
    pub available_bytes: u64,
}

impl DiskSnapshot {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.available_bytes)
    }

    pub fn percent(&self) -> Option<f64> {
        if self.total_bytes == 0 {
            return None;
        }
        Some(self.used_bytes() as f64 * 100.0 / self.total_bytes as f64)
    }
}
