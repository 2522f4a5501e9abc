pub const UNKNOWN: &str = "Unknown";

/// Who and where the monitor is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub hostname: String,
    pub username: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            hostname: UNKNOWN.to_string(),
            username: UNKNOWN.to_string(),
        }
    }
}
