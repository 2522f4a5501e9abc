use crate::error::ReadError;
use crate::models::memory::MemorySnapshot;
use crate::utils::file;
use log::debug;
use std::path::Path;
use std::time::Instant;

pub fn collect_usage(path: &Path) -> Result<f64, ReadError> {
    let start = Instant::now();
    let snapshot = read(path)?;
    let result = snapshot
        .percent()
        .ok_or_else(|| ReadError::parse(path, "MemTotal is zero"));
    debug!("collect_memory took: {} ms", start.elapsed().as_millis());
    result
}

pub fn read(path: &Path) -> Result<MemorySnapshot, ReadError> {
    let contents = file::read_to_string(path)?;
    parse_meminfo(&contents, path)
}

/// Parses `Key: value kB` lines. Falls back to free + buffers + cached on
/// kernels that predate `MemAvailable`.
pub fn parse_meminfo(contents: &str, path: &Path) -> Result<MemorySnapshot, ReadError> {
    let mut total = None;
    let mut available = None;
    let mut free = 0u64;
    let mut buffers = 0u64;
    let mut cached = 0u64;

    for line in contents.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let Ok(value) = value.parse::<u64>() else {
            continue;
        };

        match key.trim_end_matches(':') {
            "MemTotal" => total = Some(value),
            "MemAvailable" => available = Some(value),
            "MemFree" => free = value,
            "Buffers" => buffers = value,
            "Cached" => cached = value,
            _ => {}
        }

        if total.is_some() && available.is_some() {
            break;
        }
    }

    let total = total.ok_or_else(|| ReadError::parse(path, "missing MemTotal"))?;
    let available =
        available.unwrap_or_else(|| free.saturating_add(buffers).saturating_add(cached));

    Ok(MemorySnapshot { total, available })
}
