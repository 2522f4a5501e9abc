use crate::error::ReadError;
use crate::models::disk::DiskSnapshot;
use log::debug;
use nix::sys::statvfs::{statvfs, Statvfs};
use std::io;
use std::path::Path;
use std::time::Instant;

pub fn collect_usage(path: &Path) -> Result<f64, ReadError> {
    let start = Instant::now();
    let result = read(path).and_then(|snapshot| {
        snapshot
            .percent()
            .ok_or_else(|| ReadError::parse(path, "filesystem reports zero capacity"))
    });
    debug!("collect_disk took: {} ms", start.elapsed().as_millis());
    result
}

/// Capacity of the filesystem holding `path`, whatever its type.
pub fn read(path: &Path) -> Result<DiskSnapshot, ReadError> {
    let stats = statvfs(path).map_err(|errno| ReadError::io(path, io::Error::from(errno)))?;
    Ok(snapshot(&stats))
}

fn snapshot(stats: &Statvfs) -> DiskSnapshot {
    let fragment_size = stats.fragment_size() as u64;
    DiskSnapshot {
        total_bytes: (stats.blocks() as u64).saturating_mul(fragment_size),
        available_bytes: (stats.blocks_available() as u64).saturating_mul(fragment_size),
    }
}
