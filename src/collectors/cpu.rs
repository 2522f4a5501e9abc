use crate::error::ReadError;
use crate::models::cpu::CpuTimes;
use crate::utils::file;
use log::debug;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Number of leading `/proc/stat` columns that make up [`CpuTimes`].
const CPU_FIELDS: usize = 8;

/// Turns successive `/proc/stat` readings into a busy percentage.
///
/// Only the previous reading is kept. The very first observation has nothing to
/// compare against and reports 0%.
#[derive(Debug)]
pub struct CpuSampler {
    path: PathBuf,
    last: Option<CpuTimes>,
}

impl CpuSampler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last: None,
        }
    }

    /// Reads `/proc/stat` and returns cpu usage since the previous call.
    ///
    /// A failed read leaves the baseline untouched.
    pub fn sample(&mut self) -> Result<f64, ReadError> {
        let start = Instant::now();
        let contents = file::read_to_string(&self.path)?;
        let times = parse_stat(&contents, &self.path)?;
        let usage = self.observe(times);
        debug!("cpu sample took: {} ms", start.elapsed().as_millis());
        Ok(usage)
    }

    /// Feeds one reading into the sampler and returns usage in [0, 100].
    pub fn observe(&mut self, times: CpuTimes) -> f64 {
        let Some(last) = self.last.replace(times) else {
            return 0.0;
        };

        let total_delta = times.total_time.saturating_sub(last.total_time);
        let idle_delta = times.idle_time.saturating_sub(last.idle_time);
        if total_delta == 0 {
            return 0.0;
        }

        let busy = total_delta.saturating_sub(idle_delta);
        (busy as f64 * 100.0 / total_delta as f64).clamp(0.0, 100.0)
    }

    pub fn has_baseline(&self) -> bool {
        self.last.is_some()
    }
}

/// Extracts the aggregate `cpu` line. Columns past steal (guest, guest_nice) are ignored.
pub fn parse_stat(contents: &str, path: &Path) -> Result<CpuTimes, ReadError> {
    let line = contents
        .lines()
        .find(|line| line.split_whitespace().next() == Some("cpu"))
        .ok_or_else(|| ReadError::parse(path, "missing aggregate cpu line"))?;

    let fields = line
        .split_whitespace()
        .skip(1)
        .take(CPU_FIELDS)
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| ReadError::parse(path, format!("invalid cpu time: {token:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let fields: [u64; CPU_FIELDS] = fields.try_into().map_err(|fields: Vec<u64>| {
        ReadError::parse(
            path,
            format!("expected {CPU_FIELDS} cpu fields, found {}", fields.len()),
        )
    })?;

    Ok(CpuTimes::from_fields(fields))
}
