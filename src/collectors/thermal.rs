use crate::error::ReadError;
use crate::models::sensor::ThermalReading;
use crate::utils::file;
use log::{debug, trace};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Zones probed, `thermal_zone0` through `thermal_zone9`.
pub const THERMAL_ZONES: u32 = 10;

/// Reads the first thermal zone under `sysfs` that yields an integer.
/// A negative value there means no temperature; later zones are not tried.
pub fn collect_temperature(sysfs: &Path) -> Result<ThermalReading, ReadError> {
    let start = Instant::now();
    let result = read(sysfs);
    debug!("collect_temperature took: {} ms", start.elapsed().as_millis());
    result
}

fn read(sysfs: &Path) -> Result<ThermalReading, ReadError> {
    for zone in 0..THERMAL_ZONES {
        let path = zone_path(sysfs, zone);
        match file::read_number_from_file::<i64>(&path) {
            Ok(raw) => {
                return ThermalReading::from_raw(zone, raw)
                    .ok_or_else(|| ReadError::parse(&path, format!("negative temperature {raw}")))
            }
            Err(e) => trace!("Skipping thermal zone {zone}: {e}"),
        }
    }
    Err(ReadError::not_found("thermal zone"))
}

fn zone_path(sysfs: &Path, zone: u32) -> PathBuf {
    sysfs
        .join("class/thermal")
        .join(format!("thermal_zone{zone}"))
        .join("temp")
}
