use crate::error::ReadError;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

pub fn read_to_string(path: &Path) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|e| ReadError::io(path, e))
}

/// Designed for reading a single `i64` from a sysfs attribute file such as
/// `/sys/class/thermal/thermal_zoneN/temp`.
pub fn read_number_from_file<N>(path: &Path) -> Result<N, ReadError>
where
    N: std::str::FromStr,
{
    let mut reader = [0u8; 32];
    let mut f = File::open(path).map_err(|e| ReadError::io(path, e))?;
    let n = f.read(&mut reader).map_err(|e| ReadError::io(path, e))?;
    // parse and trim would complain about `\0`.
    let number = std::str::from_utf8(&reader[..n])
        .map_err(|e| ReadError::parse(path, e.to_string()))?;
    let number = number.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    number
        .parse()
        .map_err(|_| ReadError::parse(path, format!("not a number: {number:?}")))
}
