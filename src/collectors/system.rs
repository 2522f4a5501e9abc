use crate::error::ReadError;
use crate::models::system::{Identity, UNKNOWN};
use crate::utils::file;
use log::{debug, error};
use std::path::Path;
use std::time::Instant;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};

pub fn collect_uptime(path: &Path) -> Result<f64, ReadError> {
    let start = Instant::now();
    let contents = file::read_to_string(path)?;
    let result = parse_uptime(&contents, path);
    debug!("collect_uptime took: {} ms", start.elapsed().as_millis());
    result
}

/// `/proc/uptime` holds "<uptime> <idle>" in seconds; only the first is used.
pub fn parse_uptime(contents: &str, path: &Path) -> Result<f64, ReadError> {
    let token = contents
        .split_whitespace()
        .next()
        .ok_or_else(|| ReadError::parse(path, "empty uptime"))?;
    let seconds = token
        .parse::<f64>()
        .map_err(|_| ReadError::parse(path, format!("invalid uptime: {token:?}")))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ReadError::parse(path, format!("invalid uptime: {token:?}")));
    }
    Ok(seconds)
}

pub fn collect_identity() -> Identity {
    let start = Instant::now();
    let result = Identity {
        hostname: get_hostname(),
        username: get_username(),
    };
    debug!("collect_identity took: {} ms", start.elapsed().as_millis());
    result
}

pub fn get_hostname() -> String {
    System::host_name().unwrap_or_else(|| {
        error!("Failed to determine hostname");
        UNKNOWN.to_string()
    })
}

/// Resolves the owner of this process through the system user database.
pub fn get_username() -> String {
    current_username().unwrap_or_else(|| {
        error!("Failed to determine current user");
        UNKNOWN.to_string()
    })
}

fn current_username() -> Option<String> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_user(UpdateKind::Always),
    );
    let uid = sys.process(pid)?.user_id()?.clone();
    let users = Users::new_with_refreshed_list();
    users.get_user_by_id(&uid).map(|user| user.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_uptime() {
        let uptime = parse_uptime("12345.67 54321.00\n", Path::new("/proc/uptime")).unwrap();
        assert_eq!(uptime, 12345.67);
    }

    #[test]
    fn test_just_booted_is_a_reading() {
        let uptime = parse_uptime("0.00 0.00\n", Path::new("/proc/uptime")).unwrap();
        assert_eq!(uptime, 0.0);
    }

    #[test]
    fn test_parse_uptime_rejects_garbage() {
        assert!(parse_uptime("", Path::new("/proc/uptime")).is_err());
        assert!(parse_uptime("soon", Path::new("/proc/uptime")).is_err());
        assert!(parse_uptime("-5.0 1.0", Path::new("/proc/uptime")).is_err());
    }

    #[test]
    fn test_missing_source() {
        assert!(collect_uptime(Path::new("/nonexistent/proc/uptime")).is_err());
    }

    #[test]
    fn test_idempotent() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"350.25 700.50\n").unwrap();
        assert_eq!(
            collect_uptime(temp_file.path()).unwrap(),
            collect_uptime(temp_file.path()).unwrap()
        );
    }

    #[test]
    fn test_identity_never_empty() {
        let identity = collect_identity();
        assert!(!identity.hostname.is_empty());
        assert!(!identity.username.is_empty());
    }
}
