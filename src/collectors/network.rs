use crate::error::ReadError;
use crate::models::network::{InterfaceCounters, NetworkSnapshot};
use crate::utils::file;
use log::{debug, trace};
use std::path::Path;
use std::time::Instant;

/// Where the byte counters sit among the numeric columns of `/proc/net/dev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub received_bytes: usize,
    pub transmitted_bytes: usize,
}

impl ColumnLayout {
    /// The layout every mainline kernel has shipped: eight receive columns, then transmit.
    pub const STANDARD: ColumnLayout = ColumnLayout {
        received_bytes: 0,
        transmitted_bytes: 8,
    };

    /// Locates the `bytes` column of the receive and transmit sections in the
    /// second header line, e.g.
    /// ` face |bytes    packets errs ... multicast|bytes    packets errs ... compressed`.
    pub fn from_header(header: &str) -> Option<Self> {
        let mut sections = header.split('|');
        let _face = sections.next()?;
        let receive = sections.next()?.split_whitespace().collect::<Vec<_>>();
        let transmit = sections.next()?.split_whitespace().collect::<Vec<_>>();

        let received_bytes = receive.iter().position(|label| *label == "bytes")?;
        let transmitted = transmit.iter().position(|label| *label == "bytes")?;

        Some(Self {
            received_bytes,
            transmitted_bytes: receive.len() + transmitted,
        })
    }

    /// Parses `  eth0: 1234 ...` (or `eth0:1234 ...`). `None` for anything malformed.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<(&'a str, InterfaceCounters)> {
        let (name, rest) = line.split_once(':')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let fields = rest.split_whitespace().collect::<Vec<_>>();
        let received_bytes = fields.get(self.received_bytes)?.parse().ok()?;
        let transmitted_bytes = fields.get(self.transmitted_bytes)?.parse().ok()?;

        Some((
            name,
            InterfaceCounters {
                received_bytes,
                transmitted_bytes,
            },
        ))
    }
}

pub fn collect_io(path: &Path) -> Result<NetworkSnapshot, ReadError> {
    let start = Instant::now();
    let contents = file::read_to_string(path)?;
    let result = parse_net_dev(&contents, path);
    debug!("collect_io took: {} ms", start.elapsed().as_millis());
    result
}

pub fn parse_net_dev(contents: &str, path: &Path) -> Result<NetworkSnapshot, ReadError> {
    let mut lines = contents.lines();
    let _title = lines
        .next()
        .ok_or_else(|| ReadError::layout(path, "missing header"))?;
    let header = lines
        .next()
        .ok_or_else(|| ReadError::layout(path, "missing column header"))?;
    let layout = ColumnLayout::from_header(header).ok_or_else(|| {
        ReadError::layout(path, format!("no receive/transmit bytes columns in {header:?}"))
    })?;
    if layout != ColumnLayout::STANDARD {
        debug!("Non-standard {} layout: {:?}", path.display(), layout);
    }

    let mut snapshot = NetworkSnapshot::default();
    for line in lines {
        match layout.parse_line(line) {
            Some((name, counters)) => snapshot.insert(name, counters),
            None => trace!("Skipping malformed line in {}: {line:?}", path.display()),
        }
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const NET_DEV: &str = "Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 2776770   11307    0    0    0     0          0         0  2776770   11307    0    0    0     0       0          0
  eth0: 1215645    2751    0    0    0     0          0         0  1782404    4324    0    0    0   427       0          0
 wlan0:9876543210 100    0    0    0     0          0         0  123456789    50    0    0    0     0       0          0
";

    fn counters(rx: u64, tx: u64) -> InterfaceCounters {
        InterfaceCounters {
            received_bytes: rx,
            transmitted_bytes: tx,
        }
    }

    #[test]
    fn test_standard_header() {
        let header = NET_DEV.lines().nth(1).unwrap();
        assert_eq!(ColumnLayout::from_header(header), Some(ColumnLayout::STANDARD));
    }

    #[test]
    fn test_parse_net_dev() {
        let snapshot = parse_net_dev(NET_DEV, Path::new("/proc/net/dev")).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get("lo"), Some(&counters(2776770, 2776770)));
        assert_eq!(snapshot.get("eth0"), Some(&counters(1215645, 1782404)));
        assert_eq!(snapshot.get("wlan0"), Some(&counters(9876543210, 123456789)));

        let names = snapshot.interfaces.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(names, ["lo", "eth0", "wlan0"]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let contents = "Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
  eth0: 100 1 0 0 0 0 0 0 200 2 0 0 0 0 0 0
  bad0: 100 1 0 0
  bad1: x 1 0 0 0 0 0 0 200 2 0 0 0 0 0 0
no separator here

  eth1: 300 1 0 0 0 0 0 0 400 2 0 0 0 0 0 0
";
        let snapshot = parse_net_dev(contents, Path::new("/proc/net/dev")).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("eth0"), Some(&counters(100, 200)));
        assert_eq!(snapshot.get("eth1"), Some(&counters(300, 400)));
    }

    #[test]
    fn test_reordered_header() {
        let header = " face |packets bytes errs|packets bytes";
        let layout = ColumnLayout::from_header(header).unwrap();
        assert_eq!(
            layout,
            ColumnLayout {
                received_bytes: 1,
                transmitted_bytes: 4
            }
        );
        assert_eq!(
            layout.parse_line("eth0: 1 100 0 2 200"),
            Some(("eth0", counters(100, 200)))
        );
    }

    #[test]
    fn test_unrecognised_header() {
        let contents = "Interface statistics\nname rx tx\neth0: 1 2\n";
        let err = parse_net_dev(contents, Path::new("/proc/net/dev")).unwrap_err();
        assert!(matches!(err, ReadError::Layout { .. }));
    }

    #[test]
    fn test_missing_header() {
        let err = parse_net_dev("", Path::new("/proc/net/dev")).unwrap_err();
        assert!(matches!(err, ReadError::Layout { .. }));
    }

    #[test]
    fn test_missing_source() {
        let err = collect_io(Path::new("/nonexistent/proc/net/dev")).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn test_idempotent() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(NET_DEV.as_bytes()).unwrap();
        assert_eq!(
            collect_io(temp_file.path()).unwrap(),
            collect_io(temp_file.path()).unwrap()
        );
    }
}
