/// A temperature taken from one thermal zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalReading {
    pub zone: u32,
    pub celsius: f64,
}

impl ThermalReading {
    /// Interprets a raw sysfs value. Anything above 1000 is taken to be millidegrees.
    /// A negative value means the zone has no usable reading.
    pub fn from_raw(zone: u32, raw: i64) -> Option<Self> {
        if raw < 0 {
            return None;
        }
        let celsius = if raw > 1000 {
            raw as f64 / 1000.0
        } else {
            raw as f64
        };
        Some(Self { zone, celsius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millidegrees() {
        assert_eq!(ThermalReading::from_raw(0, 45000).unwrap().celsius, 45.0);
        assert_eq!(ThermalReading::from_raw(0, 1001).unwrap().celsius, 1.001);
    }

    #[test]
    fn test_whole_degrees() {
        assert_eq!(ThermalReading::from_raw(3, 52).unwrap().celsius, 52.0);
        assert_eq!(ThermalReading::from_raw(3, 1000).unwrap().celsius, 1000.0);
        assert_eq!(ThermalReading::from_raw(3, 0).unwrap().celsius, 0.0);
    }

    #[test]
    fn test_negative_is_unavailable() {
        assert_eq!(ThermalReading::from_raw(1, -5000), None);
        assert_eq!(ThermalReading::from_raw(1, -1), None);
    }
}
