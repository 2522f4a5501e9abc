use indexmap::IndexMap;
use std::time::Duration;

pub const LOOPBACK: &str = "lo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceCounters {
    pub received_bytes: u64,
    pub transmitted_bytes: u64,
}

/// Byte counters for every interface listed in `/proc/net/dev`, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkSnapshot {
    pub interfaces: IndexMap<String, InterfaceCounters>,
}

/// Aggregate throughput across all non-loopback interfaces, in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkRates {
    pub received_per_sec: u64,
    pub transmitted_per_sec: u64,
}

impl InterfaceCounters {
    /// Per-counter growth since `previous`. A counter that went backwards
    /// (reset or wraparound) counts as zero.
    pub fn delta_since(&self, previous: &InterfaceCounters) -> InterfaceCounters {
        InterfaceCounters {
            received_bytes: growth(previous.received_bytes, self.received_bytes),
            transmitted_bytes: growth(previous.transmitted_bytes, self.transmitted_bytes),
        }
    }
}

fn growth(previous: u64, current: u64) -> u64 {
    if current >= previous {
        current - previous
    } else {
        0
    }
}

impl NetworkSnapshot {
    pub fn insert(&mut self, name: impl Into<String>, counters: InterfaceCounters) {
        self.interfaces.insert(name.into(), counters);
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceCounters> {
        self.interfaces.get(name)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, InterfaceCounters)> for NetworkSnapshot {
    fn from_iter<T: IntoIterator<Item = (S, InterfaceCounters)>>(iter: T) -> Self {
        Self {
            interfaces: iter
                .into_iter()
                .map(|(name, counters)| (name.into(), counters))
                .collect(),
        }
    }
}

impl NetworkRates {
    /// Sums the growth of every interface in `current` except loopback and
    /// scales it to a per-second rate. Interfaces missing from `previous` are
    /// measured from zero.
    pub fn between(
        previous: &NetworkSnapshot,
        current: &NetworkSnapshot,
        interval: Duration,
    ) -> Self {
        let mut received = 0u64;
        let mut transmitted = 0u64;

        for (name, counters) in &current.interfaces {
            if name == LOOPBACK {
                continue;
            }
            let before = previous.get(name).copied().unwrap_or_default();
            let delta = counters.delta_since(&before);
            received = received.saturating_add(delta.received_bytes);
            transmitted = transmitted.saturating_add(delta.transmitted_bytes);
        }

        let seconds = interval.as_secs_f64();
        if seconds <= 0.0 {
            return Self {
                received_per_sec: received,
                transmitted_per_sec: transmitted,
            };
        }

        Self {
            received_per_sec: (received as f64 / seconds) as u64,
            transmitted_per_sec: (transmitted as f64 / seconds) as u64,
        }
    }
}
