use chrono::{DateTime, Local};

use crate::metrics::{MetricsSnapshot, NetCounters};

/// The only state carried from one tick to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetSample {
    pub counters: NetCounters,
    pub at: DateTime<Local>,
}

impl NetSample {
    pub fn new(counters: NetCounters, at: DateTime<Local>) -> Self {
        Self { counters, at }
    }

    /// `None` when the snapshot has no network counters.
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Option<Self> {
        snapshot.net.map(|counters| Self::new(counters, snapshot.taken_at))
    }
}

/// Bytes per second, never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetRates {
    pub upload: f64,
    pub download: f64,
}

/// Rates between two samples, or `None` if no time has passed (or the wall
/// clock stepped backwards). A counter that went down was reset by the OS and
/// counts as zero traffic.
pub fn compute(previous: &NetSample, current: &NetSample) -> Option<NetRates> {
    let elapsed = elapsed_secs(previous.at, current.at);
    if elapsed <= 0.0 {
        return None;
    }
    Some(NetRates {
        upload: rate(previous.counters.bytes_sent, current.counters.bytes_sent, elapsed),
        download: rate(previous.counters.bytes_recv, current.counters.bytes_recv, elapsed),
    })
}

fn elapsed_secs(from: DateTime<Local>, to: DateTime<Local>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1000.0,
    }
}

fn rate(previous: u64, current: u64, elapsed: f64) -> f64 {
    current.saturating_sub(previous) as f64 / elapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(ms: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    fn sample(sent: u64, recv: u64, ms: i64) -> NetSample {
        NetSample::new(
            NetCounters {
                bytes_sent: sent,
                bytes_recv: recv,
            },
            at(ms),
        )
    }

    #[test]
    fn test_rate_over_one_second() {
        let rates = compute(&sample(1000, 0, 0), &sample(2024, 4096, 1000)).unwrap();
        assert_eq!(rates.upload, 1024.0);
        assert_eq!(rates.download, 4096.0);
    }

    #[test]
    fn test_rate_over_half_second() {
        let rates = compute(&sample(0, 0, 0), &sample(500, 250, 500)).unwrap();
        assert_eq!(rates.upload, 1000.0);
        assert_eq!(rates.download, 500.0);
    }

    #[test]
    fn test_zero_elapsed_skips_division() {
        assert_eq!(compute(&sample(0, 0, 0), &sample(10, 10, 0)), None);
    }

    #[test]
    fn test_clock_stepped_back() {
        assert_eq!(compute(&sample(0, 0, 1000), &sample(10, 10, 0)), None);
    }

    #[test]
    fn test_counter_reset_clamps_to_zero() {
        let rates = compute(&sample(5000, 9000, 0), &sample(100, 9500, 1000)).unwrap();
        assert_eq!(rates.upload, 0.0);
        assert_eq!(rates.download, 500.0);
    }

    #[test]
    fn test_from_snapshot_without_net() {
        let snap = MetricsSnapshot::empty(at(0));
        assert_eq!(NetSample::from_snapshot(&snap), None);
    }

    #[test]
    fn test_elapsed_sub_millisecond() {
        let start = at(0);
        let end = start + Duration::microseconds(250);
        assert!((elapsed_secs(start, end) - 0.00025).abs() < 1e-9);
    }
}
