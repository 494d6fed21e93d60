use crate::metrics::MetricsSnapshot;
use crate::rates::{self, NetRates, NetSample};

/// What gets drawn for one tick: the snapshot plus everything derived from it.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub snapshot: MetricsSnapshot,
    /// `None` when there is no baseline yet or no time has passed.
    pub rates: Option<NetRates>,
}

impl Dashboard {
    pub fn build(snapshot: MetricsSnapshot, previous: Option<&NetSample>) -> Self {
        let rates = match (previous, NetSample::from_snapshot(&snapshot)) {
            (Some(prev), Some(curr)) => rates::compute(prev, &curr),
            _ => None,
        };
        Self { snapshot, rates }
    }

    /// Build from `snapshot` and move the baseline forward. If the counters
    /// could not be read this tick the old baseline is kept, so the next rate
    /// spans both ticks.
    pub fn advance(snapshot: MetricsSnapshot, previous: &mut Option<NetSample>) -> Self {
        let dashboard = Self::build(snapshot, previous.as_ref());
        if let Some(current) = NetSample::from_snapshot(&dashboard.snapshot) {
            *previous = Some(current);
        }
        dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::NetCounters;
    use chrono::{DateTime, Local, TimeZone};

    fn at(secs: i64) -> DateTime<Local> {
        Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn snapshot(secs: i64, net: Option<(u64, u64)>) -> MetricsSnapshot {
        let mut snap = MetricsSnapshot::empty(at(secs));
        snap.net = net.map(|(sent, recv)| NetCounters {
            bytes_sent: sent,
            bytes_recv: recv,
        });
        snap
    }

    #[test]
    fn test_no_baseline_no_rates() {
        let dash = Dashboard::build(snapshot(0, Some((10, 10))), None);
        assert!(dash.rates.is_none());
    }

    #[test]
    fn test_advance_moves_baseline() {
        let mut prev = NetSample::from_snapshot(&snapshot(0, Some((1000, 0))));
        let dash = Dashboard::advance(snapshot(1, Some((2024, 512))), &mut prev);
        let rates = dash.rates.unwrap();
        assert_eq!(rates.upload, 1024.0);
        assert_eq!(rates.download, 512.0);
        assert_eq!(prev.unwrap().counters.bytes_sent, 2024);
        assert_eq!(prev.unwrap().at, at(1));
    }

    #[test]
    fn test_missing_counters_keep_baseline() {
        let mut prev = NetSample::from_snapshot(&snapshot(0, Some((0, 0))));
        let dash = Dashboard::advance(snapshot(1, None), &mut prev);
        assert!(dash.rates.is_none());
        assert_eq!(prev.unwrap().at, at(0));

        let dash = Dashboard::advance(snapshot(2, Some((2048, 0))), &mut prev);
        assert_eq!(dash.rates.unwrap().upload, 1024.0);
    }

    #[test]
    fn test_same_timestamp_omits_rates() {
        let mut prev = NetSample::from_snapshot(&snapshot(5, Some((0, 0))));
        let dash = Dashboard::advance(snapshot(5, Some((100, 100))), &mut prev);
        assert!(dash.rates.is_none());
    }
}
