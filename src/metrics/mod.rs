pub mod battery;
pub mod collector;

use chrono::{DateTime, Local};

pub use collector::SysinfoSource;

/// Anything that can produce one tick's worth of metrics.
///
/// Sampling never fails as a whole: a metric that cannot be read is left out
/// of the snapshot for that tick.
pub trait MetricsSource {
    fn sample(&mut self) -> MetricsSnapshot;
}

/// Everything polled during a single tick.
#[derive(Clone, Debug)]
pub struct MetricsSnapshot {
    pub taken_at: DateTime<Local>,
    pub identity: SystemIdentity,
    /// Seconds since the Unix epoch.
    pub boot_time: Option<u64>,
    pub cpu: Option<CpuInfo>,
    pub memory: Option<MemoryInfo>,
    pub swap: Option<MemoryInfo>,
    pub disks: Vec<DiskInfo>,
    pub net: Option<NetCounters>,
    pub battery: Option<BatteryInfo>,
    /// Sorted by CPU usage, highest first.
    pub processes: Vec<ProcessInfo>,
    pub process_count: usize,
}

impl MetricsSnapshot {
    /// A snapshot with nothing in it, taken at `taken_at`.
    #[cfg(test)]
    pub fn empty(taken_at: DateTime<Local>) -> Self {
        Self {
            taken_at,
            identity: SystemIdentity::default(),
            boot_time: None,
            cpu: None,
            memory: None,
            swap: None,
            disks: Vec::new(),
            net: None,
            battery: None,
            processes: Vec::new(),
            process_count: 0,
        }
    }

    /// Uptime in whole seconds, if the boot time is known and not in the future.
    pub fn uptime_secs(&self) -> Option<u64> {
        let boot = self.boot_time?;
        let now = u64::try_from(self.taken_at.timestamp()).ok()?;
        now.checked_sub(boot)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemIdentity {
    pub os: String,
    pub release: String,
    pub machine: String,
    pub host: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CpuInfo {
    pub percent: f32,
    pub cores: usize,
    pub frequency_mhz: Option<u64>,
}

/// Used for both RAM and swap.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryInfo {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f32,
}

impl MemoryInfo {
    pub fn new(total: u64, used: u64, free: u64) -> Self {
        Self {
            total,
            used,
            free,
            percent: percent_of(used, total),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiskInfo {
    pub device: String,
    pub mountpoint: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f32,
}

impl DiskInfo {
    pub fn new(device: String, mountpoint: String, total: u64, free: u64) -> Self {
        let used = total.saturating_sub(free);
        Self {
            device,
            mountpoint,
            total,
            used,
            free,
            percent: percent_of(used, total),
        }
    }
}

/// Cumulative byte counters across all interfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatteryInfo {
    pub percent: f32,
    pub plugged: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// Stable sort, busiest first. NaN readings go to the bottom.
pub fn sort_by_cpu(processes: &mut [ProcessInfo]) {
    fn key(p: &ProcessInfo) -> f32 {
        if p.cpu_percent.is_nan() {
            f32::NEG_INFINITY
        } else {
            p.cpu_percent
        }
    }
    processes.sort_by(|a, b| key(b).total_cmp(&key(a)));
}

pub(crate) fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 100.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn proc(pid: u32, cpu: f32) -> ProcessInfo {
        ProcessInfo {
            pid,
            name: format!("p{}", pid),
            cpu_percent: cpu,
            memory_percent: 0.0,
        }
    }

    #[test]
    fn test_sort_by_cpu_descending() {
        let mut list = vec![proc(1, 5.0), proc(2, 50.0), proc(3, 12.5)];
        sort_by_cpu(&mut list);
        let pids: Vec<u32> = list.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_cpu_ties_keep_order() {
        let mut list = vec![proc(7, 1.0), proc(3, 1.0), proc(9, 2.0)];
        sort_by_cpu(&mut list);
        let pids: Vec<u32> = list.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![9, 7, 3]);
    }

    #[test]
    fn test_sort_by_cpu_nan_last() {
        let mut list = vec![proc(1, f32::NAN), proc(2, 0.0)];
        sort_by_cpu(&mut list);
        assert_eq!(list[0].pid, 2);
        assert_eq!(list[1].pid, 1);
    }

    #[test]
    fn test_disk_info_derives_used_and_percent() {
        let disk = DiskInfo::new("/dev/sda1".into(), "/".into(), 1000, 150);
        assert_eq!(disk.used, 850);
        assert!((disk.percent - 85.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_memory_info_zero_total() {
        let mem = MemoryInfo::new(0, 0, 0);
        assert_eq!(mem.percent, 0.0);
    }

    #[test]
    fn test_uptime_from_boot_time() {
        let now = Local.timestamp_opt(1_000_000, 0).unwrap();
        let mut snap = MetricsSnapshot::empty(now);
        snap.boot_time = Some(1_000_000 - 90_061);
        assert_eq!(snap.uptime_secs(), Some(90_061));
    }

    #[test]
    fn test_uptime_boot_in_future_is_none() {
        let now = Local.timestamp_opt(1_000, 0).unwrap();
        let mut snap = MetricsSnapshot::empty(now);
        snap.boot_time = Some(2_000);
        assert_eq!(snap.uptime_secs(), None);
    }
}
