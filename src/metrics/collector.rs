use std::ffi::OsStr;

use chrono::Local;
use sysinfo::{Disks, Networks, System};
use tracing::debug;

use super::{
    battery, percent_of, sort_by_cpu, CpuInfo, DiskInfo, MemoryInfo, MetricsSnapshot,
    MetricsSource, NetCounters, ProcessInfo, SystemIdentity,
};

/// Metrics provider backed by `sysinfo`.
///
/// Keeps one `System` alive across ticks: CPU usage (global and per process)
/// is computed by sysinfo from the difference between two refreshes, so a
/// sample taken right after `new` reads as idle.
pub struct SysinfoSource {
    sys: System,
    identity: SystemIdentity,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_all();

        let identity = SystemIdentity {
            os: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            release: System::kernel_version().unwrap_or_default(),
            machine: std::env::consts::ARCH.to_string(),
            host: System::host_name().unwrap_or_default(),
        };

        Self { sys, identity }
    }

    /// Just the network counters, used for the loop's baseline before the first tick.
    pub fn net_counters(&self) -> Option<NetCounters> {
        read_net_counters()
    }

    fn cpu(&self) -> Option<CpuInfo> {
        let cpus = self.sys.cpus();
        if cpus.is_empty() {
            debug!("no cpus reported, skipping cpu section");
            return None;
        }
        let frequency = cpus[0].frequency();
        Some(CpuInfo {
            percent: self.sys.global_cpu_usage(),
            cores: cpus.len(),
            frequency_mhz: (frequency > 0).then_some(frequency),
        })
    }

    fn memory(&self) -> Option<MemoryInfo> {
        let total = self.sys.total_memory();
        if total == 0 {
            debug!("memory totals unavailable");
            return None;
        }
        Some(MemoryInfo::new(total, self.sys.used_memory(), self.sys.free_memory()))
    }

    fn swap(&self) -> Option<MemoryInfo> {
        Some(MemoryInfo::new(
            self.sys.total_swap(),
            self.sys.used_swap(),
            self.sys.free_swap(),
        ))
    }

    fn processes(&self) -> Vec<ProcessInfo> {
        let entries = self.sys.processes().iter().map(|(pid, process)| {
            let name: &OsStr = process.name().as_ref();
            ProcessEntry {
                pid: pid.as_u32(),
                name: name.to_string_lossy().into_owned(),
                cpu_percent: process.cpu_usage(),
                memory_bytes: process.memory(),
                is_thread: process.thread_kind().is_some(),
            }
        });
        process_list(entries, self.sys.total_memory())
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoSource {
    fn sample(&mut self) -> MetricsSnapshot {
        self.sys.refresh_all();

        let processes = self.processes();
        let snapshot = MetricsSnapshot {
            taken_at: Local::now(),
            identity: self.identity.clone(),
            boot_time: Some(System::boot_time()).filter(|t| *t > 0),
            cpu: self.cpu(),
            memory: self.memory(),
            swap: self.swap(),
            disks: read_disks(),
            net: read_net_counters(),
            battery: battery::read(),
            process_count: processes.len(),
            processes,
        };

        debug!(
            disks = snapshot.disks.len(),
            processes = snapshot.process_count,
            battery = snapshot.battery.is_some(),
            "sampled metrics"
        );
        snapshot
    }
}

fn read_disks() -> Vec<DiskInfo> {
    let disks = Disks::new_with_refreshed_list();
    disk_list(disks.list().iter().map(|disk| DiskEntry {
        device: disk.name().to_string_lossy().into_owned(),
        mountpoint: disk.mount_point().to_string_lossy().into_owned(),
        total: disk.total_space(),
        available: disk.available_space(),
    }))
}

fn read_net_counters() -> Option<NetCounters> {
    let networks = Networks::new_with_refreshed_list();
    let counters = sum_counters(
        networks
            .list()
            .values()
            .map(|data| (data.total_transmitted(), data.total_received())),
    );
    if counters.is_none() {
        debug!("no network interfaces found");
    }
    counters
}

// ---------------------------------------------------------------------------
// Mapping from sysinfo's view to snapshot types
// ---------------------------------------------------------------------------

/// One row of `System::processes()`, detached from sysinfo.
struct ProcessEntry {
    pid: u32,
    name: String,
    cpu_percent: f32,
    memory_bytes: u64,
    /// Linux lists every thread next to its process; those are dropped.
    is_thread: bool,
}

struct DiskEntry {
    device: String,
    mountpoint: String,
    total: u64,
    available: u64,
}

fn process_list(
    entries: impl IntoIterator<Item = ProcessEntry>,
    total_memory: u64,
) -> Vec<ProcessInfo> {
    let mut list: Vec<ProcessInfo> = entries
        .into_iter()
        .filter(|entry| !entry.is_thread)
        .map(|entry| ProcessInfo {
            pid: entry.pid,
            name: entry.name,
            cpu_percent: entry.cpu_percent,
            memory_percent: percent_of(entry.memory_bytes, total_memory),
        })
        .collect();
    sort_by_cpu(&mut list);
    list
}

fn disk_list(entries: impl IntoIterator<Item = DiskEntry>) -> Vec<DiskInfo> {
    entries
        .into_iter()
        .filter_map(|entry| {
            // sysinfo reports a zero total when statvfs failed on the mount.
            if entry.total == 0 {
                debug!(mountpoint = %entry.mountpoint, "skipping unreadable mount");
                return None;
            }
            Some(DiskInfo::new(
                entry.device,
                entry.mountpoint,
                entry.total,
                entry.available,
            ))
        })
        .collect()
}

/// Totals across interfaces as (sent, received); `None` with no interfaces.
fn sum_counters(per_interface: impl IntoIterator<Item = (u64, u64)>) -> Option<NetCounters> {
    let mut interfaces = per_interface.into_iter().peekable();
    interfaces.peek()?;
    Some(
        interfaces.fold(NetCounters::default(), |acc, (sent, recv)| NetCounters {
            bytes_sent: acc.bytes_sent.saturating_add(sent),
            bytes_recv: acc.bytes_recv.saturating_add(recv),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pid: u32, cpu: f32, memory_bytes: u64, is_thread: bool) -> ProcessEntry {
        ProcessEntry {
            pid,
            name: format!("p{}", pid),
            cpu_percent: cpu,
            memory_bytes,
            is_thread,
        }
    }

    fn disk(device: &str, mountpoint: &str, total: u64, available: u64) -> DiskEntry {
        DiskEntry {
            device: device.to_string(),
            mountpoint: mountpoint.to_string(),
            total,
            available,
        }
    }

    #[test]
    fn test_threads_not_listed_as_processes() {
        let entries = vec![
            entry(100, 5.0, 0, false),
            entry(101, 40.0, 0, true),
            entry(102, 30.0, 0, true),
            entry(200, 1.0, 0, false),
        ];
        let list = process_list(entries, 1024);
        let pids: Vec<u32> = list.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![100, 200]);
    }

    #[test]
    fn test_process_list_sorted_busiest_first() {
        let entries = vec![
            entry(1, 2.0, 0, false),
            entry(2, 75.5, 0, false),
            entry(3, 10.0, 0, false),
        ];
        let list = process_list(entries, 1024);
        let pids: Vec<u32> = list.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn test_process_memory_percent_of_total() {
        let list = process_list(vec![entry(7, 0.0, 256, false)], 1024);
        assert_eq!(list[0].memory_percent, 25.0);

        let list = process_list(vec![entry(7, 0.0, 256, false)], 0);
        assert_eq!(list[0].memory_percent, 0.0);
    }

    #[test]
    fn test_zero_size_mount_skipped() {
        let disks = disk_list(vec![
            disk("/dev/sda1", "/", 1000, 250),
            disk("proc", "/proc", 0, 0),
            disk("/dev/sda2", "/home", 4000, 4000),
        ]);
        let mounts: Vec<&str> = disks.iter().map(|d| d.mountpoint.as_str()).collect();
        assert_eq!(mounts, vec!["/", "/home"]);
        assert_eq!(disks[0].device, "/dev/sda1");
        assert_eq!(disks[0].used, 750);
        assert_eq!(disks[1].percent, 0.0);
    }

    #[test]
    fn test_counters_summed_across_interfaces() {
        let counters = sum_counters(vec![(100, 1), (u64::MAX, 2)]).unwrap();
        assert_eq!(counters.bytes_sent, u64::MAX);
        assert_eq!(counters.bytes_recv, 3);
    }

    #[test]
    fn test_no_interfaces_no_counters() {
        assert_eq!(sum_counters(Vec::<(u64, u64)>::new()), None);
    }
}
