//! Battery probe.
//!
//! Only Linux exposes a battery through sysfs; everywhere else the battery
//! section is simply omitted.

use super::BatteryInfo;

#[cfg(target_os = "linux")]
pub fn read() -> Option<BatteryInfo> {
    linux::read_from(std::path::Path::new(linux::POWER_SUPPLY_ROOT))
}

#[cfg(not(target_os = "linux"))]
pub fn read() -> Option<BatteryInfo> {
    None
}

#[cfg(target_os = "linux")]
mod linux {
    use std::path::Path;

    use tracing::debug;

    use super::BatteryInfo;

    pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

    fn read_trimmed(path: &Path) -> Option<String> {
        let raw = std::fs::read_to_string(path).ok()?;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// First battery found under `root`. Plugged state comes from any online
    /// mains/USB supply, falling back to the battery's own status.
    pub fn read_from(root: &Path) -> Option<BatteryInfo> {
        let entries = std::fs::read_dir(root).ok()?;

        let mut percent = None;
        let mut status = None;
        let mut ac_online = None;

        for entry in entries.flatten() {
            let dir = entry.path();
            let Some(kind) = read_trimmed(&dir.join("type")) else {
                continue;
            };
            match kind.as_str() {
                "Battery" if percent.is_none() => {
                    let Some(capacity) = read_trimmed(&dir.join("capacity"))
                        .and_then(|c| c.parse::<f32>().ok())
                    else {
                        debug!(path = %dir.display(), "battery without readable capacity");
                        continue;
                    };
                    percent = Some(capacity.clamp(0.0, 100.0));
                    status = read_trimmed(&dir.join("status"));
                }
                "Mains" | "USB" => {
                    if let Some(online) = read_trimmed(&dir.join("online")) {
                        let online = online == "1";
                        ac_online = Some(ac_online.unwrap_or(false) || online);
                    }
                }
                _ => {}
            }
        }

        let percent = percent?;
        let plugged = ac_online.unwrap_or_else(|| {
            matches!(
                status.as_deref(),
                Some("Charging") | Some("Full") | Some("Not charging")
            )
        });

        Some(BatteryInfo { percent, plugged })
    }

}
