use ratatui::style::Style;

use super::canvas::Canvas;
use super::format::{format_bytes, format_rate, usage_bar};
use super::layout::{
    Rows, CPU_BAR_ROW, CPU_DETAIL_ROW, MEMORY_BAR_ROW, RAM_ROW, STORAGE_HEADER_ROW, SWAP_ROW,
};
use crate::config::{Theme, Thresholds};
use crate::metrics::{BatteryInfo, CpuInfo, DiskInfo, MemoryInfo, NetCounters};
use crate::rates::NetRates;

pub const CPU_GLYPHS: (char, char) = ('💖', '🤍');
pub const MEMORY_GLYPHS: (char, char) = ('🧠', '😴');
pub const DISK_GLYPHS: (char, char) = ('💎', '💫');
pub const BATTERY_GLYPHS: (char, char) = ('⚡', '✨');

fn bar(percent: f32, glyphs: (char, char)) -> String {
    usage_bar(percent, glyphs.0, glyphs.1)
}

fn breakdown(label: &str, info: &MemoryInfo) -> String {
    format!(
        "{}: {} | Used: {} | Free: {}",
        label,
        format_bytes(info.total as f64),
        format_bytes(info.used as f64),
        format_bytes(info.free as f64),
    )
}

pub fn render_cpu(
    cpu: Option<&CpuInfo>,
    theme: &Theme,
    thresholds: &Thresholds,
    canvas: &mut Canvas,
) {
    let Some(cpu) = cpu else {
        return;
    };
    let color = thresholds.cpu_severity(cpu.percent).color(theme);
    canvas.put(
        0,
        CPU_BAR_ROW,
        &format!(
            "💻 CPU Usage: [{}] {:5.1}%  (｡♥‿♥｡)",
            bar(cpu.percent, CPU_GLYPHS),
            cpu.percent
        ),
        Style::default().fg(color),
    );

    let frequency = match cpu.frequency_mhz {
        Some(mhz) => format!("{:.1}MHz", mhz as f64),
        None => "n/a".to_string(),
    };
    canvas.put(
        0,
        CPU_DETAIL_ROW,
        &format!(
            "🎯 CPU Cores: {} | Frequency: {}  (｡◕‿◕｡)",
            cpu.cores, frequency
        ),
        Style::default().fg(theme.text),
    );
}

pub fn render_memory(
    memory: Option<&MemoryInfo>,
    swap: Option<&MemoryInfo>,
    theme: &Theme,
    thresholds: &Thresholds,
    canvas: &mut Canvas,
) {
    let text = Style::default().fg(theme.text);

    if let Some(mem) = memory {
        let color = thresholds.memory_severity(mem.percent).color(theme);
        canvas.put(
            0,
            MEMORY_BAR_ROW,
            &format!(
                "📦 Memory:   [{}] {:5.1}%  (๑˃̵ᴗ˂̵)و",
                bar(mem.percent, MEMORY_GLYPHS),
                mem.percent
            ),
            Style::default().fg(color),
        );
        canvas.put(0, RAM_ROW, &format!("🌸 {}  (⁎˃ᆺ˂)", breakdown("RAM", mem)), text);
    }

    if let Some(swap) = swap {
        canvas.put(0, SWAP_ROW, &format!("💫 {}  (◕‿◕✿)", breakdown("Swap", swap)), text);
    }
}

pub fn render_storage(
    disks: &[DiskInfo],
    theme: &Theme,
    thresholds: &Thresholds,
    canvas: &mut Canvas,
) {
    canvas.put(
        0,
        STORAGE_HEADER_ROW,
        "💾 Storage Devices (ﾉ◕ヮ◕)ﾉ*:･ﾟ✧",
        Style::default().fg(theme.accent),
    );

    for (i, disk) in disks.iter().enumerate() {
        let y = Rows::disk_row(i);
        if y >= canvas.height() {
            break;
        }
        let color = thresholds.storage_severity(disk.percent).color(theme);
        canvas.put(
            0,
            y,
            &format!(
                "📂 {}: [{}] {:.1}%  (´｡• ᵕ •｡`)",
                disk.mountpoint,
                bar(disk.percent, DISK_GLYPHS),
                disk.percent
            ),
            Style::default().fg(color),
        );
        canvas.put(
            2,
            y.saturating_add(1),
            &format!(
                "Total: {} | Used: {} | Free: {}  [{}] ✧◝(⁰▿⁰)◜✧",
                format_bytes(disk.total as f64),
                format_bytes(disk.used as f64),
                format_bytes(disk.free as f64),
                disk.device,
            ),
            Style::default().fg(theme.text),
        );
    }
}

/// Both lines are skipped when there is no rate for this tick.
pub fn render_network(
    counters: Option<&NetCounters>,
    rates: Option<&NetRates>,
    rows: &Rows,
    theme: &Theme,
    canvas: &mut Canvas,
) {
    let (Some(counters), Some(rates)) = (counters, rates) else {
        return;
    };
    let style = Style::default().fg(theme.warning);
    canvas.put(
        0,
        rows.upload,
        &format!(
            "📡 Upload:   {} (Total: {})  (๑•̀ㅂ•́)و",
            format_rate(rates.upload),
            format_bytes(counters.bytes_sent as f64)
        ),
        style,
    );
    canvas.put(
        0,
        rows.download,
        &format!(
            "📥 Download: {} (Total: {})  (๑•̀ω•́)و",
            format_rate(rates.download),
            format_bytes(counters.bytes_recv as f64)
        ),
        style,
    );
}

pub fn render_battery(
    battery: Option<&BatteryInfo>,
    rows: &Rows,
    theme: &Theme,
    thresholds: &Thresholds,
    canvas: &mut Canvas,
) {
    let (Some(battery), Some(y)) = (battery, rows.battery) else {
        return;
    };
    let color = thresholds.battery_severity(battery.percent).color(theme);
    let plugged = if battery.plugged {
        "🔌 Plugged In"
    } else {
        "🔋 On Battery"
    };
    canvas.put(
        0,
        y,
        &format!(
            "🔋 Battery: [{}] {:.0}% {}  (◕‿◕✿)",
            bar(battery.percent, BATTERY_GLYPHS),
            battery.percent,
            plugged
        ),
        Style::default().fg(color),
    );
}
