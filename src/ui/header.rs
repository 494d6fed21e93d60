use ratatui::style::Style;

use super::canvas::Canvas;
use super::format::format_uptime;
use super::layout::{footer_row, IDENTITY_ROW, TITLE_ROW, UPTIME_ROW};
use crate::config::Theme;
use crate::metrics::MetricsSnapshot;

pub fn render_title(snapshot: &MetricsSnapshot, theme: &Theme, canvas: &mut Canvas) {
    let clock = snapshot.taken_at.format("%H:%M:%S");
    let title = format!(
        "(❤️ ω ❤️)  Kawaii System Monitor  (✿◡‿◡)   {}  (❤️ ω ❤️)",
        clock
    );
    canvas.put_centered(TITLE_ROW, &title, Style::default().fg(theme.info));
}

pub fn render_identity(snapshot: &MetricsSnapshot, theme: &Theme, canvas: &mut Canvas) {
    let id = &snapshot.identity;
    if id.os.is_empty() {
        return;
    }
    let mut line = format!("🖥️  System: {}", id.os);
    if !id.release.is_empty() {
        line.push(' ');
        line.push_str(&id.release);
    }
    if !id.machine.is_empty() {
        line.push_str(&format!(" ({})", id.machine));
    }
    if !id.host.is_empty() {
        line.push_str(&format!(" on {}", id.host));
    }
    line.push_str(" (◕‿◕✿)");
    canvas.put(0, IDENTITY_ROW, &line, Style::default().fg(theme.info));
}

pub fn render_uptime(snapshot: &MetricsSnapshot, theme: &Theme, canvas: &mut Canvas) {
    let Some(secs) = snapshot.uptime_secs() else {
        return;
    };
    let line = format!("⏰ Uptime: {} ฅ^•ﻌ•^ฅ", format_uptime(secs));
    canvas.put(0, UPTIME_ROW, &line, Style::default().fg(theme.warning));
}

pub fn render_footer(theme: &Theme, canvas: &mut Canvas) {
    let Some(y) = footer_row(canvas.height()) else {
        return;
    };
    canvas.put(
        0,
        y,
        "🌈 Press 'q' to exit ~ ( ˘ ³˘)♥  See you later, alligator! 〳〵✧",
        Style::default().fg(theme.info),
    );
}
