use ratatui::style::{Modifier, Style};

use super::canvas::Canvas;
use super::format::truncate_width;
use super::layout::Rows;
use crate::config::Theme;
use crate::metrics::ProcessInfo;

const NAME_WIDTH: usize = 30;

pub fn render(
    processes: &[ProcessInfo],
    process_count: usize,
    rows: &Rows,
    theme: &Theme,
    canvas: &mut Canvas,
) {
    canvas.put(
        0,
        rows.current_y,
        &format!("🎀 Running Processes: {} (◕ᴥ◕)", process_count),
        Style::default().fg(theme.accent),
    );
    canvas.put(
        0,
        rows.process_title(),
        "🌟 Top Kawaii Processes:",
        Style::default().fg(theme.info),
    );
    canvas.put(
        0,
        rows.process_header(),
        "📌 PID    🏎 CPU%   💾 MEM%   ✨ Name  (≧◡≦)",
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let visible = rows.process_capacity(canvas.height());
    let text = Style::default().fg(theme.text);
    for (i, process) in processes.iter().take(visible).enumerate() {
        let y = rows.first_process().saturating_add(i as u16);
        canvas.put(0, y, &process_line(process), text);
    }
}

fn process_line(process: &ProcessInfo) -> String {
    format!(
        "🎀 {:<6} 🚀 {:>5.1} 💖 {:>6.1}  🎉 {}  (✿◠‿◠)",
        process.pid,
        process.cpu_percent,
        process.memory_percent,
        truncate_width(&process.name, NAME_WIDTH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_line_columns() {
        let line = process_line(&ProcessInfo {
            pid: 42,
            name: "firefox".into(),
            cpu_percent: 12.34,
            memory_percent: 3.0,
        });
        assert_eq!(line, "🎀 42     🚀  12.3 💖    3.0  🎉 firefox  (✿◠‿◠)");
    }

    #[test]
    fn test_process_line_long_name_truncated() {
        let line = process_line(&ProcessInfo {
            pid: 1,
            name: "x".repeat(64),
            cpu_percent: 0.0,
            memory_percent: 0.0,
        });
        assert!(line.contains(&format!("🎉 {}  ", "x".repeat(30))));
        assert!(!line.contains(&"x".repeat(31)));
    }
}
