pub mod canvas;
pub mod format;
pub mod header;
pub mod layout;
pub mod processes;
pub mod resources;
pub mod severity;

use ratatui::Frame;

use crate::config::Config;
use crate::dashboard::Dashboard;
use canvas::Canvas;
use layout::Rows;

/// Draw one full dashboard. Pure: the output depends only on `dashboard`,
/// `config` and the frame size.
pub fn render(dashboard: &Dashboard, config: &Config, frame: &mut Frame) {
    let area = frame.area();
    let mut canvas = Canvas::new(frame.buffer_mut(), area);
    draw(dashboard, config, &mut canvas);
}

pub fn draw(dashboard: &Dashboard, config: &Config, canvas: &mut Canvas) {
    let snap = &dashboard.snapshot;
    let theme = &config.theme;
    let thresholds = &config.thresholds;
    let rows = Rows::compute(snap.disks.len(), snap.battery.is_some());

    header::render_title(snap, theme, canvas);
    header::render_identity(snap, theme, canvas);
    header::render_uptime(snap, theme, canvas);
    resources::render_cpu(snap.cpu.as_ref(), theme, thresholds, canvas);
    resources::render_memory(
        snap.memory.as_ref(),
        snap.swap.as_ref(),
        theme,
        thresholds,
        canvas,
    );
    resources::render_storage(&snap.disks, theme, thresholds, canvas);
    resources::render_network(
        snap.net.as_ref(),
        dashboard.rates.as_ref(),
        &rows,
        theme,
        canvas,
    );
    resources::render_battery(snap.battery.as_ref(), &rows, theme, thresholds, canvas);
    processes::render(&snap.processes, snap.process_count, &rows, theme, canvas);
    header::render_footer(theme, canvas);
}
