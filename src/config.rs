use std::time::Duration;

use ratatui::style::Color;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Usage below its threshold.
    pub nominal: Color,
    /// Title, identity line, section titles, footer.
    pub info: Color,
    /// Uptime and network lines.
    pub warning: Color,
    /// Usage at or over its threshold, low battery.
    pub alert: Color,
    /// Storage header, process count.
    pub accent: Color,
    /// Process column header.
    pub highlight: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            nominal: Color::Green,
            info: Color::Cyan,
            warning: Color::Yellow,
            alert: Color::Red,
            accent: Color::Magenta,
            highlight: Color::LightCyan,
            text: Color::Reset,
        }
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Percent values where a bar switches to the alert color.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    pub cpu: f32,
    pub memory: f32,
    pub storage: f32,
    /// Battery alerts *below* this value.
    pub battery_low: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu: 70.0,
            memory: 70.0,
            storage: 80.0,
            battery_low: 20.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

/// Built-in look and cadence of the dashboard. There is no file or flag to
/// change it; tests construct their own.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub thresholds: Thresholds,
    pub refresh_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            thresholds: Thresholds::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}
