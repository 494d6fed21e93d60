use ratatui::style::Color;

use crate::config::{Theme, Thresholds};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Nominal,
    Alert,
}

impl Severity {
    /// Higher is worse: alert at or above `threshold`.
    pub fn usage(percent: f32, threshold: f32) -> Self {
        if percent >= threshold {
            Severity::Alert
        } else {
            Severity::Nominal
        }
    }

    /// Lower is worse: alert strictly below `low`.
    pub fn battery(percent: f32, low: f32) -> Self {
        if percent < low {
            Severity::Alert
        } else {
            Severity::Nominal
        }
    }

    pub fn color(self, theme: &Theme) -> Color {
        match self {
            Severity::Nominal => theme.nominal,
            Severity::Alert => theme.alert,
        }
    }
}

impl Thresholds {
    pub fn cpu_severity(&self, percent: f32) -> Severity {
        Severity::usage(percent, self.cpu)
    }

    pub fn memory_severity(&self, percent: f32) -> Severity {
        Severity::usage(percent, self.memory)
    }

    pub fn storage_severity(&self, percent: f32) -> Severity {
        Severity::usage(percent, self.storage)
    }

    pub fn battery_severity(&self, percent: f32) -> Severity {
        Severity::battery(percent, self.battery_low)
    }
}
