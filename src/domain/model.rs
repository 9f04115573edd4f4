use std::fmt;
use std::time::Duration;

/// Resolution label offered by the quality selector.
///
/// Purely cosmetic: nothing downstream reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quality {
    P1080,
    #[default]
    P720,
    P480,
    P360,
}

impl Quality {
    /// Selector order.
    pub const ALL: [Quality; 4] = [Quality::P1080, Quality::P720, Quality::P480, Quality::P360];

    pub fn label(self) -> &'static str {
        match self {
            Quality::P1080 => "1080p",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::P360 => "360p",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Timing of the simulated download
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Percentage points added per tick
    pub step: u8,
    pub interval: Duration,
    /// Terminal progress value
    pub max: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step: 10,
            interval: Duration::from_millis(500),
            max: 100,
        }
    }
}
