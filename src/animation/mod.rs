pub mod broom;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_WAVE_AMPLITUDE: f64 = 30.0;
pub const DEFAULT_WAVE_FREQUENCY: f64 = 0.05;

/// Which per-tick update the flying brooms use.
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    #[default]
    Linear,
    Wave,
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionMode::Linear => write!(f, "linear"),
            MotionMode::Wave => write!(f, "wave"),
        }
    }
}

impl FromStr for MotionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(MotionMode::Linear),
            "wave" => Ok(MotionMode::Wave),
            other => Err(format!(
                "Unknown motion mode '{}', expected 'linear' or 'wave'",
                other
            )),
        }
    }
}

/// A resolved motion, carrying the wave parameters when needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Linear,
    Wave { amplitude: f64, frequency: f64 },
}

impl Motion {
    pub fn wave() -> Self {
        Motion::Wave {
            amplitude: DEFAULT_WAVE_AMPLITUDE,
            frequency: DEFAULT_WAVE_FREQUENCY,
        }
    }

    pub fn mode(&self) -> MotionMode {
        match self {
            Motion::Linear => MotionMode::Linear,
            Motion::Wave { .. } => MotionMode::Wave,
        }
    }
}
