use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::animation::{DEFAULT_WAVE_AMPLITUDE, DEFAULT_WAVE_FREQUENCY, Motion, MotionMode};
use crate::error::ConfigError;

pub const ENV_MOTION: &str = "HOGSMEADE_MOTION";
pub const ENV_TICK_MS: &str = "HOGSMEADE_TICK_MS";

pub const MAX_TICK_MS: u64 = 1000;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub hide_hud: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    #[serde(default)]
    pub motion: MotionMode,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_frequency")]
    pub frequency: f64,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct SceneConfig {
    #[serde(default)]
    pub start_at_night: bool,
}

pub fn default_tick_ms() -> u64 {
    33
}

pub fn default_amplitude() -> f64 {
    DEFAULT_WAVE_AMPLITUDE
}

pub fn default_frequency() -> f64 {
    DEFAULT_WAVE_FREQUENCY
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            motion: MotionMode::default(),
            tick_ms: default_tick_ms(),
            amplitude: default_amplitude(),
            frequency: default_frequency(),
        }
    }
}

impl AnimationConfig {
    pub fn motion(&self) -> Motion {
        match self.motion {
            MotionMode::Linear => Motion::Linear,
            MotionMode::Wave => Motion::Wave {
                amplitude: self.amplitude,
                frequency: self.frequency,
            },
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let mut config = Self::load_from_path(&config_path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(ENV_MOTION) {
            self.animation.motion =
                val.parse::<MotionMode>()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: ENV_MOTION,
                        value: val.clone(),
                    })?;
        }

        if let Ok(val) = env::var(ENV_TICK_MS) {
            self.animation.tick_ms =
                val.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: ENV_TICK_MS,
                        value: val.clone(),
                    })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick_ms = self.animation.tick_ms;
        if tick_ms == 0 || tick_ms > MAX_TICK_MS {
            return Err(ConfigError::InvalidTickInterval(tick_ms));
        }

        if !self.animation.amplitude.is_finite() {
            return Err(ConfigError::InvalidAmplitude(self.animation.amplitude));
        }

        if !self.animation.frequency.is_finite() {
            return Err(ConfigError::InvalidFrequency(self.animation.frequency));
        }

        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(ConfigError::ParseError)
    }

    pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
                .ok_or(ConfigError::NoConfigDir)?
        };

        Ok(config_dir.join("hogsmeade"))
    }

    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
