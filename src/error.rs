use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: &'static str, value: String },

    #[error("Invalid tick interval {0} ms: must be between 1 and 1000")]
    InvalidTickInterval(u64),

    #[error("Invalid wave amplitude {0}: must be a finite number")]
    InvalidAmplitude(f64),

    #[error("Invalid wave frequency {0}: must be a finite number")]
    InvalidFrequency(f64),
}

impl ConfigError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::ReadError { .. } => "ReadError",
            ConfigError::WriteError { .. } => "WriteError",
            ConfigError::ParseError(_) => "ParseError",
            ConfigError::SerializeError(_) => "SerializeError",
            ConfigError::NoConfigDir => "NoConfigDir",
            ConfigError::InvalidEnvVar { .. } => "InvalidEnvVar",
            ConfigError::InvalidTickInterval(_) => "InvalidTickInterval",
            ConfigError::InvalidAmplitude(_) => "InvalidAmplitude",
            ConfigError::InvalidFrequency(_) => "InvalidFrequency",
        }
    }
}

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Prompt failed: {0}")]
    PromptError(String),

    #[error("Setup cancelled")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
