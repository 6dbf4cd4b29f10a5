use crate::error::ConfigError;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub const ENV_LOG: &str = "RUST_LOG";

/// Sets up `log` output without fighting the full-screen terminal.
///
/// With a log file, records are appended there (default level `info`).
/// Without one, stderr is only used when `RUST_LOG` asks for it, since
/// anything written there lands on top of the scene.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let env = Env::default().filter(ENV_LOG);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut builder = Builder::from_env(env.default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            // A second init (tests, embedding) keeps the first logger.
            builder.try_init().ok();
        }
        None => {
            if std::env::var_os(ENV_LOG).is_some() {
                Builder::from_env(env).try_init().ok();
            }
        }
    }

    Ok(())
}

/// Records that the scene is running on defaults because the config failed
/// to load. Called once the logger is up, so a configured log file sees it.
pub fn config_fallback(err: &ConfigError) {
    log::warn!("config load failed, using defaults: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_log_file_creates_file() {
        let path = std::env::temp_dir().join("hogsmeade_test_logging.log");
        init(Some(&path)).unwrap();
        assert!(path.exists());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_init_with_unwritable_log_file_fails() {
        let result = init(Some(Path::new("/dev/null/hogsmeade.log")));
        assert!(result.is_err());
    }
}
