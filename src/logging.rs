use crate::config::LogConfig;
use crate::error::{Error, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "contact_form=info" } else { "warn" }
}

/// Initialize structured logging.
///
/// The UI owns stdout, so logs go to the configured file. Without one they
/// go to stderr, and only when `RUST_LOG` asks for them.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.verbose)));

    match &config.file {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::LogFile {
                path: path.clone(),
                source,
            })?;
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
        }
        None if std::env::var_os("RUST_LOG").is_some() => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
        }
        None => return Ok(()),
    }

    if config.verbose {
        tracing::info!("verbose logging enabled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::default_filter;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn default_filter_is_quiet_unless_verbose() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "contact_form=info");
    }

    #[test]
    fn default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }
}
