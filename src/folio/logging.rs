use crate::error::{FolioError, Result};

/// Installs the stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or `debug`
/// when verbose.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_level))
        .map_err(|err| FolioError::Config(format!("build log filter: {err}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| FolioError::Config(format!("initialize tracing subscriber: {err}")))?;

    Ok(())
}
