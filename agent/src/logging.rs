use tracing_subscriber::{EnvFilter, fmt};

use crate::{AgentError, Result};

/// Initialize logging to stdout.
///
/// Filter directives come from `RUST_LOG`; `default` is used when it is unset
/// or invalid.
///
/// ```
/// agent::init_logging("info").unwrap();
/// ```
pub fn init_logging(default: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AgentError::Logging(e.to_string()))
}
