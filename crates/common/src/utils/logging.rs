use std::io;

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Directives used by the compact output when neither `RUST_LOG` nor a
/// configured filter is present.
pub const DEFAULT_COMPACT_FILTER: &str = "info,tower_http=info,axum=info";
/// Same, for JSON output; store mutations are logged at debug.
pub const DEFAULT_JSON_FILTER: &str = "info,service=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Compact,
    Json,
}

/// Directives applied when `RUST_LOG` is unset: the configured filter if it
/// is non-blank, otherwise the per-output default.
pub fn fallback_directives(output: LogOutput, configured: Option<&str>) -> &str {
    match configured.map(str::trim) {
        Some(f) if !f.is_empty() => f,
        _ => match output {
            LogOutput::Compact => DEFAULT_COMPACT_FILTER,
            LogOutput::Json => DEFAULT_JSON_FILTER,
        },
    }
}

/// Install the global stdout subscriber.
///
/// `RUST_LOG` wins over `configured`. Returns `false` when a subscriber was
/// already installed, in which case nothing changes.
pub fn init_logging(output: LogOutput, configured: Option<&str>) -> bool {
    let directives = fallback_directives(output, configured);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);
    let installed = match output {
        LogOutput::Compact => builder.compact().try_init().is_ok(),
        LogOutput::Json => builder.json().try_init().is_ok(),
    };
    if installed {
        debug!(?output, fallback = directives, "tracing subscriber installed");
    }
    installed
}

/// Compact output with the default filter; used before configuration is known.
pub fn init_logging_default() -> bool {
    init_logging(LogOutput::Compact, None)
}
