//! Logging setup for the depcheck binary.
//!
//! Library code only emits `tracing` events; the binary decides where they
//! go. Logs are written to stderr so stdout carries the rendered graph.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the filter for the given verbosity flags.
///
/// `verbose` wins over `quiet`; with neither set, `RUST_LOG` is honored
/// and falls back to warnings only.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("depcheck=debug")
    } else if quiet {
        EnvFilter::new("depcheck=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depcheck=warn"))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at startup. Later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbose() {
        assert_eq!(filter_for(true, false).to_string(), "depcheck=debug");
        assert_eq!(filter_for(true, true).to_string(), "depcheck=debug");
    }

    #[test]
    fn test_filter_for_quiet() {
        assert_eq!(filter_for(false, true).to_string(), "depcheck=error");
    }

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false, true);
        init_logger(false, true);
    }
}
