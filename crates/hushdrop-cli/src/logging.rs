//! Log output for the `hushdrop` binary.
//!
//! Logs go to stderr so that schema documents printed on stdout stay machine-readable.

use eyre::WrapErr as _;
use tracing_subscriber::EnvFilter;

use crate::cli::constants::{DEFAULT_LOG_FILTER, HUSHDROP_LOG};

/// Directives from `HUSHDROP_LOG`, or the hushdrop defaults when it is unset or empty.
///
/// A set but unparsable value is an error instead of a silent fallback.
fn log_filter(directives: Option<&str>) -> eyre::Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::builder()
        .parse(directives)
        .wrap_err_with(|| format!("Invalid {HUSHDROP_LOG} directives `{directives}`"))
}

/// Install the global subscriber.
///
/// With the `tokio-console` feature the console layer runs next to the formatted output.
pub fn init(directives: Option<&str>) -> eyre::Result<()> {
    let filter = log_filter(directives)?;

    #[cfg(feature = "tokio-console")]
    {
        use tracing_subscriber::prelude::*;
        tracing_subscriber::registry()
            .with(console_subscriber::spawn())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(filter),
            )
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing: {e}"))?;
    }

    #[cfg(not(feature = "tokio-console"))]
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_hushdrop_crates() {
        let filter = log_filter(None).expect("default directives parse");
        let rendered = filter.to_string();
        for target in ["hushdrop_sdk=info", "hushdrop_tree=info", "hushdrop_hash=info"] {
            assert!(rendered.contains(target), "{rendered} lacks {target}");
        }
        assert_eq!(
            log_filter(Some("  ")).expect("blank falls back").to_string(),
            rendered
        );
    }

    #[test]
    fn explicit_directives_replace_defaults() {
        let filter = log_filter(Some("hushdrop_tree=trace")).expect("valid directive");
        assert_eq!(filter.to_string(), "hushdrop_tree=trace");
    }

    #[test]
    fn invalid_directives_are_reported() {
        let err = log_filter(Some("hushdrop_tree=loud")).expect_err("unknown level");
        assert!(err.to_string().contains(HUSHDROP_LOG));
    }
}
