//! Tracing subscriber setup.

use anyhow::{Result, bail};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::MakeWriter,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. `format` is `text`
/// (human-readable, compact) or `json` (one object per line, for log
/// shippers).
///
/// # Errors
///
/// Returns an error for an unknown format or if a subscriber is already
/// installed.
pub fn init(default_level: &str, format: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        "text" => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact(),
            )
            .try_init()?,
        "json" => registry.with(json_layer(std::io::stdout)).try_init()?,
        other => bail!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
    }

    Ok(())
}

/// JSON lines, each carrying the span it was emitted in.
fn json_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .json()
        .with_current_span(true)
        .with_writer(make_writer)
}
