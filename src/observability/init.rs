//! Tracing initialization and subscriber setup.
//!
//! The subscriber always carries a plain-text `fmt` layer writing to the
//! rotating log file. When trace export is requested an OpenTelemetry layer
//! is added whose spans go to the OTLP JSON file next to it.

use super::file_writer::FileWriter;
use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::sync::Arc;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor `--log-level` is given.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level`
/// 3. `"info"`
///
/// # File Locations
///
/// - Log: `<data dir>/phogo.log`
/// - Traces (with `config.export_traces`): `<data dir>/otlp.json`
///
/// Observability is optional: if the data directory cannot be created the
/// subscriber is simply not installed. Calling this more than once has no
/// further effect.
///
/// # Example
///
/// ```no_run
/// use phogo::observability::init_tracing;
/// use phogo::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_writer = Arc::new(FileWriter::new(paths::log_file_path()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_writer)
        .with_ansi(false)
        .with_target(true);

    let otel_layer = config.export_traces.then(|| {
        let resource = Resource::new(vec![
            opentelemetry::KeyValue::new("service.name", "phogo"),
            opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]);
        let provider = tracer::create_tracer_provider(paths::trace_file_path(), resource);
        OpenTelemetryLayer::new(provider.tracer("phogo"))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}
