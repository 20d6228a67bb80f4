//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name attached to every span.
pub const SERVICE_NAME: &str = "weatherdash";

/// Trace file location inside the sandbox:
/// `/host/.local/share/zellij/weatherdash/weatherdash-otlp.json`.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    crate::infrastructure::paths::get_data_dir().join("weatherdash-otlp.json")
}

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` feeding an OpenTelemetry layer that writes OTLP JSON
/// to [`trace_file_path`].
///
/// Observability is optional: if the data directory cannot be created or a
/// subscriber is already installed, this returns without error.
pub fn init_tracing(config: &Config) {
    let Some(data_dir) = trace_file_path().parent().map(PathBuf::from) else {
        return;
    };
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(trace_file_path(), SERVICE_NAME, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
