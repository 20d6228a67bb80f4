//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **File-Based Export**: `~/.local/share/zellij/weatherdash/weatherdash-otlp.json`
//! - **Rotation**: 10 MiB per file, 3 numbered backups
//! - **OTLP Format**: one OTLP/JSON trace document per export batch
//!
//! The level comes from the `trace_level` plugin option (an `EnvFilter`
//! directive, default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Size-rotated line writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_file_path, SERVICE_NAME};
