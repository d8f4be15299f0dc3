//! Tracing with OpenTelemetry spans exported to a local file.
//!
//! The plugin has no network path for telemetry, so spans are serialized as
//! OTLP JSON, one batch per line, into a rotating file in the plugin data
//! directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → country-list-otlp.json
//! ```
//!
//! The level comes from the `trace_level` configuration key (default `info`).
//! Everything here is best effort: if the data directory cannot be created,
//! tracing is simply not installed.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `otlp`: OTLP JSON encoding of span batches
//! - `rotating_file`: Size-capped append-only file with backups

mod exporter;
mod init;
mod otlp;
mod rotating_file;

pub use init::init_tracing;

/// Service and scope name attached to every exported span.
pub(crate) const SERVICE_NAME: &str = "country-list";
