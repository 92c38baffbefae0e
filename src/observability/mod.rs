//! Logging and tracing setup.
//!
//! ```text
//! tracing macros ─┬─ fmt layer ─────────────────────────────→ phogo.log
//!                 └─ OpenTelemetry layer → FileSpanExporter → otlp.json  (--otlp)
//! ```
//!
//! Both files live in the data directory and rotate at 10 MB, keeping three
//! backups. `RUST_LOG` overrides the `--log-level` option.
//!
//! # Modules
//!
//! - [`init`]: Subscriber assembly
//! - `tracer`: OpenTelemetry tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer shared by both outputs

pub mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use file_writer::FileWriter;
pub use init::init_tracing;
