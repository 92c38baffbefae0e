//! Request and completion types crossing the render worker boundary.
//!
//! Requests are built on the event-loop thread and executed on the blocking
//! pool; completions travel back as ordinary events. Each request carries a
//! trace context so the worker span joins the trace of the event that issued
//! it.

use crate::domain::entry::RenderMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when a request is handed to a worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if no OpenTelemetry layer is installed or the current
    /// span context is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use phogo::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("Trace ID: {}", ctx.trace_id);
    /// }
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id = format!("{:032x}", span_context.trace_id());
            let parent_span_id = format!("{:016x}", span_context.span_id());

            tracing::trace!(
                trace_id = %trace_id,
                parent_span_id = %parent_span_id,
                "capturing trace context"
            );

            Some(Self {
                trace_id,
                parent_span_id,
            })
        } else {
            None
        }
    }
}

/// One render job: draw `path` into a `width × height` cell block.
///
/// `seq` is the session's monotonically increasing request number; only the
/// completion carrying the latest `seq` is ever applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub seq: u64,
    pub path: PathBuf,
    pub width: u16,
    pub height: u16,
    pub mode: RenderMode,

    /// Trace context for linking spans across threads.
    pub trace_context: Option<TraceContext>,
}

impl RenderRequest {
    /// Creates a request with the current trace context attached.
    #[must_use]
    pub fn new(seq: u64, path: PathBuf, width: u16, height: u16, mode: RenderMode) -> Self {
        Self {
            seq,
            path,
            width,
            height,
            mode,
            trace_context: TraceContext::from_current(),
        }
    }
}

/// Result of a [`RenderRequest`], echoed back with the request's `seq`.
///
/// Failures are carried as display strings; the viewer shows them inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCompletion {
    pub seq: u64,
    pub outcome: Result<String, String>,
}
