//! Execution of render requests on a worker thread.

use crate::render::ImageRenderer;
use crate::worker::messages::{RenderCompletion, RenderRequest};
use std::sync::Arc;

/// Runs render requests against an [`ImageRenderer`].
///
/// Cheap to clone; clones share the renderer.
#[derive(Clone)]
pub struct RenderWorker {
    renderer: Arc<dyn ImageRenderer>,
}

impl RenderWorker {
    #[must_use]
    pub fn new(renderer: Arc<dyn ImageRenderer>) -> Self {
        Self { renderer }
    }

    /// Attaches the parent trace context from a request to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the captured trace
    /// information so spans created here are linked to the span that issued
    /// the request. The returned guard must be held for the duration of the
    /// job.
    fn attach_parent_trace_context(request: &RenderRequest) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = request.trace_context.as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Renders one request and packages the outcome.
    ///
    /// Never fails: renderer errors become `Err(message)` in the completion.
    #[must_use]
    pub fn handle_request(&self, request: RenderRequest) -> RenderCompletion {
        let _context_guard = Self::attach_parent_trace_context(&request);

        let span = tracing::debug_span!(
            "render_job",
            seq = request.seq,
            path = %request.path.display(),
            mode = %request.mode
        );
        let _guard = span.entered();

        let outcome = self
            .renderer
            .render(&request.path, request.width, request.height, request.mode)
            .map_err(|e| e.to_string());

        match &outcome {
            Ok(text) => tracing::debug!(bytes = text.len(), "render finished"),
            Err(message) => tracing::debug!(error = %message, "render failed"),
        }

        RenderCompletion {
            seq: request.seq,
            outcome,
        }
    }
}

impl std::fmt::Debug for RenderWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderWorker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::RenderMode;
    use crate::domain::error::{PhogoError, Result};
    use std::path::{Path, PathBuf};

    struct EchoRenderer;

    impl ImageRenderer for EchoRenderer {
        fn render(&self, path: &Path, width: u16, height: u16, mode: RenderMode) -> Result<String> {
            if path.ends_with("broken.png") {
                return Err(PhogoError::Render("corrupt".to_string()));
            }
            Ok(format!("{} {width}x{height} {mode}", path.display()))
        }
    }

    #[test]
    fn completion_echoes_sequence_and_text() {
        let worker = RenderWorker::new(Arc::new(EchoRenderer));
        let request = RenderRequest::new(7, PathBuf::from("a.png"), 10, 4, RenderMode::Grayscale);

        let completion = worker.handle_request(request);
        assert_eq!(completion.seq, 7);
        assert_eq!(completion.outcome, Ok("a.png 10x4 Grayscale".to_string()));
    }

    #[test]
    fn renderer_errors_become_messages() {
        let worker = RenderWorker::new(Arc::new(EchoRenderer));
        let request = RenderRequest::new(1, PathBuf::from("broken.png"), 10, 4, RenderMode::Color);

        let completion = worker.handle_request(request);
        assert_eq!(completion.outcome, Err("Render error: corrupt".to_string()));
    }
}
