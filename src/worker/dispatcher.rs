//! Non-blocking render dispatch and the slideshow timer.
//!
//! Both hand their result to a sink callback instead of returning it, so
//! the event loop only ever sees completions and ticks as queued events.
//! Neither holds any reference to the session.

use crate::render::ImageRenderer;
use crate::worker::handler::RenderWorker;
use crate::worker::messages::{RenderCompletion, RenderRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Callback receiving finished renders.
pub type CompletionSink = Arc<dyn Fn(RenderCompletion) + Send + Sync>;

/// Fire-and-forget front end for the render worker.
///
/// Each [`dispatch`](Self::dispatch) runs on the runtime's blocking pool, so
/// decoding a large image never delays key handling. Requests are not
/// cancelled when superseded; the session drops stale completions by
/// sequence number.
pub struct RenderDispatcher {
    runtime: Handle,
    worker: RenderWorker,
    sink: CompletionSink,
}

impl RenderDispatcher {
    /// # Examples
    ///
    /// ```no_run
    /// use phogo::render::AsciiRenderer;
    /// use phogo::worker::{RenderDispatcher, RenderRequest};
    /// use phogo::domain::RenderMode;
    /// use std::sync::Arc;
    ///
    /// # async fn demo() {
    /// let dispatcher = RenderDispatcher::new(
    ///     tokio::runtime::Handle::current(),
    ///     Arc::new(AsciiRenderer),
    ///     Arc::new(|completion| println!("{:?}", completion.outcome)),
    /// );
    /// dispatcher.dispatch(RenderRequest::new(1, "cat.png".into(), 80, 24, RenderMode::Color));
    /// # }
    /// ```
    #[must_use]
    pub fn new(runtime: Handle, renderer: Arc<dyn ImageRenderer>, sink: CompletionSink) -> Self {
        Self {
            runtime,
            worker: RenderWorker::new(renderer),
            sink,
        }
    }

    /// Starts rendering `request` and returns immediately.
    pub fn dispatch(&self, request: RenderRequest) -> JoinHandle<()> {
        tracing::debug!(seq = request.seq, path = %request.path.display(), "dispatching render");

        let worker = self.worker.clone();
        let sink = Arc::clone(&self.sink);
        self.runtime.spawn_blocking(move || {
            let completion = worker.handle_request(request);
            sink(completion);
        })
    }
}

impl std::fmt::Debug for RenderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderDispatcher")
            .field("worker", &self.worker)
            .finish_non_exhaustive()
    }
}

/// Arms a one-shot slideshow tick.
///
/// After `delay`, `sink` receives `generation`. The session re-arms the timer
/// on every accepted tick, so the slideshow stops by simply not re-arming.
pub fn schedule_tick<F>(runtime: &Handle, generation: u64, delay: Duration, sink: F) -> JoinHandle<()>
where
    F: FnOnce(u64) + Send + 'static,
{
    tracing::trace!(generation, delay_ms = delay.as_millis(), "arming slideshow tick");

    runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        sink(generation);
    })
}
