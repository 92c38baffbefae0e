//! Background work for rendering and timing.
//!
//! Image conversion runs off the event loop so input handling never waits on
//! a decode. Results come back as events carrying the request's sequence
//! number, and trace context is propagated across the thread boundary.
//!
//! # Architecture
//!
//! - `messages`: Request/completion types with trace context propagation
//! - `handler`: Executes one request against an [`crate::render::ImageRenderer`]
//! - `dispatcher`: Runs requests on the blocking pool and arms slideshow ticks

pub mod dispatcher;
pub mod handler;
pub mod messages;

pub use dispatcher::{schedule_tick, CompletionSink, RenderDispatcher};
pub use handler::RenderWorker;
pub use messages::{RenderCompletion, RenderRequest, TraceContext};
