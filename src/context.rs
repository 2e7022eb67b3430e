use std::sync::Arc;

use crate::stream::emitter::EventEmitter;
use crate::time::clock::Clock;

/// Shared application context, constructed once at startup and injected
/// into the router as axum state.
///
/// # Design Notes
/// The context replaces process-wide singletons: the emitter (sink
/// handle plus partition key source) and the clock are initialized by
/// the composition root and shared read-mostly across all request
/// tasks for the process lifetime.
#[derive(Clone)]
pub struct AppContext {
    /// Fire-and-forget emission pipeline for not-found events.
    pub emitter: EventEmitter,
    /// Source of "now" for event timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Assembles a context from its collaborators.
    pub fn new(emitter: EventEmitter, clock: Arc<dyn Clock>) -> Self {
        Self { emitter, clock }
    }
}
