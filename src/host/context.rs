//! Execution contexts.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for an execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub u64);

/// Lifecycle state of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Calls and coercions may run.
    Live,
    /// The context has been torn down; coercions fail.
    TornDown,
}

/// Handle to the host execution context a call runs in.
///
/// A context belongs to the thread that created it and is not `Sync`.
#[derive(Debug)]
pub struct Context {
    id: ContextId,
    state: Cell<ContextState>,
}

impl Context {
    /// Create a new live context.
    pub fn new() -> Self {
        let id = ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed));
        log::trace!("Created execution context {}", id.0);
        Self {
            id,
            state: Cell::new(ContextState::Live),
        }
    }

    #[inline]
    pub fn id(&self) -> ContextId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> ContextState {
        self.state.get()
    }

    /// Check if the context can still run code.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.state.get() == ContextState::Live
    }

    /// Tear the context down. Idempotent.
    pub fn tear_down(&self) {
        if self.state.replace(ContextState::TornDown) == ContextState::Live {
            log::debug!("Execution context {} torn down", self.id.0);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
