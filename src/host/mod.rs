//! The host runtime contract consumed by the binding layer.
//!
//! Dynamic values, execution contexts, invocation records with a return
//! slot, and the host exception channel.

pub mod callback;
pub mod context;
pub mod error;
pub mod value;

pub use callback::{CallbackInfo, ReturnValue};
pub use context::{Context, ContextId, ContextState};
pub use error::{HostError, HostResult};
pub use value::{string_to_number, Value};
