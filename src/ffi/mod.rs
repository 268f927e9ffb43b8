//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! This module lets any host that can load a C library (a Node shim, Python
//! via cffi, ...) create execution contexts and call the module's exports
//! with dynamic values.

pub mod context;
pub mod module;
pub mod types;

pub use context::*;
pub use module::*;
pub use types::*;
