//! sumaddon - a native `sum` exposed to a scripting host.
//!
//! The crate is a native function plus the binding layer that makes it
//! callable from a dynamically-typed host runtime:
//!
//! - A pure native kernel (`native::sum`) on 32-bit integers
//! - A model of the host contract: dynamic values, execution contexts,
//!   invocation records with a return slot, host exceptions
//! - A binding layer that coerces host values, invokes the kernel and wraps
//!   the result, with an export table built once at load
//! - An FFI layer so C-capable hosts can load the `cdylib` and call through it
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     FFI Layer (sumaddon.h)          │
//! │  C-compatible values & functions    │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │           Binding Layer             │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │  Export   │  │   Coercion    │  │
//! │  │  Table    │  │ (host → i32)  │  │
//! │  └───────────┘  └───────────────┘  │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │      Native Function (i32 sum)      │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sumaddon::{exports, Context, Value};
//!
//! let ctx = Context::new();
//! let result = exports()
//!     .call("sum", &ctx, &[Value::from(2), Value::from(3)])
//!     .unwrap();
//! assert_eq!(result, Value::Number(5.0));
//!
//! // Missing arguments read as undefined and produce NaN.
//! let result = exports().call("sum", &ctx, &[Value::from(2)]).unwrap();
//! assert!(result.is_nan());
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! ContextHandle ctx;
//! sumaddon_context_create(&ctx);
//!
//! CValue args[2] = {
//!     { .tag = C_VALUE_TAG_NUMBER, .number = 2.0 },
//!     { .tag = C_VALUE_TAG_NUMBER, .number = 3.0 },
//! };
//! CValue out;
//! sumaddon_call(ctx, "sum", args, 2, &out);   // out.number == 5.0
//!
//! sumaddon_value_free(&out);
//! sumaddon_context_free(ctx);
//! ```

pub mod binding;
pub mod ffi;
pub mod host;
pub mod native;

// Re-export commonly used items
pub use binding::{
    exports, init, try_parse_number, BindingConfig, CoercionError, CoercionPolicy, ExportTable,
    HostFunction, SumFunction,
};
pub use host::{CallbackInfo, Context, HostError, HostResult, ReturnValue, Value};
pub use native::sum;

// Re-export FFI types for cbindgen
pub use ffi::context::*;
pub use ffi::module::*;
pub use ffi::types::*;
