//! Binding layer between host values and native functions.

pub mod coerce;
pub mod config;
pub mod exports;
pub mod function;
pub mod module;

pub use coerce::{f64_to_int32, try_parse_number, CoercionError};
pub use config::{BindingConfig, CoercionPolicy};
pub use exports::ExportTable;
pub use function::{HostFunction, SumFunction};
pub use module::{exports, init, is_initialized};
