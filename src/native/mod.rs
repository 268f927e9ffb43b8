//! Native functions exposed through the binding layer.

pub mod arith;

pub use arith::sum;
