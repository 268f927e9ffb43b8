//! Integer arithmetic kernels.

/// Add two 32-bit integers.
///
/// Overflow wraps in two's complement, e.g. `sum(i32::MAX, 1) == i32::MIN`.
#[inline]
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
