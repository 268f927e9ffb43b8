//! Coercion of host values into native integers.

use crate::host::{Context, HostError, Value};
use thiserror::Error;

/// 2^32, the modulus of Int32 conversion.
const TWO_POW_32: f64 = 4_294_967_296.0;
/// 2^31, the first value that wraps to a negative Int32.
const TWO_POW_31: f64 = 2_147_483_648.0;

/// Why a value could not be read as a native integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// The context was torn down; the host cannot run the conversion.
    #[error("cannot coerce in a torn-down execution context")]
    ContextTornDown,

    /// The value has no numeric reading.
    #[error("{type_name} value is not a number")]
    NotANumber { type_name: &'static str },
}

impl From<CoercionError> for HostError {
    fn from(e: CoercionError) -> Self {
        match e {
            CoercionError::ContextTornDown => HostError::ContextTornDown,
            CoercionError::NotANumber { .. } => HostError::type_error(e.to_string()),
        }
    }
}

/// Read a host value as an `i32` in the given context.
///
/// Applies ToNumber, then Int32 conversion: infinities become 0, finite
/// values truncate toward zero and wrap modulo 2^32. A NaN reading is
/// reported as `NotANumber` so the caller decides what it means.
pub fn try_parse_number(value: &Value, context: &Context) -> Result<i32, CoercionError> {
    if !context.is_live() {
        return Err(CoercionError::ContextTornDown);
    }

    let number = value.to_number();
    if number.is_nan() {
        return Err(CoercionError::NotANumber {
            type_name: value.type_name(),
        });
    }

    Ok(f64_to_int32(number))
}

/// Int32 conversion of a non-NaN double.
pub fn f64_to_int32(number: f64) -> i32 {
    if !number.is_finite() {
        return 0;
    }

    let wrapped = number.trunc().rem_euclid(TWO_POW_32);
    if wrapped >= TWO_POW_31 {
        (wrapped - TWO_POW_32) as i32
    } else {
        wrapped as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce(value: Value) -> Result<i32, CoercionError> {
        let ctx = Context::new();
        try_parse_number(&value, &ctx)
    }

    #[test]
    fn test_numbers_truncate() {
        assert_eq!(coerce(Value::from(2.9)), Ok(2));
        assert_eq!(coerce(Value::from(-2.9)), Ok(-2));
        assert_eq!(coerce(Value::from(-0.0)), Ok(0));
    }

    #[test]
    fn test_numbers_wrap_modulo_2_pow_32() {
        assert_eq!(coerce(Value::from(TWO_POW_32 + 1.0)), Ok(1));
        assert_eq!(coerce(Value::from(TWO_POW_31)), Ok(i32::MIN));
        assert_eq!(coerce(Value::from(-TWO_POW_31 - 1.0)), Ok(i32::MAX));
        assert_eq!(coerce(Value::from(f64::INFINITY)), Ok(0));
    }

    #[test]
    fn test_non_numbers() {
        assert_eq!(coerce(Value::Null), Ok(0));
        assert_eq!(coerce(Value::Boolean(true)), Ok(1));
        assert_eq!(coerce(Value::from("7")), Ok(7));
        assert_eq!(coerce(Value::from("0x10")), Ok(16));
        assert_eq!(
            coerce(Value::from("abc")),
            Err(CoercionError::NotANumber { type_name: "string" })
        );
        assert_eq!(
            coerce(Value::Undefined),
            Err(CoercionError::NotANumber {
                type_name: "undefined"
            })
        );
        assert!(coerce(Value::from(f64::NAN)).is_err());
    }

    #[test]
    fn test_torn_down_context_fails() {
        let ctx = Context::new();
        ctx.tear_down();
        assert_eq!(
            try_parse_number(&Value::from(1), &ctx),
            Err(CoercionError::ContextTornDown)
        );
    }

    #[test]
    fn test_error_maps_to_host_error() {
        assert_eq!(
            HostError::from(CoercionError::ContextTornDown),
            HostError::ContextTornDown
        );
        assert!(matches!(
            HostError::from(CoercionError::NotANumber { type_name: "string" }),
            HostError::TypeError { .. }
        ));
    }
}
