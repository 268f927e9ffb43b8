//! C-compatible type definitions for FFI.

use crate::binding::{BindingConfig, CoercionPolicy};
use crate::host::{HostError, Value};
use std::ffi::{c_char, CStr, CString};

/// Result status codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonStatus {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer was passed.
    NullPointer = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 3,
    /// No export with the requested name.
    NotFound = 4,
    /// The execution context was torn down.
    ContextTornDown = 5,
    /// The call raised a host TypeError.
    TypeError = 6,
    /// Module exports were already built.
    AlreadyInitialized = 7,
}

impl From<&HostError> for AddonStatus {
    fn from(e: &HostError) -> Self {
        match e {
            HostError::ContextTornDown => AddonStatus::ContextTornDown,
            HostError::TypeError { .. } => AddonStatus::TypeError,
            HostError::UnknownExport { .. } => AddonStatus::NotFound,
            HostError::AlreadyInitialized => AddonStatus::AlreadyInitialized,
        }
    }
}

/// Type tag of a `CValue`. Carried in `CValue::tag` as a `u32`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CValueTag {
    Undefined = 0,
    Null = 1,
    Boolean = 2,
    Number = 3,
    String = 4,
}

impl TryFrom<u32> for CValueTag {
    type Error = AddonStatus;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(CValueTag::Undefined),
            1 => Ok(CValueTag::Null),
            2 => Ok(CValueTag::Boolean),
            3 => Ok(CValueTag::Number),
            4 => Ok(CValueTag::String),
            _ => Err(AddonStatus::InvalidArgument),
        }
    }
}

/// Read a C flag byte. Only 0 and 1 are accepted.
fn flag_from_u8(raw: u8) -> Result<bool, AddonStatus> {
    match raw {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(AddonStatus::InvalidArgument),
    }
}

/// C-compatible host value.
///
/// `tag` holds a `CValueTag` discriminant and only the field it selects is
/// meaningful. Strings passed in are borrowed for the duration of the call;
/// strings returned by the library are owned by the caller and released with
/// `sumaddon_value_free`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CValue {
    pub tag: u32,
    /// 0 = false, 1 = true.
    pub boolean: u8,
    pub number: f64,
    pub string: *mut c_char,
}

impl CValue {
    pub fn undefined() -> Self {
        Self {
            tag: CValueTag::Undefined as u32,
            boolean: 0,
            number: 0.0,
            string: std::ptr::null_mut(),
        }
    }

    pub fn number(n: f64) -> Self {
        Self {
            tag: CValueTag::Number as u32,
            number: n,
            ..Self::undefined()
        }
    }

    /// Decode the raw tag. Unknown tags are `InvalidArgument`.
    #[inline]
    pub fn value_tag(&self) -> Result<CValueTag, AddonStatus> {
        CValueTag::try_from(self.tag)
    }

    /// Read into an owned `Value`.
    ///
    /// # Safety
    /// For `String` values, `string` must be null or point to a
    /// NUL-terminated string.
    pub unsafe fn to_value(&self) -> Result<Value, AddonStatus> {
        Ok(match self.value_tag()? {
            CValueTag::Undefined => Value::Undefined,
            CValueTag::Null => Value::Null,
            CValueTag::Boolean => Value::Boolean(flag_from_u8(self.boolean)?),
            CValueTag::Number => Value::Number(self.number),
            CValueTag::String => {
                if self.string.is_null() {
                    return Err(AddonStatus::NullPointer);
                }
                let s = CStr::from_ptr(self.string)
                    .to_str()
                    .map_err(|_| AddonStatus::InvalidUtf8)?;
                Value::String(s.to_string())
            }
        })
    }

    /// Convert a `Value` for return to C. Strings are allocated and must be
    /// released with `sumaddon_value_free`.
    pub fn from_value(value: Value) -> Result<Self, AddonStatus> {
        Ok(match value {
            Value::Undefined => Self::undefined(),
            Value::Null => Self {
                tag: CValueTag::Null as u32,
                ..Self::undefined()
            },
            Value::Boolean(b) => Self {
                tag: CValueTag::Boolean as u32,
                boolean: u8::from(b),
                ..Self::undefined()
            },
            Value::Number(n) => Self::number(n),
            Value::String(s) => {
                let owned = CString::new(s).map_err(|_| AddonStatus::InvalidArgument)?;
                Self {
                    tag: CValueTag::String as u32,
                    string: owned.into_raw(),
                    ..Self::undefined()
                }
            }
        })
    }
}

/// C-compatible coercion policy. Carried in `CBindingConfig::coercion`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CCoercionPolicy {
    /// Non-numeric arguments make the call return NaN.
    NanSentinel = 0,
    /// Non-numeric arguments raise a TypeError.
    Throw = 1,
}

impl TryFrom<u32> for CCoercionPolicy {
    type Error = AddonStatus;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(CCoercionPolicy::NanSentinel),
            1 => Ok(CCoercionPolicy::Throw),
            _ => Err(AddonStatus::InvalidArgument),
        }
    }
}

/// Configuration for module initialization. All-zero is the default.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct CBindingConfig {
    /// A `CCoercionPolicy` discriminant.
    pub coercion: u32,
    /// 0 = no arity check, 1 = check.
    pub check_arity: u8,
}

impl TryFrom<CBindingConfig> for BindingConfig {
    type Error = AddonStatus;

    fn try_from(c: CBindingConfig) -> Result<Self, Self::Error> {
        Ok(BindingConfig {
            coercion: match CCoercionPolicy::try_from(c.coercion)? {
                CCoercionPolicy::NanSentinel => CoercionPolicy::NanSentinel,
                CCoercionPolicy::Throw => CoercionPolicy::Throw,
            },
            check_arity: flag_from_u8(c.check_arity)?,
        })
    }
}
