//! FFI functions for module initialization and calls into exports.

use super::context::ContextHandle;
use super::types::{AddonStatus, CBindingConfig, CValue, CValueTag};
use crate::binding::{self, BindingConfig};
use crate::native;
use std::ffi::{c_char, CStr, CString};

/// Add two integers directly, without going through host values.
#[no_mangle]
pub extern "C" fn sumaddon_sum(a: i32, b: i32) -> i32 {
    native::sum(a, b)
}

/// Build the module exports with an explicit configuration.
///
/// Optional: the exports are built with the default configuration on first
/// use otherwise. Returns `AlreadyInitialized` if they already exist, and
/// `InvalidArgument` for out-of-range config fields (nothing is built then).
///
/// # Safety
/// config must be null or a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_module_init(config: *const CBindingConfig) -> AddonStatus {
    let cfg = if config.is_null() {
        BindingConfig::default()
    } else {
        match BindingConfig::try_from((*config).clone()) {
            Ok(cfg) => cfg,
            Err(status) => return status,
        }
    };

    match binding::init(cfg) {
        Ok(_) => AddonStatus::Ok,
        Err(e) => AddonStatus::from(&e),
    }
}

/// Call the export `name` with `argc` arguments.
///
/// On success the returned value is written to `out_value`. If it holds a
/// string, release it with `sumaddon_value_free`.
///
/// # Safety
/// context must be a valid handle, name a NUL-terminated string, args valid
/// for `argc` elements (may be null when `argc` is 0), out_value valid.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_call(
    context: ContextHandle,
    name: *const c_char,
    args: *const CValue,
    argc: usize,
    out_value: *mut CValue,
) -> AddonStatus {
    if context.is_null() || name.is_null() || out_value.is_null() {
        return AddonStatus::NullPointer;
    }
    if args.is_null() && argc > 0 {
        return AddonStatus::NullPointer;
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(s) => s,
        Err(_) => return AddonStatus::InvalidUtf8,
    };

    let raw_args = if argc == 0 {
        &[][..]
    } else {
        std::slice::from_raw_parts(args, argc)
    };

    let mut values = Vec::with_capacity(argc);
    for arg in raw_args {
        match arg.to_value() {
            Ok(v) => values.push(v),
            Err(status) => return status,
        }
    }

    let ctx = &*context;
    match binding::exports().call(name, ctx, &values) {
        Ok(result) => match CValue::from_value(result) {
            Ok(cv) => {
                *out_value = cv;
                AddonStatus::Ok
            }
            Err(status) => status,
        },
        Err(e) => {
            log::debug!("Call to '{}' raised: {}", name, e);
            AddonStatus::from(&e)
        }
    }
}

/// Check if an export exists under `name`.
///
/// # Safety
/// name must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_has_export(name: *const c_char) -> bool {
    if name.is_null() {
        return false;
    }
    match CStr::from_ptr(name).to_str() {
        Ok(s) => binding::exports().contains(s),
        Err(_) => false,
    }
}

/// Number of exported functions.
#[no_mangle]
pub extern "C" fn sumaddon_export_count() -> usize {
    binding::exports().len()
}

/// Copy the name of export `index` (in sorted order) into a buffer.
///
/// The copy is truncated to fit and always NUL-terminated; `out_len`
/// receives the full name length.
///
/// # Safety
/// buffer must be valid for `buffer_len` bytes, out_len valid.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_export_name(
    index: usize,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> AddonStatus {
    if buffer.is_null() || out_len.is_null() {
        return AddonStatus::NullPointer;
    }
    if buffer_len == 0 {
        return AddonStatus::InvalidArgument;
    }

    let names = binding::exports().names();
    let Some(name) = names.get(index) else {
        return AddonStatus::NotFound;
    };

    let bytes = name.as_bytes();
    let copy_len = bytes.len().min(buffer_len - 1);

    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, copy_len);
    *buffer.add(copy_len) = 0;
    *out_len = bytes.len();

    AddonStatus::Ok
}

/// Release a value returned by `sumaddon_call`. Resets it to undefined.
///
/// # Safety
/// value must be null or point to a value produced by this library.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_value_free(value: *mut CValue) {
    if value.is_null() {
        return;
    }

    let v = &mut *value;
    if v.value_tag() == Ok(CValueTag::String) && !v.string.is_null() {
        drop(CString::from_raw(v.string));
    }
    *v = CValue::undefined();
}
