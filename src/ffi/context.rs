//! FFI functions for execution context management.

use super::types::AddonStatus;
use crate::host::Context;

/// Opaque handle to an execution context.
pub type ContextHandle = *mut Context;

/// Create a new live execution context.
///
/// # Safety
/// out_handle must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_context_create(out_handle: *mut ContextHandle) -> AddonStatus {
    if out_handle.is_null() {
        return AddonStatus::NullPointer;
    }

    *out_handle = Box::into_raw(Box::new(Context::new()));
    AddonStatus::Ok
}

/// Tear down a context. Later calls in it fail with `ContextTornDown`.
///
/// # Safety
/// Handle must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_context_tear_down(handle: ContextHandle) -> AddonStatus {
    if handle.is_null() {
        return AddonStatus::NullPointer;
    }

    (*handle).tear_down();
    AddonStatus::Ok
}

/// Check whether a context is still live. Null is never live.
///
/// # Safety
/// Handle must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_context_is_live(handle: ContextHandle) -> bool {
    if handle.is_null() {
        return false;
    }
    (*handle).is_live()
}

/// Free a context handle.
///
/// # Safety
/// Handle must be valid or null.
#[no_mangle]
pub unsafe extern "C" fn sumaddon_context_free(handle: ContextHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_handle_lifecycle() {
        let mut handle: ContextHandle = std::ptr::null_mut();
        unsafe {
            assert_eq!(sumaddon_context_create(&mut handle), AddonStatus::Ok);
            assert!(sumaddon_context_is_live(handle));

            assert_eq!(sumaddon_context_tear_down(handle), AddonStatus::Ok);
            assert!(!sumaddon_context_is_live(handle));

            sumaddon_context_free(handle);
        }
    }

    #[test]
    fn test_context_null_pointers() {
        unsafe {
            assert_eq!(
                sumaddon_context_create(std::ptr::null_mut()),
                AddonStatus::NullPointer
            );
            assert_eq!(
                sumaddon_context_tear_down(std::ptr::null_mut()),
                AddonStatus::NullPointer
            );
            assert!(!sumaddon_context_is_live(std::ptr::null_mut()));
            sumaddon_context_free(std::ptr::null_mut());
        }
    }
}
