//! Process-wide module exports, built once at load.

use super::config::BindingConfig;
use super::exports::ExportTable;
use crate::host::{HostError, HostResult};
use std::sync::OnceLock;

static EXPORTS: OnceLock<ExportTable> = OnceLock::new();

fn build(config: BindingConfig) -> ExportTable {
    log::debug!("Initializing module exports with {:?}", config);
    ExportTable::new_with_defaults(config)
}

/// Get the module's exports, building them with the default configuration
/// on first access. No separate initialization call is required.
pub fn exports() -> &'static ExportTable {
    EXPORTS.get_or_init(|| build(BindingConfig::default()))
}

/// Build the module's exports with an explicit configuration.
///
/// Only the first initialization takes effect; later calls, including
/// after `exports()` has been used, fail with `AlreadyInitialized`.
pub fn init(config: BindingConfig) -> HostResult<&'static ExportTable> {
    let mut initialized_here = false;
    let table = EXPORTS.get_or_init(|| {
        initialized_here = true;
        build(config)
    });

    if initialized_here {
        Ok(table)
    } else {
        Err(HostError::AlreadyInitialized)
    }
}

/// Check whether the exports have been built.
pub fn is_initialized() -> bool {
    EXPORTS.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Context, Value};

    #[test]
    fn test_sum_reachable_without_init() {
        let ctx = Context::new();
        assert!(exports().contains("sum"));
        assert!(is_initialized());
        assert_eq!(
            exports().call("sum", &ctx, &[Value::from(2), Value::from(3)]),
            Ok(Value::Number(5.0))
        );
    }

    #[test]
    fn test_init_is_one_time() {
        let first = exports();
        assert_eq!(
            init(BindingConfig::strict()).err(),
            Some(HostError::AlreadyInitialized)
        );
        assert!(std::ptr::eq(first, exports()));
    }
}
