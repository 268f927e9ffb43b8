//! Host-callable wrappers around native functions.

use super::coerce::{try_parse_number, CoercionError};
use super::config::{BindingConfig, CoercionPolicy};
use crate::host::{CallbackInfo, HostError, HostResult, Value};
use crate::native;

/// A native capability callable from host code.
pub trait HostFunction: Send + Sync {
    /// Public name the function is exported under.
    fn name(&self) -> &'static str;

    /// Number of positional arguments the function reads.
    fn arity(&self) -> usize;

    /// Run one call: read arguments from `info` and set its return value.
    fn call(&self, info: &mut CallbackInfo<'_>) -> HostResult<()>;
}

/// The `sum` export: adds its first two arguments as 32-bit integers.
#[derive(Debug, Clone, Default)]
pub struct SumFunction {
    config: BindingConfig,
}

impl SumFunction {
    pub const NAME: &'static str = "sum";

    pub fn new(config: BindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Coerce argument `index`. `Ok(None)` is the NaN sentinel.
    fn argument(&self, info: &CallbackInfo<'_>, index: usize) -> HostResult<Option<i32>> {
        match try_parse_number(info.get(index), info.context()) {
            Ok(n) => Ok(Some(n)),
            Err(e @ CoercionError::NotANumber { .. }) => match self.config.coercion {
                CoercionPolicy::NanSentinel => Ok(None),
                CoercionPolicy::Throw => Err(HostError::type_error(format!(
                    "{} argument {}: {}",
                    Self::NAME,
                    index,
                    e
                ))),
            },
            Err(e) => Err(e.into()),
        }
    }
}

impl HostFunction for SumFunction {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn arity(&self) -> usize {
        2
    }

    fn call(&self, info: &mut CallbackInfo<'_>) -> HostResult<()> {
        if self.config.check_arity && info.len() < self.arity() {
            return Err(HostError::type_error(format!(
                "{} expects {} arguments, got {}",
                Self::NAME,
                self.arity(),
                info.len()
            )));
        }

        // Both positions are always read, so a torn-down context fails even
        // when the first argument is already NaN.
        let a = self.argument(info, 0)?;
        let b = self.argument(info, 1)?;

        let output = match (a, b) {
            (Some(a), Some(b)) => Value::from(native::sum(a, b)),
            _ => {
                log::warn!(
                    "{} called with non-numeric arguments ({}, {}); returning NaN",
                    Self::NAME,
                    info.get(0).type_name(),
                    info.get(1).type_name()
                );
                Value::Number(f64::NAN)
            }
        };

        info.return_value().set(output);
        Ok(())
    }
}
