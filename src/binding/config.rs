//! Binding layer configuration.

/// What a call does when an argument has no numeric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// Return NaN from the call. No error is raised.
    #[default]
    NanSentinel,
    /// Raise a host `TypeError`.
    Throw,
}

/// Configuration for functions exported by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingConfig {
    /// Handling of NaN coercions.
    pub coercion: CoercionPolicy,
    /// Reject calls with fewer arguments than the function reads.
    pub check_arity: bool,
}

impl BindingConfig {
    /// Strict validation: arity checked and non-numeric arguments throw.
    pub fn strict() -> Self {
        Self {
            coercion: CoercionPolicy::Throw,
            check_arity: true,
        }
    }
}
