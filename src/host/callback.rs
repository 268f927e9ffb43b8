//! Invocation records passed to host functions.

use super::context::Context;
use super::value::Value;

static UNDEFINED: Value = Value::Undefined;

/// The return-value slot of an invocation.
#[derive(Debug, Default)]
pub struct ReturnValue {
    value: Value,
}

impl ReturnValue {
    /// Store the value the call returns.
    #[inline]
    pub fn set(&mut self, value: Value) {
        self.value = value;
    }

    #[inline]
    pub fn get(&self) -> &Value {
        &self.value
    }
}

/// Everything a host function sees about one call: the context it runs in,
/// its positional arguments and the slot its result goes into.
#[derive(Debug)]
pub struct CallbackInfo<'a> {
    context: &'a Context,
    args: &'a [Value],
    return_value: ReturnValue,
}

impl<'a> CallbackInfo<'a> {
    pub fn new(context: &'a Context, args: &'a [Value]) -> Self {
        Self {
            context,
            args,
            return_value: ReturnValue::default(),
        }
    }

    /// Number of arguments actually supplied.
    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Read the argument at `index`. Positions past the end read as
    /// `Undefined`, as they do in the host.
    #[inline]
    pub fn get(&self, index: usize) -> &Value {
        self.args.get(index).unwrap_or(&UNDEFINED)
    }

    #[inline]
    pub fn context(&self) -> &'a Context {
        self.context
    }

    #[inline]
    pub fn return_value(&mut self) -> &mut ReturnValue {
        &mut self.return_value
    }

    /// Consume the record and take the returned value.
    pub fn into_return_value(self) -> Value {
        self.return_value.value
    }
}
