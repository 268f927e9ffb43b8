//! The module's table of exported functions.

use super::config::BindingConfig;
use super::function::{HostFunction, SumFunction};
use crate::host::{CallbackInfo, Context, HostError, HostResult, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Exported functions, keyed by public name.
pub struct ExportTable {
    functions: HashMap<&'static str, Arc<dyn HostFunction>>,
}

impl ExportTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Create a table with the module's functions registered.
    pub fn new_with_defaults(config: BindingConfig) -> Self {
        let mut table = Self::new();
        table.register(SumFunction::new(config));
        table
    }

    /// Register a function under its name, replacing any previous entry.
    pub fn register<F: HostFunction + 'static>(&mut self, function: F) {
        self.register_arc(Arc::new(function));
    }

    /// Register a function from an Arc.
    pub fn register_arc(&mut self, function: Arc<dyn HostFunction>) {
        log::debug!(
            "Registering export '{}' (arity {})",
            function.name(),
            function.arity()
        );
        self.functions.insert(function.name(), function);
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn HostFunction>> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All exported names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Invoke the export `name` with `args` in `context` and return what it
    /// stored in the return slot.
    pub fn call(&self, name: &str, context: &Context, args: &[Value]) -> HostResult<Value> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| HostError::UnknownExport {
                name: name.to_string(),
            })?;

        log::trace!(
            "Calling '{}' with {} argument(s) in context {}",
            name,
            args.len(),
            context.id().0
        );

        let mut info = CallbackInfo::new(context, args);
        function.call(&mut info)?;
        Ok(info.into_return_value())
    }
}

impl Default for ExportTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl HostFunction for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn arity(&self) -> usize {
            1
        }

        fn call(&self, info: &mut CallbackInfo<'_>) -> HostResult<()> {
            let first = info.get(0).clone();
            info.return_value().set(first);
            Ok(())
        }
    }

    #[test]
    fn test_table_defaults() {
        let table = ExportTable::new_with_defaults(BindingConfig::default());

        assert!(table.contains("sum"));
        assert!(!table.contains("Sum"));
        assert_eq!(table.names(), vec!["sum"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("sum").unwrap().arity(), 2);
    }

    #[test]
    fn test_table_call() {
        let table = ExportTable::new_with_defaults(BindingConfig::default());
        let ctx = Context::new();

        assert_eq!(
            table.call("sum", &ctx, &[Value::from(2), Value::from(3)]),
            Ok(Value::Number(5.0))
        );
    }

    #[test]
    fn test_table_unknown_export() {
        let table = ExportTable::new_with_defaults(BindingConfig::default());
        let ctx = Context::new();

        assert_eq!(
            table.call("product", &ctx, &[]),
            Err(HostError::UnknownExport {
                name: "product".to_string()
            })
        );
    }

    #[test]
    fn test_table_register_custom() {
        let mut table = ExportTable::new_with_defaults(BindingConfig::default());
        table.register(Echo);

        let ctx = Context::new();
        assert_eq!(table.names(), vec!["echo", "sum"]);
        assert_eq!(
            table.call("echo", &ctx, &[Value::from("hi")]),
            Ok(Value::from("hi"))
        );
        assert_eq!(table.call("echo", &ctx, &[]), Ok(Value::Undefined));
    }

    #[test]
    fn test_empty_table() {
        let table = ExportTable::new();
        assert!(table.is_empty());
        assert!(table.get("sum").is_none());
    }
}
