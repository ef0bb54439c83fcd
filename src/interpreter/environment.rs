use std::collections::HashMap;

use super::Value;

/// The flat variable environment: name to value, last write wins, insertion
/// order irrelevant. Passed explicitly to the evaluator rather than held as
/// process-wide global state, so multiple independent runs (and tests) can
/// coexist in one process.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Bind (or rebind) `name` to `value`.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_changes_type() {
        let mut env = Environment::new();
        env.set("x", Value::Number(1.0));
        env.set("x", Value::Str("a".into()));
        assert_eq!(env.get("x"), Some(&Value::Str("a".into())));
    }

    #[test]
    fn unknown_variable_is_absent() {
        let env = Environment::new();
        assert_eq!(env.get("missing"), None);
    }
}
