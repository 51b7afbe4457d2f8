//! The evaluation context.

use levenshtein::levenshtein;
use std::collections::HashMap;
use crate::{builtin::Builtin, consts, funcs, value::Value};

/// The maximum Levenshtein distance between a name and a suggestion for it.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A context to evaluate expressions in, holding the values bound to each variable.
///
/// The default context binds the mathematical constants `i`, `e`, `pi`, and `tau`. The grader
/// then binds its sampling variables (`x` and the variables derived from it) on top of these
/// before each evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    /// The variables defined in the context.
    vars: HashMap<String, Value>,
}

impl Default for Ctxt {
    fn default() -> Self {
        let mut vars = HashMap::new();
        vars.insert("i".to_string(), Value::Complex(consts::I));
        vars.insert("e".to_string(), Value::Float(consts::E));
        vars.insert("pi".to_string(), Value::Float(consts::PI));
        vars.insert("tau".to_string(), Value::Float(consts::TAU));
        Self { vars }
    }
}

impl Ctxt {
    /// Creates a new context with the default constants bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable to a value, shadowing any previous binding.
    pub fn set_var(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the value bound to the given variable, if any.
    pub fn get_var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).copied()
    }

    /// Returns the builtin function with the given name, if any.
    pub fn get_func(&self, name: &str) -> Option<&'static dyn Builtin> {
        funcs::ALL.get(name).copied()
    }

    /// Returns the names of bound variables similar to the given name, for suggestions.
    pub fn get_similar_vars(&self, name: &str) -> Vec<String> {
        let mut names = self.vars
            .keys()
            .filter(|key| levenshtein(key, name) <= MAX_SUGGESTION_DISTANCE)
            .cloned()
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Returns the names of builtin functions similar to the given name, for suggestions.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<String> {
        let mut names = funcs::ALL
            .keys()
            .filter(|key| levenshtein(key, name) <= MAX_SUGGESTION_DISTANCE)
            .map(|key| key.to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let ctxt = Ctxt::new();
        assert_eq!(ctxt.get_var("pi"), Some(Value::Float(consts::PI)));
        assert_eq!(ctxt.get_var("e"), Some(Value::Float(consts::E)));
        assert_eq!(ctxt.get_var("i"), Some(Value::Complex(consts::I)));
        assert_eq!(ctxt.get_var("x"), None);
    }

    #[test]
    fn binding_shadows() {
        let mut ctxt = Ctxt::new();
        ctxt.set_var("x", Value::Float(1.0));
        ctxt.set_var("x", Value::Float(2.0));
        assert_eq!(ctxt.get_var("x"), Some(Value::Float(2.0)));
    }

    #[test]
    fn suggestions() {
        let ctxt = Ctxt::new();
        assert_eq!(ctxt.get_similar_funcs("sine"), vec!["sin".to_string()]);
        assert!(ctxt.get_similar_vars("pie").contains(&"pi".to_string()));
    }
}
