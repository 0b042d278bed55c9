//! Template evaluation.
//!
//! [`Engine`] wraps a MiniJinja environment that knows exactly the
//! functions it was built with. Undefined variables are errors, so a typo
//! in a template surfaces as a developer error instead of an empty string.

use minijinja::{Environment, UndefinedBehavior, Value};
use serde::Serialize;

use crate::error::MarkError;

use super::functions::FuncMap;
use super::util;

/// A template environment bound to one function map.
pub struct Engine {
    env: Environment<'static>,
}

impl Engine {
    pub fn new(funcs: &FuncMap) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        register_filters(&mut env);
        funcs.register(&mut env);
        Self { env }
    }

    /// Evaluates `template` against `data`.
    pub fn fill<T: Serialize + ?Sized>(&self, template: &str, data: &T) -> Result<String, MarkError> {
        let ctx = Value::from_serialize(data);
        Ok(self.env.render_str(template, ctx)?)
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }
}

/// Evaluates `template` against `data` using only the functions in `funcs`.
///
/// Nothing is merged in: pass [`FuncMap::standard`] (or a merge of it) to
/// get the standard library.
///
/// ```rust
/// use arbor::mark::{fill, FuncMap};
///
/// #[derive(serde::Serialize)]
/// struct Thing { name: String, count: u32 }
///
/// let mut funcs = FuncMap::new();
/// funcs.insert("hello", || "Hello".to_string());
///
/// let thing = Thing { name: "Thing".into(), count: 20 };
/// let out = fill(&thing, &funcs, "{{ hello() }}, my name is {{ name }} with {{ count }}.")?;
/// assert_eq!(out, "Hello, my name is Thing with 20.");
/// # Ok::<(), arbor::MarkError>(())
/// ```
pub fn fill<T: Serialize + ?Sized>(data: &T, funcs: &FuncMap, template: &str) -> Result<String, MarkError> {
    Engine::new(funcs).fill(template, data)
}

/// Registers the filters every document template can rely on.
pub fn register_filters(env: &mut Environment<'static>) {
    // Indent a block, e.g. into a Markdown code block
    env.add_filter("indented", |value: String, width: usize| {
        util::indent(&value, width)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fill_simple() {
        let out = fill(&json!({"name": "World"}), &FuncMap::new(), "Hello, {{ name }}!").unwrap();
        assert_eq!(out, "Hello, World!");
    }

    #[test]
    fn test_fill_with_function() {
        let mut funcs = FuncMap::new();
        funcs.insert("shout", |s: String| s.to_uppercase());
        let out = fill(&json!({"x": "hi"}), &funcs, "{{ shout(x) }}").unwrap();
        assert_eq!(out, "HI");
    }

    #[test]
    fn test_fill_unit_data() {
        let out = fill(&(), &FuncMap::new(), "static").unwrap();
        assert_eq!(out, "static");
    }

    #[test]
    fn test_syntax_error_is_developer_error() {
        let err = fill(&json!({}), &FuncMap::new(), "{{ unclosed").unwrap_err();
        assert!(err.is_developer_error());
        assert!(err.to_string().starts_with("developer-error:"));
    }

    #[test]
    fn test_undefined_variable_is_developer_error() {
        let err = fill(&json!({}), &FuncMap::new(), "{{ nope }}").unwrap_err();
        assert!(matches!(err, MarkError::Template(_)));
    }

    #[test]
    fn test_unknown_function_is_developer_error() {
        let err = fill(&json!({}), &FuncMap::new(), "{{ code('x') }}").unwrap_err();
        assert!(err.is_developer_error());
    }

    #[test]
    fn test_indented_filter() {
        let out = fill(&json!({"body": "a\n  b"}), &FuncMap::new(), "{{ body | indented(4) }}").unwrap();
        assert_eq!(out, "    a\n      b");
    }
}
