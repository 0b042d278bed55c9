//! Error types for tree construction, document generation and execution.
//!
//! Errors fall into two disjoint classes:
//!
//! - **Developer errors**: the tree or a template was authored incorrectly
//!   (an empty name, a `default` that is not a child, a template syntax
//!   error, a function called with the wrong argument). These display with
//!   a `developer-error:` prefix and report `true` from
//!   `is_developer_error()`.
//! - **Runtime errors**: an action failed, a renderer failed, or leftover
//!   input could not be handled. These are propagated unchanged.
//!
//! Nothing in this crate retries: resolution and rendering are pure, so a
//! failure is reported once and surfaces at the entry point.

use thiserror::Error;

/// Errors raised while building or validating a command tree.
///
/// All variants are developer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A node name was empty.
    #[error("developer-error: command name must not be empty")]
    EmptyName,

    /// A node name contained the alias delimiter.
    #[error("developer-error: command name `{0}` must not contain `|`")]
    PipeInName(String),

    /// An alias specification had an empty segment (`a||b`, `|a`, `a|`).
    #[error("developer-error: empty alias in `{spec}` for command `{node}`")]
    EmptyAlias { node: String, spec: String },

    /// The `default` child named by a node does not exist among its children.
    #[error("developer-error: default `{default}` of command `{node}` is not one of its children")]
    DefaultNotChild { node: String, default: String },

    /// Two siblings answer to the same token.
    #[error("developer-error: token `{token}` under `{parent}` matches both `{first}` and `{second}`")]
    DuplicateToken {
        parent: String,
        token: String,
        first: String,
        second: String,
    },
}

impl TreeError {
    /// Always true: every tree error is an authoring mistake.
    pub fn is_developer_error(&self) -> bool {
        true
    }
}

/// Errors raised while generating a document from a node.
#[derive(Debug, Error)]
pub enum MarkError {
    /// Template syntax error, unknown function or filter, or undefined value.
    #[error("developer-error: template: {0}")]
    Template(String),

    /// A template function was called with an incompatible argument.
    #[error("developer-error: function: {0}")]
    Function(String),

    /// Any other failure raised while evaluating a template.
    #[error("template evaluation failed: {0}")]
    Evaluation(String),
}

impl MarkError {
    /// Returns true for errors caused by a malformed template or function call.
    pub fn is_developer_error(&self) -> bool {
        matches!(self, MarkError::Template(_) | MarkError::Function(_))
    }
}

impl From<minijinja::Error> for MarkError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        // Keep the full chain; minijinja puts line info in the source.
        let mut msg = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            msg.push_str(": ");
            msg.push_str(&inner.to_string());
            source = inner.source();
        }

        match err.kind() {
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod
            | ErrorKind::TemplateNotFound => MarkError::Template(msg),
            ErrorKind::MissingArgument
            | ErrorKind::TooManyArguments
            | ErrorKind::CannotDeserialize
            | ErrorKind::InvalidOperation
            | ErrorKind::BadSerialization => MarkError::Function(msg),
            _ => MarkError::Evaluation(msg),
        }
    }
}

/// Error reported by a [`Renderer`](crate::mark::Renderer).
///
/// Renderer failures are runtime errors and are passed through unchanged.
#[derive(Debug, Error)]
#[error("render error: {0}")]
pub struct RenderError(pub String);

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError(err.to_string())
    }
}

/// Errors raised by [`run`](crate::exec::run).
#[derive(Debug, Error)]
pub enum RunError {
    /// Leftover tokens reached a node that has no action to receive them.
    #[error("unknown command `{token}` for `{node}`")]
    UnknownCommand { node: String, token: String },

    /// A branch was reached with nothing to run and no default child.
    #[error("`{0}` requires a command")]
    NotRunnable(String),

    /// The action itself failed.
    #[error(transparent)]
    Action(#[from] anyhow::Error),
}

impl RunError {
    /// True when the underlying failure is a developer error raised by an
    /// action (for example the help command hitting a bad template).
    pub fn is_developer_error(&self) -> bool {
        match self {
            RunError::Action(err) => err
                .downcast_ref::<MarkError>()
                .map(MarkError::is_developer_error)
                .or_else(|| err.downcast_ref::<TreeError>().map(|_| true))
                .unwrap_or(false),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_display() {
        let err = TreeError::DefaultNotChild {
            node: "mycmd".into(),
            default: "nope".into(),
        };
        assert_eq!(
            err.to_string(),
            "developer-error: default `nope` of command `mycmd` is not one of its children"
        );
        assert!(err.is_developer_error());
    }

    #[test]
    fn test_from_minijinja_syntax_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err: MarkError = mj_err.into();
        assert!(matches!(err, MarkError::Template(_)));
        assert!(err.to_string().starts_with("developer-error:"));
    }

    #[test]
    fn test_from_minijinja_bad_argument() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::MissingArgument, "missing");
        let err: MarkError = mj_err.into();
        assert!(matches!(err, MarkError::Function(_)));
        assert!(err.is_developer_error());
    }

    #[test]
    fn test_run_error_action_passthrough() {
        let err: RunError = anyhow::anyhow!("disk full").into();
        assert_eq!(err.to_string(), "disk full");
        assert!(!err.is_developer_error());
    }

    #[test]
    fn test_run_error_wrapping_mark_error() {
        let inner = MarkError::Template("oops".into());
        let err: RunError = anyhow::Error::new(inner).into();
        assert!(err.is_developer_error());
        assert!(err.to_string().starts_with("developer-error:"));
    }
}
