//! Execution: resolve, then run.
//!
//! [`run`] resolves the arguments with [`seek`](crate::tree::seek) and calls
//! the reached node's [`Action`] with the leftover tokens. A node without an
//! action hands off to its default child, repeatedly, until something
//! runnable is found.

use std::fmt;

use tracing::debug;

use crate::error::RunError;
use crate::tree::{caller_of, seek, seek_init, Node, Resolution};

/// What a node does when it is run.
///
/// Implemented for any suitable closure through [`FnAction`]; implement it
/// directly for actions that carry configuration (see
/// [`HelpAction`](crate::help::HelpAction)).
pub trait Action: Send + Sync {
    fn call(&self, inv: &Invocation<'_>, args: &[String]) -> anyhow::Result<()>;
}

/// Adapts a closure into an [`Action`].
pub struct FnAction<F> {
    f: F,
}

impl<F> FnAction<F>
where
    F: Fn(&Invocation<'_>, &[String]) -> anyhow::Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Action for FnAction<F>
where
    F: Fn(&Invocation<'_>, &[String]) -> anyhow::Result<()> + Send + Sync,
{
    fn call(&self, inv: &Invocation<'_>, args: &[String]) -> anyhow::Result<()> {
        (self.f)(inv, args)
    }
}

/// An action that does nothing.
pub fn nothing(_inv: &Invocation<'_>, _args: &[String]) -> anyhow::Result<()> {
    Ok(())
}

/// The context an action runs in: the node being run and the path that led
/// to it.
#[derive(Clone)]
pub struct Invocation<'a> {
    node: &'a Node,
    stack: Vec<&'a Node>,
}

impl<'a> Invocation<'a> {
    /// An invocation for `node` reached through `stack` (which must end with
    /// `node`).
    pub fn new(node: &'a Node, stack: Vec<&'a Node>) -> Self {
        Self { node, stack }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Root-to-node path, both inclusive.
    pub fn stack(&self) -> &[&'a Node] {
        &self.stack
    }

    /// The node this one was reached from.
    pub fn caller(&self) -> Option<&'a Node> {
        caller_of(&self.stack)
    }

    /// Resolves `args` as if they had been given to the caller.
    pub fn seek_init<I, S>(&self, args: I) -> Resolution<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match seek_init(&self.stack, args) {
            Some(res) => res,
            // An invocation always has at least its own node on the stack.
            None => Resolution {
                reached: self.node,
                remaining: Vec::new(),
                stack: vec![self.node],
            },
        }
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<&str> = self.stack.iter().map(|n| n.name()).collect();
        f.debug_struct("Invocation")
            .field("node", &self.node.name())
            .field("stack", &path)
            .finish()
    }
}

/// Resolves `args` from `root` and runs the result.
///
/// A node without an action hands off to its default child even when
/// tokens are left over, so a mistyped subcommand (`app typo`) runs the
/// default with `typo` as its first operand. Only a node with neither an
/// action nor a default reports [`RunError::UnknownCommand`].
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use arbor::exec::run;
/// use arbor::tree::Node;
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = hits.clone();
/// let root = Node::builder("app")
///     .child(
///         Node::builder("count")
///             .run(move |_inv, args| {
///                 counter.fetch_add(args.len(), Ordering::SeqCst);
///                 Ok(())
///             })
///             .build()?,
///     )
///     .build()?;
///
/// run(&root, ["count", "a", "b"])?;
/// assert_eq!(hits.load(Ordering::SeqCst), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn run<I, S>(root: &Node, args: I) -> Result<(), RunError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let res = seek(root, args);
    execute(res.reached, res.stack, &res.remaining)
}

/// Runs `node`, falling back to default children when it has no action.
///
/// Leftover `args` do not stop the fallback; see [`run`].
pub fn execute<'a>(
    mut node: &'a Node,
    mut stack: Vec<&'a Node>,
    args: &[String],
) -> Result<(), RunError> {
    loop {
        if let Some(action) = node.action() {
            debug!(node = node.name(), args = ?args, "running");
            let inv = Invocation::new(node, stack);
            return action.call(&inv, args).map_err(RunError::Action);
        }

        match node.default_child() {
            Some(default) => {
                debug!(from = node.name(), to = default.name(), "delegating to default");
                stack.push(default);
                node = default;
            }
            None => {
                return Err(match args.first() {
                    Some(token) => RunError::UnknownCommand {
                        node: node.name().to_string(),
                        token: token.clone(),
                    },
                    None => RunError::NotRunnable(node.name().to_string()),
                });
            }
        }
    }
}
