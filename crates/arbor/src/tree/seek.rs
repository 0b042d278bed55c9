//! Token-driven tree resolution.
//!
//! [`seek`] walks from a starting node, consuming one token per matched
//! child, and stops at the first token no child answers to. Hidden children
//! match like any other; hiding only affects listings. The `default` child
//! is never entered by `seek`: defaults decide what *runs*, not where
//! resolution lands (see [`run`](crate::exec::run)).

use tracing::trace;

use super::{alias, Node};

/// The outcome of a resolution.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    /// The deepest node reached.
    pub reached: &'a Node,
    /// Tokens not consumed, starting with the first one that failed to match.
    pub remaining: Vec<String>,
    /// Path from the starting node to `reached`, both inclusive.
    pub stack: Vec<&'a Node>,
}

impl<'a> Resolution<'a> {
    /// The node one level above `reached`, if any.
    pub fn caller(&self) -> Option<&'a Node> {
        caller_of(&self.stack)
    }

    /// Command path as names from the start node, e.g. `["mycmd", "foo"]`.
    pub fn path(&self) -> Vec<&'a str> {
        self.stack.iter().map(|n| n.name()).collect()
    }
}

/// Resolves `args` against the tree rooted at `start`.
///
/// Children are searched in declaration order and the first match wins, so
/// siblings sharing a token are resolved to the earlier one. A node without
/// children stops the walk immediately: whatever is left are operands for
/// its action.
///
/// ```rust
/// use arbor::tree::{seek, Node};
///
/// let root = Node::builder("app")
///     .child(Node::builder("list").alias("ls").build()?)
///     .build()?;
///
/// let res = seek(&root, ["ls", "--all"]);
/// assert_eq!(res.reached.name(), "list");
/// assert_eq!(res.remaining, vec!["--all"]);
/// assert_eq!(res.path(), vec!["app", "list"]);
/// # Ok::<(), arbor::TreeError>(())
/// ```
pub fn seek<'a, I, S>(start: &'a Node, args: I) -> Resolution<'a>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    descend(Vec::new(), start, args.into_iter().map(Into::into).collect())
}

/// Resolves `args` as if they had been given to the caller of the last node
/// on `stack`.
///
/// The last node's own position is discarded and resolution restarts one
/// level up; the returned stack keeps the path above that point. This is
/// what `help foo bar` needs: `foo bar` belongs to whatever command `help`
/// was mounted under. With a single-element stack the only node is reused
/// as the start. Returns `None` for an empty stack.
pub fn seek_init<'a, I, S>(stack: &[&'a Node], args: I) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let (start, above) = match stack.len() {
        0 => return None,
        1 => (stack[0], &stack[..0]),
        n => (stack[n - 2], &stack[..n - 2]),
    };
    Some(descend(above.to_vec(), start, args))
}

/// The node just below the top of `stack`.
pub(crate) fn caller_of<'a>(stack: &[&'a Node]) -> Option<&'a Node> {
    match stack.len() {
        0 | 1 => None,
        n => Some(stack[n - 2]),
    }
}

fn descend<'a>(mut stack: Vec<&'a Node>, start: &'a Node, args: Vec<String>) -> Resolution<'a> {
    let mut current = start;
    let mut consumed = 0;
    stack.push(start);

    for token in &args {
        if !current.has_children() {
            break;
        }
        match current.children().find(|c| alias::matches(token, c)) {
            Some(next) => {
                trace!(token = %token, from = current.name(), to = next.name(), "seek matched");
                current = next;
                stack.push(next);
                consumed += 1;
            }
            None => {
                trace!(token = %token, at = current.name(), "seek stopped");
                break;
            }
        }
    }

    Resolution {
        reached: current,
        remaining: args[consumed..].to_vec(),
        stack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Node {
        Node::builder(name).build().unwrap()
    }

    fn tree() -> Node {
        let subfoo = Node::builder("subfoo").alias("sf").build().unwrap();
        let foo = Node::builder("foo")
            .alias("f")
            .child(subfoo)
            .build()
            .unwrap();
        let hidden = Node::builder("imhidden")
            .child(leaf("some"))
            .child(leaf("other"))
            .build()
            .unwrap()
            .as_hidden();
        Node::builder("mycmd")
            .child(foo)
            .child(Node::builder("bar").alias("b").build().unwrap())
            .child(hidden)
            .default_child("foo")
            .build()
            .unwrap()
    }

    #[test]
    fn test_seek_empty_args() {
        let root = tree();
        let res = seek(&root, Vec::<String>::new());
        assert_eq!(res.reached.name(), "mycmd");
        assert!(res.remaining.is_empty());
        assert_eq!(res.path(), vec!["mycmd"]);
    }

    #[test]
    fn test_seek_by_alias() {
        let root = tree();
        let res = seek(&root, ["f", "sf"]);
        assert_eq!(res.reached.name(), "subfoo");
        assert_eq!(res.path(), vec!["mycmd", "foo", "subfoo"]);
    }

    #[test]
    fn test_seek_stops_at_unmatched_token() {
        let root = tree();
        let res = seek(&root, ["foo", "sssh", "subfoo"]);
        assert_eq!(res.reached.name(), "foo");
        assert_eq!(res.remaining, vec!["sssh", "subfoo"]);
    }

    #[test]
    fn test_seek_leaf_keeps_operands() {
        let root = tree();
        let res = seek(&root, ["bar", "bar", "x"]);
        assert_eq!(res.reached.name(), "bar");
        assert_eq!(res.remaining, vec!["bar", "x"]);
    }

    #[test]
    fn test_seek_reaches_hidden() {
        let root = tree();
        let res = seek(&root, ["imhidden", "some"]);
        assert_eq!(res.reached.name(), "some");
        assert!(res.remaining.is_empty());
    }

    #[test]
    fn test_seek_never_enters_default() {
        let root = tree();
        let res = seek(&root, ["subfoo"]);
        assert_eq!(res.reached.name(), "mycmd");
        assert_eq!(res.remaining, vec!["subfoo"]);
    }

    #[test]
    fn test_first_declared_sibling_wins() {
        let root = Node::builder("root")
            .child(Node::builder("list").alias("l").build().unwrap())
            .child(Node::builder("log").alias("l").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(seek(&root, ["l"]).reached.name(), "list");
    }

    #[test]
    fn test_caller() {
        let root = tree();
        let res = seek(&root, ["foo", "subfoo"]);
        assert_eq!(res.caller().map(Node::name), Some("foo"));
        assert!(seek(&root, ["nope"]).caller().is_none());
    }

    #[test]
    fn test_seek_init_restarts_from_caller() {
        let root = tree();
        let res = seek(&root, ["foo", "subfoo"]);
        let again = seek_init(&res.stack, ["subfoo"]).unwrap();
        assert_eq!(again.reached.name(), "subfoo");
        assert_eq!(again.path(), vec!["mycmd", "foo", "subfoo"]);
    }

    #[test]
    fn test_seek_init_keeps_leftover() {
        let root = tree();
        let res = seek(&root, ["bar"]);
        let again = seek_init(&res.stack, ["foo", "zzz"]).unwrap();
        assert_eq!(again.reached.name(), "foo");
        assert_eq!(again.remaining, vec!["zzz"]);
        assert_eq!(again.path(), vec!["mycmd", "foo"]);
    }

    #[test]
    fn test_seek_init_single_and_empty_stack() {
        let root = tree();
        let again = seek_init(&[&root], ["bar"]).unwrap();
        assert_eq!(again.reached.name(), "bar");
        assert!(seek_init(&[], ["bar"]).is_none());
    }
}
