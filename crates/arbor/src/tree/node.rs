//! The command node and its builder.

use std::fmt;
use std::sync::Arc;

use crate::error::TreeError;
use crate::exec::{Action, FnAction, Invocation};
use crate::mark::FuncMap;

use super::alias;

/// One command in a tree.
///
/// A node carries its identity (name and aliases), its documentation
/// (`short`, `long`, `options`), its children, and optionally an
/// [`Action`]. Nodes are built once with [`NodeBuilder`] and read-only
/// afterwards.
///
/// Children are held behind `Arc`, so [`with_name`](Node::with_name) and
/// [`as_hidden`](Node::as_hidden) copies share their subtree with the
/// original. Mounting one subtree under two identities therefore exposes
/// the very same child nodes under both.
///
/// There is no parent pointer. "Who called me" is answered by the
/// traversal stack produced by [`seek`](super::seek).
#[derive(Clone)]
pub struct Node {
    name: String,
    aliases: Vec<String>,
    children: Vec<Arc<Node>>,
    default: Option<usize>,
    hidden: bool,
    short: Option<String>,
    long: Option<String>,
    options: Option<String>,
    action: Option<Arc<dyn Action>>,
    funcs: FuncMap,
}

impl Node {
    /// Starts building a node with the given name.
    pub fn builder(name: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aliases in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Children in declaration order, hidden ones included.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().map(|c| c.as_ref())
    }

    /// Children that appear in generated listings.
    pub fn visible_children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children().filter(|c| !c.hidden)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The child selected for execution when no token picks another one.
    pub fn default_child(&self) -> Option<&Node> {
        self.default.map(|i| self.children[i].as_ref())
    }

    /// True if `child` is this node's default child (compared by identity).
    pub fn is_default(&self, child: &Node) -> bool {
        self.default_child()
            .map(|d| std::ptr::eq(d, child))
            .unwrap_or(false)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long description, still in template form.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Literal option tokens appended to the usage line (`some|-y|--yaml`).
    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }

    pub fn action(&self) -> Option<&dyn Action> {
        self.action.as_deref()
    }

    pub fn is_runnable(&self) -> bool {
        self.action.is_some()
    }

    /// Template functions that override the standard library for this node.
    pub fn funcs(&self) -> &FuncMap {
        &self.funcs
    }

    /// Name and aliases rendered as `` `name` (`a`|`b`) ``.
    pub fn aka(&self) -> String {
        alias::aka_string(&self.name, &self.aliases)
    }

    /// Finds the first child matching `token` by name or alias.
    pub fn child(&self, token: &str) -> Option<&Node> {
        self.children().find(|c| alias::matches(token, c))
    }

    /// Returns a copy under a different name.
    ///
    /// The copy shares children with `self`; it is a second mount of the
    /// same subtree, not a deep copy.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Node, TreeError> {
        let name = name.into();
        check_name(&name)?;
        Ok(Node {
            name,
            ..self.clone()
        })
    }

    /// Returns a copy flagged hidden: reachable by resolution, absent from
    /// listings.
    pub fn as_hidden(&self) -> Node {
        Node {
            hidden: true,
            ..self.clone()
        }
    }

    /// Checks the whole subtree for siblings that answer to the same token.
    ///
    /// Resolution never fails on such collisions (the first declared child
    /// wins), so call this from a test to catch them early:
    ///
    /// ```rust
    /// # use arbor::tree::Node;
    /// let root = Node::builder("app")
    ///     .child(Node::builder("list").alias("ls").build()?)
    ///     .child(Node::builder("lsblk").alias("ls").build()?)
    ///     .build()?;
    /// assert!(root.validate().is_err());
    /// # Ok::<(), arbor::TreeError>(())
    /// ```
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen: Vec<(&str, usize, &str)> = Vec::new();
        for (index, child) in self.children().enumerate() {
            let tokens = std::iter::once(child.name()).chain(child.aliases.iter().map(String::as_str));
            for token in tokens {
                let found = seen
                    .iter()
                    .find(|(t, _, _)| *t == token)
                    .map(|(_, owner, first)| (*owner, *first));
                match found {
                    // A node listing its own name as an alias is harmless.
                    Some((owner, _)) if owner == index => continue,
                    Some((_, first)) => {
                        return Err(TreeError::DuplicateToken {
                            parent: self.name.clone(),
                            token: token.to_string(),
                            first: first.to_string(),
                            second: child.name.clone(),
                        });
                    }
                    None => seen.push((token, index, child.name())),
                }
            }
        }
        self.children().try_for_each(Node::validate)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("hidden", &self.hidden)
            .field("default", &self.default_child().map(Node::name))
            .field("children", &self.children)
            .field("runnable", &self.is_runnable())
            .finish()
    }
}

fn check_name(name: &str) -> Result<(), TreeError> {
    if name.is_empty() {
        Err(TreeError::EmptyName)
    } else if name.contains('|') {
        Err(TreeError::PipeInName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Builder for [`Node`].
///
/// ```rust
/// use arbor::tree::Node;
///
/// let list = Node::builder("list").alias("ls").short("list items").build()?;
/// let root = Node::builder("app")
///     .short("my application")
///     .child(list)
///     .default_child("list")
///     .build()?;
///
/// assert_eq!(root.default_child().map(|n| n.name()), Some("list"));
/// # Ok::<(), arbor::TreeError>(())
/// ```
#[must_use]
pub struct NodeBuilder {
    name: String,
    alias: Option<String>,
    children: Vec<Arc<Node>>,
    default: Option<String>,
    hidden: bool,
    short: Option<String>,
    long: Option<String>,
    options: Option<String>,
    action: Option<Arc<dyn Action>>,
    funcs: FuncMap,
}

impl NodeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            children: Vec::new(),
            default: None,
            hidden: false,
            short: None,
            long: None,
            options: None,
            action: None,
            funcs: FuncMap::new(),
        }
    }

    /// Sets the pipe-delimited alias specification (`h|-h|--help`).
    pub fn alias(mut self, spec: impl Into<String>) -> Self {
        self.alias = Some(spec.into());
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Sets the long description. It is dedented and evaluated as a template
    /// when the node is documented.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Appends a child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Appends an already shared child, mounting the same node again.
    pub fn child_shared(mut self, child: Arc<Node>) -> Self {
        self.children.push(child);
        self
    }

    /// Names the default child. Checked against the children on `build`.
    pub fn default_child(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Sets the action from anything implementing [`Action`].
    pub fn action<A: Action + 'static>(mut self, action: A) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Sets the action from a closure.
    pub fn run<F>(self, f: F) -> Self
    where
        F: Fn(&Invocation<'_>, &[String]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.action(FnAction::new(f))
    }

    /// Registers a template function that overrides the standard library
    /// when this node is documented.
    pub fn func(mut self, name: impl Into<String>, value: minijinja::Value) -> Self {
        self.funcs.insert_value(name, value);
        self
    }

    pub fn build(self) -> Result<Node, TreeError> {
        check_name(&self.name)?;
        let aliases = match &self.alias {
            Some(spec) => alias::parse_aliases(&self.name, spec)?,
            None => Vec::new(),
        };

        let default = match self.default {
            Some(wanted) => Some(
                self.children
                    .iter()
                    .position(|c| c.name == wanted)
                    .ok_or_else(|| TreeError::DefaultNotChild {
                        node: self.name.clone(),
                        default: wanted,
                    })?,
            ),
            None => None,
        };

        Ok(Node {
            name: self.name,
            aliases,
            children: self.children,
            default,
            hidden: self.hidden,
            short: self.short,
            long: self.long,
            options: self.options,
            action: self.action,
            funcs: self.funcs,
        })
    }
}
