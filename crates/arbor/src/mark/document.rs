//! Document generation.
//!
//! A document has four sections, in order: identity, usage, commands (only
//! when there is a visible child) and description (only when the node has
//! long text). It is produced in two passes:
//!
//! 1. The node's `long` text is dedented and evaluated as a template
//!    against the node, with the same functions as the document.
//! 2. The document template is evaluated with the result as `description`.
//!
//! Both passes are pure: the same node, caller and functions always give
//! byte-identical output.

use serde::Serialize;
use tracing::debug;

use crate::error::MarkError;
use crate::tree::Node;

use super::engine::Engine;
use super::functions::FuncMap;
use super::style::{Headings, MarkStyle};
use super::util::dedent;
use super::view::NodeView;

/// The built-in document template.
pub const DEFAULT_TEMPLATE: &str = include_str!("template.md");

#[derive(Serialize)]
struct LongContext<'a> {
    #[serde(flatten)]
    fields: &'a NodeView,
    node: &'a NodeView,
    caller: Option<&'a str>,
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    #[serde(flatten)]
    fields: &'a NodeView,
    node: &'a NodeView,
    caller: Option<&'a str>,
    heading: Headings,
    style: &'a MarkStyle,
    usage_token: String,
    has_children: bool,
    has_visible_children: bool,
    description: Option<String>,
}

/// Generates structured-text documents for nodes.
///
/// ```rust
/// use arbor::mark::{DocumentGenerator, MarkStyle};
/// use arbor::tree::Node;
///
/// let node = Node::builder("greet").alias("g").short("say hello").build()?;
/// let doc = DocumentGenerator::new(MarkStyle::classic()).render(&node, None)?;
/// assert!(doc.starts_with("# NAME\n\n`greet` - say hello\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    style: MarkStyle,
    template: String,
    funcs: FuncMap,
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new(MarkStyle::default())
    }
}

impl DocumentGenerator {
    /// A generator using the built-in template and the standard library.
    pub fn new(style: MarkStyle) -> Self {
        let funcs = FuncMap::standard(&style);
        Self {
            style,
            template: DEFAULT_TEMPLATE.to_string(),
            funcs,
        }
    }

    /// Replaces the document template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Replaces the base function map. Per-node overrides still apply.
    pub fn with_funcs(mut self, funcs: FuncMap) -> Self {
        self.funcs = funcs;
        self
    }

    pub fn style(&self) -> &MarkStyle {
        &self.style
    }

    pub fn funcs(&self) -> &FuncMap {
        &self.funcs
    }

    /// Renders the document for `node` with the generator's functions merged
    /// with the node's own overrides.
    pub fn render(&self, node: &Node, caller: Option<&Node>) -> Result<String, MarkError> {
        let funcs = self.funcs.merged(node.funcs());
        self.render_with(node, caller, &funcs)
    }

    /// Renders the document for `node` with exactly `funcs`.
    pub fn render_with(
        &self,
        node: &Node,
        caller: Option<&Node>,
        funcs: &FuncMap,
    ) -> Result<String, MarkError> {
        debug!(node = node.name(), caller = caller.map(Node::name), "generating document");

        let engine = Engine::new(funcs);
        let view = NodeView::of(node);
        let caller = caller.map(Node::name);

        let description = match view.long.as_deref().map(dedent) {
            Some(long) if !long.is_empty() => {
                let ctx = LongContext {
                    fields: &view,
                    node: &view,
                    caller,
                };
                let text = engine.fill(&long, &ctx)?;
                Some(text.trim_end().to_string()).filter(|t| !t.is_empty())
            }
            _ => None,
        };

        let ctx = DocumentContext {
            fields: &view,
            node: &view,
            caller,
            heading: self.style.headings(),
            style: &self.style,
            usage_token: view.usage_token(),
            has_children: !view.children.is_empty(),
            has_visible_children: view.has_visible_children(),
            description,
        };
        engine.fill(&self.template, &ctx)
    }
}

/// Renders `node` with the default generator.
pub fn render(node: &Node, caller: Option<&Node>) -> Result<String, MarkError> {
    DocumentGenerator::default().render(node, caller)
}
