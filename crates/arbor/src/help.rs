//! The `help` command.
//!
//! Mount [`help_command`] under any node. When run without arguments it
//! documents the node it was mounted under; with arguments it resolves them
//! as if they had been given to that node and documents the result:
//!
//! ```text
//! mycmd help           # documents mycmd
//! mycmd help foo sub   # documents mycmd foo sub
//! ```

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::error::{RenderError, TreeError};
use crate::exec::{Action, Invocation};
use crate::mark::{DocumentGenerator, MarkStyle, PlainRenderer, Renderer, TermRenderer};
use crate::tree::Node;

/// Configuration for the help command.
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Custom document template. If None, uses the built-in template.
    pub template: Option<String>,
    /// Document style. If None, uses [`MarkStyle::default`].
    pub style: Option<MarkStyle>,
    /// Renderer for the finished document. If None, uses [`TermRenderer`].
    pub renderer: Option<Arc<dyn Renderer>>,
}

impl HelpConfig {
    /// A configuration that emits the raw document, unstyled.
    pub fn plain() -> Self {
        Self {
            renderer: Some(Arc::new(PlainRenderer)),
            ..Self::default()
        }
    }
}

/// The action behind [`help_command`].
#[derive(Debug, Clone)]
pub struct HelpAction {
    generator: DocumentGenerator,
    renderer: Arc<dyn Renderer>,
}

impl HelpAction {
    pub fn new(config: HelpConfig) -> Self {
        let mut generator = DocumentGenerator::new(config.style.unwrap_or_default());
        if let Some(template) = config.template {
            generator = generator.with_template(template);
        }
        let renderer = config
            .renderer
            .unwrap_or_else(|| Arc::new(TermRenderer::default()));
        Self {
            generator,
            renderer,
        }
    }

    /// Picks the node to document and its caller.
    ///
    /// Without arguments that is the node help was invoked from. With
    /// arguments they are resolved from there; tokens left over after
    /// resolution are ignored.
    pub fn target<'a>(
        &self,
        inv: &Invocation<'a>,
        args: &[String],
    ) -> (&'a Node, Option<&'a Node>) {
        if args.is_empty() {
            let stack = inv.stack();
            let target = inv.caller().unwrap_or(inv.node());
            let caller = match stack.len() {
                n if n >= 3 => Some(stack[n - 3]),
                _ => None,
            };
            return (target, caller);
        }

        let res = inv.seek_init(args.iter().cloned());
        if !res.remaining.is_empty() {
            debug!(ignored = ?res.remaining, "help ignoring unresolved tokens");
        }
        (res.reached, res.caller())
    }

    /// The rendered help text for this invocation.
    pub fn output(&self, inv: &Invocation<'_>, args: &[String]) -> anyhow::Result<String> {
        let (target, caller) = self.target(inv, args);
        debug!(target = target.name(), "rendering help");
        let document = self.generator.render(target, caller)?;
        let rendered = self.renderer.render(&document)?;
        Ok(rendered)
    }
}

impl Default for HelpAction {
    fn default() -> Self {
        Self::new(HelpConfig::default())
    }
}

impl Action for HelpAction {
    fn call(&self, inv: &Invocation<'_>, args: &[String]) -> anyhow::Result<()> {
        let text = self.output(inv, args)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes()).map_err(RenderError::from)?;
        out.flush().map_err(RenderError::from)?;
        Ok(())
    }
}

const HELP_LONG: &str = "
    The {{ code(name) }} command displays the help information for the
    immediate previous command unless it is passed arguments, in which
    case it resolves the arguments as if they were passed to the
    previous command and the help for the leaf command is displayed
    instead.";

/// A ready-to-mount `help` node with the default configuration.
pub fn help_command() -> Result<Node, TreeError> {
    help_command_with(HelpConfig::default())
}

/// A `help` node using `config`.
pub fn help_command_with(config: HelpConfig) -> Result<Node, TreeError> {
    Node::builder("help")
        .alias("h|-h|--help|--h|/?")
        .short("display command help")
        .long(HELP_LONG)
        .action(HelpAction::new(config))
        .build()
}
