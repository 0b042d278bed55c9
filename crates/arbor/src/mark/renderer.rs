//! The renderer capability.
//!
//! Generated documents are CommonMark: `#` headings, backtick code spans,
//! indented code blocks, lists and plain paragraphs. A [`Renderer`] turns
//! that into whatever the user sees. Two are provided: [`PlainRenderer`]
//! passes the markup through, [`TermRenderer`] styles it for a terminal.

use std::fmt;

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use console::Style;

use crate::error::RenderError;

/// Turns a generated document into display output.
pub trait Renderer: Send + Sync {
    fn render(&self, document: &str) -> Result<String, RenderError>;
}

impl fmt::Debug for dyn Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Renderer")
    }
}

/// Returns the document unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, document: &str) -> Result<String, RenderError> {
        Ok(document.to_string())
    }
}

/// Styles headings and code spans and indents body text.
///
/// The document is parsed as CommonMark. Headings lose their `#` markers
/// and are emphasized, code spans lose their backticks and are colored,
/// and body blocks are shifted right by `margin` columns. Code blocks are
/// literal: they keep their four-column indent and are never restyled.
/// Word wrapping is left to the terminal.
#[derive(Debug, Clone)]
pub struct TermRenderer {
    margin: usize,
    styled: bool,
    heading: Style,
    subheading: Style,
    code: Style,
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new(console::colors_enabled())
    }
}

const CODE_INDENT: usize = 4;

impl TermRenderer {
    /// Creates a renderer; `styled` forces ANSI styling on or off.
    pub fn new(styled: bool) -> Self {
        Self {
            margin: 6,
            styled,
            heading: Style::new().bold().color256(11),
            subheading: Style::new().bold().color256(5),
            code: Style::new().color256(11),
        }
    }

    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        style
            .clone()
            .force_styling(self.styled)
            .apply_to(text)
            .to_string()
    }

    /// Renders the block children of `parent`, each shifted by `pad`.
    fn blocks<'a>(&self, parent: &'a AstNode<'a>, pad: usize) -> Vec<String> {
        parent
            .children()
            .filter_map(|child| self.block(child, pad))
            .collect()
    }

    fn block<'a>(&self, node: &'a AstNode<'a>, pad: usize) -> Option<String> {
        let data = node.data.borrow();
        let rendered = match &data.value {
            NodeValue::Heading(heading) => {
                let title = plain_text(node);
                let style = if heading.level == 1 {
                    &self.heading
                } else {
                    &self.subheading
                };
                let indent = " ".repeat(pad.saturating_sub(self.margin));
                format!("{indent}{}", self.paint(style, &title))
            }
            NodeValue::Paragraph => shift(&self.inlines(node), pad),
            NodeValue::CodeBlock(code) => {
                shift(code.literal.trim_end_matches('\n'), pad + CODE_INDENT)
            }
            NodeValue::HtmlBlock(html) => shift(html.literal.trim_end_matches('\n'), pad),
            NodeValue::ThematicBreak => shift("---", pad),
            NodeValue::BlockQuote => self.blocks(node, pad + 2).join("\n\n"),
            NodeValue::List(list) => {
                let separator = if list.tight { "\n" } else { "\n\n" };
                let mut number = list.start;
                let items: Vec<String> = node
                    .children()
                    .map(|item| {
                        let marker = match list.list_type {
                            ListType::Bullet => "- ".to_string(),
                            ListType::Ordered => format!("{number}. "),
                        };
                        number += 1;
                        let body = self.blocks(item, pad + marker.len()).join(separator);
                        mark_item(&body, pad, &marker)
                    })
                    .collect();
                items.join(separator)
            }
            _ => {
                let text = plain_text(node);
                if text.trim().is_empty() {
                    return None;
                }
                shift(&text, pad)
            }
        };
        Some(rendered)
    }

    /// Renders inline content, styling code spans.
    fn inlines<'a>(&self, node: &'a AstNode<'a>) -> String {
        let mut out = String::new();
        for child in node.children() {
            match &child.data.borrow().value {
                NodeValue::Text(text) => out.push_str(text),
                NodeValue::Code(code) => out.push_str(&self.paint(&self.code, &code.literal)),
                NodeValue::HtmlInline(html) => out.push_str(html),
                NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
                _ => out.push_str(&self.inlines(child)),
            }
        }
        out
    }
}

/// Concatenates every text and code literal under `node`, unstyled.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) | NodeValue::HtmlInline(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
            _ => out.push_str(&plain_text(child)),
        }
    }
    out
}

/// Prefixes every non-blank line with `pad` spaces.
fn shift(text: &str, pad: usize) -> String {
    let prefix = " ".repeat(pad);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Puts a list marker in the gutter of an item's first line.
fn mark_item(body: &str, pad: usize, marker: &str) -> String {
    let gutter = " ".repeat(pad + marker.len());
    match body.strip_prefix(&gutter) {
        Some(rest) => format!("{}{marker}{rest}", " ".repeat(pad)),
        None => format!("{}{marker}{}", " ".repeat(pad), body.trim_start()),
    }
}

impl Renderer for TermRenderer {
    fn render(&self, document: &str) -> Result<String, RenderError> {
        let arena = Arena::new();
        let options = ComrakOptions::default();
        let root = parse_document(&arena, document, &options);
        let mut out = self.blocks(root, self.margin).join("\n\n");
        if document.ends_with('\n') && !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_identity() {
        let doc = "# NAME\n\n`x`\n";
        assert_eq!(PlainRenderer.render(doc).unwrap(), doc);
    }

    #[test]
    fn test_term_unstyled() {
        let doc = "# NAME\n\n`mycmd` - does things\n\n    mycmd COMMAND\n";
        let out = TermRenderer::new(false).margin(2).render(doc).unwrap();
        assert_eq!(out, "NAME\n\n  mycmd - does things\n\n      mycmd COMMAND\n");
    }

    #[test]
    fn test_term_unpaired_backtick() {
        let out = TermRenderer::new(false).margin(0).render("a `b").unwrap();
        assert_eq!(out, "a `b");
    }

    #[test]
    fn test_term_code_block_is_literal() {
        let doc = "# NAME\n\nRun this:\n\n    echo `date`\n      --flag\n";
        let out = TermRenderer::new(false).margin(0).render(doc).unwrap();
        assert_eq!(out, "NAME\n\nRun this:\n\n    echo `date`\n      --flag\n");
    }

    #[test]
    fn test_term_code_block_not_styled() {
        let out = TermRenderer::new(true).margin(0).render("    echo `date`\n").unwrap();
        assert_eq!(out, "    echo `date`\n");
    }

    #[test]
    fn test_term_span_styled_in_paragraph() {
        let out = TermRenderer::new(true).margin(0).render("run `date` now").unwrap();
        assert!(out.contains("\u{1b}["), "{out:?}");
        assert!(!out.contains('`'), "{out:?}");
    }

    #[test]
    fn test_term_lists_keep_markers() {
        let doc = "Steps:\n\n- one\n- `two`\n";
        let out = TermRenderer::new(false).margin(2).render(doc).unwrap();
        assert_eq!(out, "  Steps:\n\n  - one\n  - two\n");
    }

    #[test]
    fn test_term_subheading() {
        let out = TermRenderer::new(false).margin(2).render("## Notes\n\nbody\n").unwrap();
        assert_eq!(out, "Notes\n\n  body\n");
    }

    #[test]
    fn test_term_styled_emits_ansi() {
        let out = TermRenderer::new(true).render("# NAME").unwrap();
        assert!(out.contains("\u{1b}["), "{out:?}");
        assert!(out.contains("NAME"));
    }
}
