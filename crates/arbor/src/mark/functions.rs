//! The template function library.
//!
//! Functions are carried in an explicit [`FuncMap`] value rather than a
//! global registry. A document is rendered with the standard library for a
//! [`MarkStyle`], merged with any per-node overrides.
//!
//! | Function | Argument | Result |
//! |----------|----------|--------|
//! | `aka(node)` | node | `` `name` (`a`|`b`) `` |
//! | `code(text)` | string | `` `text` `` |
//! | `commands(node)` | node | the command listing body |
//! | `summary(node)` | node | `` `name` - short `` |

use std::collections::BTreeMap;

use minijinja::functions::Function;
use minijinja::value::{FunctionArgs, FunctionResult, ViaDeserialize};
use minijinja::{Environment, Value};
use unicode_width::UnicodeWidthStr;

use crate::tree::aka_string;

use super::style::MarkStyle;
use super::view::NodeView;

/// A named set of template functions.
#[derive(Debug, Clone, Default)]
pub struct FuncMap {
    funcs: BTreeMap<String, Value>,
}

impl FuncMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard library, with listing glyphs taken from `style`.
    pub fn standard(style: &MarkStyle) -> Self {
        let listing = Listing::from(style);

        let mut funcs = Self::new();
        funcs.insert("aka", |node: ViaDeserialize<NodeView>| {
            aka_string(&node.name, &node.aliases)
        });
        funcs.insert("code", |text: String| code(&text));
        funcs.insert("commands", move |node: ViaDeserialize<NodeView>| {
            listing.render(&node)
        });
        funcs.insert("summary", |node: ViaDeserialize<NodeView>| summary(&node));
        funcs
    }

    /// Adds or replaces a function.
    pub fn insert<N, F, Rv, Args>(&mut self, name: N, f: F)
    where
        N: Into<String>,
        F: Function<Rv, Args>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.funcs.insert(name.into(), Value::from_function(f));
    }

    /// Adds or replaces a function given as an already wrapped value.
    pub fn insert_value(&mut self, name: impl Into<String>, value: Value) {
        self.funcs.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.funcs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.funcs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Returns `self` with every entry of `overrides` laid on top.
    pub fn merged(&self, overrides: &FuncMap) -> FuncMap {
        let mut out = self.clone();
        for (name, value) in &overrides.funcs {
            out.funcs.insert(name.clone(), value.clone());
        }
        out
    }

    pub(crate) fn register(&self, env: &mut Environment<'static>) {
        for (name, value) in &self.funcs {
            env.add_global(name.clone(), value.clone());
        }
    }
}

/// Wraps text in backticks for inline display.
pub fn code(text: &str) -> String {
    format!("`{}`", text)
}

/// One line: `` `name` - short ``, or the backticked name alone.
pub fn summary(node: &NodeView) -> String {
    match &node.short {
        Some(short) => format!("`{}` - {}", node.name, short),
        None => code(&node.name),
    }
}

/// The command listing body for `node`, without section heading or block
/// indentation.
pub fn commands(node: &NodeView, style: &MarkStyle) -> String {
    Listing::from(style).render(node)
}

/// Renders the recursive, column-aligned command listing.
#[derive(Debug, Clone)]
struct Listing {
    separator: String,
    default_marker: String,
    nest_indent: usize,
}

struct Line {
    label: String,
    note: Option<String>,
}

impl From<&MarkStyle> for Listing {
    fn from(style: &MarkStyle) -> Self {
        Self {
            separator: style.command_separator.clone(),
            default_marker: style.default_marker.clone(),
            nest_indent: style.nest_indent,
        }
    }
}

impl Listing {
    fn render(&self, node: &NodeView) -> String {
        let mut lines = Vec::new();
        self.collect(node, 0, &mut lines);

        // Only annotated lines take part in alignment; a bare name never
        // pushes the separator column out.
        let width = lines
            .iter()
            .filter(|l| l.note.is_some())
            .map(|l| l.label.width())
            .max()
            .unwrap_or(0);

        lines
            .iter()
            .map(|line| match &line.note {
                Some(note) => {
                    let pad = width.saturating_sub(line.label.width());
                    format!(
                        "{}{}{}{}",
                        line.label,
                        " ".repeat(pad),
                        self.separator,
                        note
                    )
                }
                None => line.label.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn collect(&self, node: &NodeView, depth: usize, lines: &mut Vec<Line>) {
        for child in node.children.iter().filter(|c| !c.hidden) {
            let note = match (&child.short, child.is_default) {
                (Some(short), true) => Some(format!("{} {}", short, self.default_marker)),
                (Some(short), false) => Some(short.clone()),
                (None, true) => Some(self.default_marker.clone()),
                (None, false) => None,
            };
            lines.push(Line {
                label: format!("{}{}", " ".repeat(depth * self.nest_indent), child.name),
                note,
            });
            self.collect(child, depth + 1, lines);
        }
    }
}
