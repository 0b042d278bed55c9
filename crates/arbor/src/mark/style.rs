//! Presentation knobs for generated documents.

use serde::{Deserialize, Serialize};

/// How section headings are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingCase {
    /// `NAME`, `USAGE`, `COMMANDS`, `DESCRIPTION`
    Upper,
    /// `Name`, `Usage`, `Commands`, `Description`
    #[default]
    Title,
}

impl HeadingCase {
    /// Applies the case to a title-cased heading.
    pub fn apply(self, title: &str) -> String {
        match self {
            HeadingCase::Upper => title.to_uppercase(),
            HeadingCase::Title => title.to_string(),
        }
    }
}

/// Heading text for each document section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headings {
    pub name: String,
    pub usage: String,
    pub commands: String,
    pub description: String,
}

/// Glyphs, casing and annotations used by the standard template and the
/// `commands` function.
///
/// Two presets are provided because both layouts exist in the wild:
///
/// | | [`MarkStyle::default`] | [`MarkStyle::classic`] |
/// |---|---|---|
/// | headings | `Name` | `NAME` |
/// | identity | `` `help` (`h`) — short `` | `` `help` - short `` |
/// | listing  | `foo - short` | `foo - short` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkStyle {
    pub heading_case: HeadingCase,
    /// Show aliases on the identity line (`` `help` (`h`|`-h`) ``).
    pub identity_aliases: bool,
    /// Between the identity and the short text.
    pub identity_separator: String,
    /// Between a command name and its annotation in listings.
    pub command_separator: String,
    /// Appended to the annotation of a default child.
    pub default_marker: String,
    /// Extra indentation per nesting level in listings.
    pub nest_indent: usize,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            heading_case: HeadingCase::Title,
            identity_aliases: true,
            identity_separator: " — ".to_string(),
            command_separator: " - ".to_string(),
            default_marker: "(default)".to_string(),
            nest_indent: 2,
        }
    }
}

impl MarkStyle {
    /// Uppercase headings, bare backticked name and plain dashes.
    pub fn classic() -> Self {
        Self {
            heading_case: HeadingCase::Upper,
            identity_aliases: false,
            identity_separator: " - ".to_string(),
            ..Self::default()
        }
    }

    pub fn headings(&self) -> Headings {
        Headings {
            name: self.heading_case.apply("Name"),
            usage: self.heading_case.apply("Usage"),
            commands: self.heading_case.apply("Commands"),
            description: self.heading_case.apply("Description"),
        }
    }
}
