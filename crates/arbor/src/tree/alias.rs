//! Alias specifications and token matching.
//!
//! An alias specification is a pipe-delimited list of literal tokens, for
//! example `h|-h|--help`. Matching is exact and case-sensitive. Declaration
//! order is irrelevant for matching but preserved for display.

use crate::error::TreeError;

use super::Node;

/// Splits a pipe-delimited alias specification into its tokens.
///
/// An empty specification yields no aliases. Empty segments are rejected.
///
/// ```rust
/// use arbor::tree::parse_aliases;
///
/// let aliases = parse_aliases("help", "h|-h|--help").unwrap();
/// assert_eq!(aliases, vec!["h", "-h", "--help"]);
/// ```
pub fn parse_aliases(node: &str, spec: &str) -> Result<Vec<String>, TreeError> {
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    spec.split('|')
        .map(|token| {
            if token.is_empty() {
                Err(TreeError::EmptyAlias {
                    node: node.to_string(),
                    spec: spec.to_string(),
                })
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}

/// Returns true if `token` is the node's name or one of its aliases.
pub fn matches(token: &str, node: &Node) -> bool {
    node.name() == token || node.aliases().iter().any(|alias| alias == token)
}

/// Renders a node's name and aliases for display.
///
/// The name comes first, backticked. Aliases follow in declaration order,
/// backticked, pipe-joined and parenthesized:
///
/// ```text
/// `help` (`h`|`-h`|`-help`|`--help`|`/?`)
/// ```
pub fn aka_string(name: &str, aliases: &[String]) -> String {
    let mut out = format!("`{}`", name);
    if !aliases.is_empty() {
        let list: Vec<String> = aliases.iter().map(|a| format!("`{}`", a)).collect();
        out.push_str(" (");
        out.push_str(&list.join("|"));
        out.push(')');
    }
    out
}

/// The usage token for a node: aliases then name, pipe-joined (`h|-h|help`).
pub fn usage_token(name: &str, aliases: &[String]) -> String {
    let mut tokens: Vec<&str> = aliases.iter().map(String::as_str).collect();
    tokens.push(name);
    tokens.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases_in_order() {
        let aliases = parse_aliases("help", "h|-h|-help|--help|/?").unwrap();
        assert_eq!(aliases, vec!["h", "-h", "-help", "--help", "/?"]);
    }

    #[test]
    fn test_parse_aliases_empty_spec() {
        assert!(parse_aliases("x", "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_aliases_rejects_empty_segment() {
        for spec in ["a||b", "|a", "a|"] {
            let err = parse_aliases("x", spec).unwrap_err();
            assert!(matches!(err, TreeError::EmptyAlias { .. }), "{spec}");
        }
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let node = Node::builder("help").alias("h|-h|--help").build().unwrap();
        assert!(matches("help", &node));
        assert!(matches("-h", &node));
        assert!(!matches("-H", &node));
        assert!(!matches("HELP", &node));
        assert!(!matches("", &node));
    }

    #[test]
    fn test_aka_string() {
        let aliases = vec!["h".to_string(), "-h".to_string(), "--help".to_string()];
        assert_eq!(aka_string("help", &aliases), "`help` (`h`|`-h`|`--help`)");
        assert_eq!(aka_string("foo", &[]), "`foo`");
    }

    #[test]
    fn test_usage_token() {
        let aliases = vec!["my".to_string(), "cmd".to_string()];
        assert_eq!(usage_token("mycmd", &aliases), "my|cmd|mycmd");
        assert_eq!(usage_token("foo", &[]), "foo");
    }
}
