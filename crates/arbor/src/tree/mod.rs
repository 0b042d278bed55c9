//! Command trees and their resolution.
//!
//! - [`Node`] / [`NodeBuilder`]: a named, aliasable command with children,
//!   an optional default child and an optional action
//! - [`parse_aliases`], [`matches`], [`aka_string`]: alias handling
//! - [`seek`], [`seek_init`]: walk the tree by consuming tokens
//!
//! Trees are built once, then only read. Resolution never mutates a node,
//! which is what makes shared mounts (see [`Node::with_name`]) safe to
//! resolve through concurrently.

mod alias;
mod node;
mod seek;

pub use alias::{aka_string, matches, parse_aliases, usage_token};
pub use node::{Node, NodeBuilder};
pub use seek::{seek, seek_init, Resolution};

pub(crate) use seek::caller_of;
