//! # Arbor - command trees with generated help
//!
//! Arbor is the resolution-and-documentation core of a hierarchical
//! command-line dispatcher. A program is a tree of [`Node`]s; each node has
//! a name, optional aliases, children, an optional default child and an
//! optional action.
//!
//! Two things happen to a tree at runtime:
//!
//! - **Resolution**: [`seek`] consumes argument tokens, one matched child at
//!   a time, and reports where it stopped, the tokens it did not consume and
//!   the path it took.
//! - **Documentation**: [`DocumentGenerator`] renders any node's identity,
//!   usage, child listing and description into lightweight markup through a
//!   template and an explicit function library.
//!
//! # Quick Start
//!
//! ```rust
//! use arbor::{help_command_with, run, HelpConfig, Node};
//!
//! let root = Node::builder("mycmd")
//!     .alias("my")
//!     .short("my command")
//!     .child(
//!         Node::builder("greet")
//!             .short("say hello")
//!             .run(|_inv, args| {
//!                 println!("hello {}", args.join(" "));
//!                 Ok(())
//!             })
//!             .build()?,
//!     )
//!     .child(help_command_with(HelpConfig::plain())?)
//!     .default_child("greet")
//!     .build()?;
//!
//! run(&root, ["greet", "world"])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Errors
//!
//! Mistakes in how a tree or template was written are *developer errors*:
//! they display with a `developer-error:` prefix. An unmatched token is not
//! an error for resolution; it is handed to the action layer, which may
//! report [`RunError::UnknownCommand`].
//!
//! # Modules
//!
//! - [`tree`]: nodes, aliases and resolution
//! - [`mark`]: templates, the function library, document generation and
//!   renderers
//! - [`exec`]: running resolved nodes
//! - [`help`]: the built-in `help` command

pub mod error;
pub mod exec;
pub mod help;
pub mod mark;
pub mod tree;

pub use error::{MarkError, RenderError, RunError, TreeError};
pub use exec::{nothing, run, Action, FnAction, Invocation};
pub use help::{help_command, help_command_with, HelpAction, HelpConfig};
pub use mark::{fill, DocumentGenerator, FuncMap, MarkStyle, PlainRenderer, Renderer, TermRenderer};
pub use tree::{seek, seek_init, Node, NodeBuilder, Resolution};
