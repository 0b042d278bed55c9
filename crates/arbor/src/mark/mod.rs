//! Structured-text documents for command nodes.
//!
//! - [`DocumentGenerator`]: renders a node's identity, usage, command
//!   listing and description through a template
//! - [`FuncMap`]: the explicit function library handed to templates
//! - [`fill`]: evaluate any template against any serializable data
//! - [`MarkStyle`]: heading case, separators and markers
//! - [`Renderer`]: the capability that displays a finished document
//!
//! ## Templates
//!
//! Templates use MiniJinja syntax. The node being documented is available
//! both as top-level fields (`{{ name }}`, `{{ short }}`) and as `node`, for
//! passing to functions:
//!
//! ```text
//! The {{ code(name) }} command, also known as {{ aka(node) }}.
//! ```

mod document;
mod engine;
mod functions;
mod renderer;
mod style;
mod util;
mod view;

pub use document::{render, DocumentGenerator, DEFAULT_TEMPLATE};
pub use engine::{fill, register_filters, Engine};
pub use functions::{code, commands, summary, FuncMap};
pub use renderer::{PlainRenderer, Renderer, TermRenderer};
pub use style::{HeadingCase, Headings, MarkStyle};
pub use util::{dedent, indent};
pub use view::NodeView;
