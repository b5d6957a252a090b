//! Extract and render selected subtrees of an HTML document as text.
//!
//! Documents are parsed and matched by the `scraper` engine (HTML5 parsing
//! with standard error recovery, full CSS selector support); this crate owns
//! what happens after matching: ordering the matched nodes into document
//! order and rendering each subtree as normalized, optionally styled,
//! optionally per-node-templated text.
//!
//! ```
//! use html_query::{FormatBinding, StyleMode, query_text};
//!
//! let html = "<p>Hello   <b>world</b></p>";
//! let results = query_text(html, "p", StyleMode::Markdown, &[]).unwrap();
//! assert_eq!(results, ["Hello **world**"]);
//!
//! let bindings = [FormatBinding::new("b", "[{}]")];
//! let results = query_text(html, "p", StyleMode::Plain, &bindings).unwrap();
//! assert_eq!(results, ["Hello [world]"]);
//! ```

mod dom;
mod error;
mod options;
mod overlay;
mod query;
mod render;
mod text;

pub use dom::{TagKind, order_nodes};
pub use error::{QueryError, Result};
pub use options::{FormatBinding, StyleMode};
pub use overlay::{FormatOverlay, validate_bindings};
pub use query::{query_attr, query_html, query_text};
pub use render::render_text;
