//! The recursive subtree-to-text renderer.
//!
//! One call renders one matched node: a depth-first, pre-order walk that
//! appends enter markers, normalized text, and exit separators into a single
//! accumulator, wrapping each element's fragment through its resolved format
//! template on the way back up. The finished accumulator gets a final
//! whitespace cleanup before it is returned.

mod block;
mod cleanup;
mod inline;

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::dom::{self, TagKind};
use crate::options::StyleMode;
use crate::overlay::FormatOverlay;
use crate::text;

/// Renders the subtree rooted at `element` as text.
///
/// The element's own markers and format template are part of its output;
/// siblings are not. The result has already been through the final
/// whitespace cleanup and carries no trailing delimiter.
pub fn render_text(element: ElementRef<'_>, mode: StyleMode, overlay: &FormatOverlay) -> String {
    let mut out = String::new();
    render_node(*element, mode, overlay, &mut out);
    cleanup::clean(out)
}

/// Appends the rendering of `node` and its descendants to `out`.
///
/// Siblings are walked by the caller's child loop rather than by recursing
/// along the sibling chain, so recursion depth is bounded by document depth
/// alone.
fn render_node(node: NodeRef<'_, Node>, mode: StyleMode, overlay: &FormatOverlay, out: &mut String) {
    match node.value() {
        Node::Text(payload) => {
            if dom::in_preformatted(node) {
                out.push_str(payload);
            } else {
                out.push_str(&text::collapse_whitespace(payload));
            }
        }
        Node::Element(element) => {
            let kind = TagKind::of(element.name());
            if kind == TagKind::Style {
                return;
            }
            let fenced = kind == TagKind::Code && dom::in_preformatted(node);

            let fragment_start = out.len();
            out.push_str(inline::enter(kind, mode, fenced));
            out.push_str(block::enter(kind));

            for child in node.children() {
                render_node(child, mode, overlay, out);
            }

            if let Some(template) = overlay.resolve(node.id()) {
                out.insert_str(fragment_start, template.prefix());
                out.push_str(template.suffix());
            }

            out.push_str(inline::exit(kind, mode, fenced));
            block::exit(node, kind, out);
        }
        // Comments, doctypes, and processing instructions produce no text.
        _ => {}
    }
}
