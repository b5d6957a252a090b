//! Tag classification and tree-shape queries over the parsed document.
//!
//! The document itself is owned by the engine; everything here reads the
//! tree through non-owning [`NodeRef`] handles.

use std::collections::HashMap;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

/// The closed set of element categories the renderer distinguishes.
///
/// Anything not listed renders as an unmarked container. Text nodes are not
/// part of this enumeration because the engine's node type already separates
/// them from elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<b>`
    Bold,
    /// `<strong>`
    Strong,
    /// `<i>`
    Italic,
    /// `<u>`
    Underline,
    /// `<em>`
    Emphasis,
    /// `<code>`
    Code,
    /// `<pre>`
    Pre,
    /// `<li>`
    ListItem,
    /// `<ul>`
    UnorderedList,
    /// `<tr>`
    TableRow,
    /// `<td>` or `<th>`
    TableCell,
    /// `<h1>` through `<h6>`, carrying the level.
    Heading(u8),
    /// `<br>`
    LineBreak,
    /// `<p>`
    Paragraph,
    /// `<hr>`
    HorizontalRule,
    /// `<style>`; rendered as an empty fragment, children included.
    Style,
    /// Any other element.
    Other,
}

impl TagKind {
    /// Classifies a lowercase element name.
    pub fn of(name: &str) -> Self {
        match name {
            "b" => Self::Bold,
            "strong" => Self::Strong,
            "i" => Self::Italic,
            "u" => Self::Underline,
            "em" => Self::Emphasis,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "li" => Self::ListItem,
            "ul" => Self::UnorderedList,
            "tr" => Self::TableRow,
            "td" | "th" => Self::TableCell,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "br" => Self::LineBreak,
            "p" => Self::Paragraph,
            "hr" => Self::HorizontalRule,
            "style" => Self::Style,
            _ => Self::Other,
        }
    }

}

/// Kind of the element at `node`, if it is an element.
pub(crate) fn kind_of(node: NodeRef<'_, Node>) -> Option<TagKind> {
    node.value().as_element().map(|element| TagKind::of(element.name()))
}

/// Whether `node` lies under a `<pre>` element.
///
/// The walk starts at the node itself and continues strictly upward through
/// the parent chain; it never stops early at the node.
pub(crate) fn in_preformatted(node: NodeRef<'_, Node>) -> bool {
    std::iter::once(node)
        .chain(node.ancestors())
        .any(|n| kind_of(n) == Some(TagKind::Pre))
}

/// Whether a later sibling of `node` is a table cell.
///
/// Scans forward within the same row, skipping non-element siblings.
pub(crate) fn has_following_cell(node: NodeRef<'_, Node>) -> bool {
    node.next_siblings()
        .filter_map(ElementRef::wrap)
        .any(|sibling| TagKind::of(sibling.value().name()) == TagKind::TableCell)
}

/// Orders matched nodes into document order.
///
/// The engine returns match sets without an order guarantee, so the sequence
/// is rebuilt from a pre-order traversal rank computed once over the whole
/// tree. The sort is stable: nodes without a rank (not reachable from the
/// root, which a well-formed parse never produces) keep their input order at
/// the end rather than faulting.
pub fn order_nodes<'a>(document: &'a Html, mut nodes: Vec<ElementRef<'a>>) -> Vec<ElementRef<'a>> {
    let mut rank = HashMap::new();
    for (position, node) in document.tree.root().descendants().enumerate() {
        rank.insert(node.id(), position);
    }
    nodes.sort_by_key(|node| rank.get(&node.id()).copied().unwrap_or(usize::MAX));
    nodes
}
