//! Structural separators: bullets, newlines, and cell tabs.

use ego_tree::NodeRef;
use scraper::Node;

use crate::dom::{self, TagKind};

/// Marker appended when entering a node of `kind`, independent of style mode.
pub(crate) fn enter(kind: TagKind) -> &'static str {
    match kind {
        TagKind::ListItem => "- ",
        TagKind::Bold
        | TagKind::Strong
        | TagKind::Italic
        | TagKind::Underline
        | TagKind::Emphasis
        | TagKind::Code
        | TagKind::Pre
        | TagKind::UnorderedList
        | TagKind::TableRow
        | TagKind::TableCell
        | TagKind::Heading(_)
        | TagKind::LineBreak
        | TagKind::Paragraph
        | TagKind::HorizontalRule
        | TagKind::Style
        | TagKind::Other => "",
    }
}

/// Appends the structural separators due when leaving `node`.
///
/// Cells need a sibling scan and rows need the accumulator's current tail,
/// so this writes into `out` directly instead of returning a marker.
pub(crate) fn exit(node: NodeRef<'_, Node>, kind: TagKind, out: &mut String) {
    match kind {
        TagKind::ListItem | TagKind::UnorderedList => out.push('\n'),
        TagKind::TableCell => {
            if dom::has_following_cell(node) {
                out.push('\t');
            }
        }
        TagKind::TableRow => {
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }
        // The breaking set: these force a newline after their content.
        TagKind::LineBreak | TagKind::Paragraph | TagKind::Heading(_) | TagKind::HorizontalRule => {
            out.push('\n');
        }
        TagKind::Bold
        | TagKind::Strong
        | TagKind::Italic
        | TagKind::Underline
        | TagKind::Emphasis
        | TagKind::Code
        | TagKind::Pre
        | TagKind::Style
        | TagKind::Other => {}
    }
}
