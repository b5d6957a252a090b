//! Style-mode-dependent enter/exit markers for inline semantics.

use crate::dom::TagKind;
use crate::options::StyleMode;

/// Fence emitted around `<code>` under `<pre>`, in every style mode.
const FENCE: &str = "```\n";

/// Marker appended when entering a node of `kind`.
///
/// `fenced` is true for a code element under a preformatted ancestor, which
/// turns the inline code marker into a block fence regardless of mode.
pub(crate) fn enter(kind: TagKind, mode: StyleMode, fenced: bool) -> &'static str {
    match kind {
        TagKind::Code if fenced => FENCE,
        TagKind::Bold | TagKind::Strong => match mode {
            StyleMode::Plain => "",
            StyleMode::Ansi => "\x1b[1m",
            StyleMode::Markdown => "**",
        },
        TagKind::Italic | TagKind::Underline | TagKind::Emphasis | TagKind::Heading(_) => match mode {
            StyleMode::Plain => "",
            StyleMode::Ansi => "\x1b[4m",
            StyleMode::Markdown => "_",
        },
        TagKind::Code => match mode {
            StyleMode::Plain => "",
            StyleMode::Ansi => "\x1b[7m",
            StyleMode::Markdown => "`",
        },
        TagKind::Pre
        | TagKind::ListItem
        | TagKind::UnorderedList
        | TagKind::TableRow
        | TagKind::TableCell
        | TagKind::LineBreak
        | TagKind::Paragraph
        | TagKind::HorizontalRule
        | TagKind::Style
        | TagKind::Other => "",
    }
}

/// Marker appended when leaving a node of `kind`.
pub(crate) fn exit(kind: TagKind, mode: StyleMode, fenced: bool) -> &'static str {
    match kind {
        TagKind::Code if fenced => FENCE,
        TagKind::Bold | TagKind::Strong => match mode {
            StyleMode::Plain => "",
            StyleMode::Ansi => "\x1b[21m",
            StyleMode::Markdown => "**",
        },
        TagKind::Italic | TagKind::Underline | TagKind::Emphasis | TagKind::Heading(_) => match mode {
            StyleMode::Plain => "",
            StyleMode::Ansi => "\x1b[24m",
            StyleMode::Markdown => "_",
        },
        TagKind::Code => match mode {
            StyleMode::Plain => "",
            StyleMode::Ansi => "\x1b[27m",
            StyleMode::Markdown => "`",
        },
        TagKind::Pre
        | TagKind::ListItem
        | TagKind::UnorderedList
        | TagKind::TableRow
        | TagKind::TableCell
        | TagKind::LineBreak
        | TagKind::Paragraph
        | TagKind::HorizontalRule
        | TagKind::Style
        | TagKind::Other => "",
    }
}
