//! Final whitespace passes over one rendered result.

use crate::text::is_collapsible;

/// Tidies a fully rendered string before it is emitted.
///
/// Spaces touching a newline are removed first, re-scanning after each pass
/// since a removal can expose a new adjacency. The edges are then stripped
/// of collapsible whitespace. The whole pass is a fixed point: running it on
/// its own output changes nothing.
pub(crate) fn clean(mut rendered: String) -> String {
    while rendered.contains("\n ") {
        rendered = rendered.replace("\n ", "\n");
    }
    while rendered.contains(" \n") {
        rendered = rendered.replace(" \n", "\n");
    }

    let tail = rendered.trim_end_matches(is_collapsible).len();
    rendered.truncate(tail);
    let head = rendered.len() - rendered.trim_start_matches(is_collapsible).len();
    rendered.replace_range(..head, "");
    rendered
}
