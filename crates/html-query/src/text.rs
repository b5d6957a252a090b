//! Whitespace normalization for text payloads.

use std::borrow::Cow;

/// Whether `c` belongs to the collapsible whitespace set.
pub(crate) const fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Collapses every maximal run of collapsible whitespace into a single space.
///
/// Characters outside the collapsible set are never altered. Returns the
/// input unchanged when it is already normalized, which also makes the
/// operation idempotent. Callers skip this entirely for text under a
/// preformatted ancestor.
pub(crate) fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    let mut prev_collapsible = false;
    let mut needs_work = false;
    for c in text.chars() {
        if is_collapsible(c) {
            if c != ' ' || prev_collapsible {
                needs_work = true;
                break;
            }
            prev_collapsible = true;
        } else {
            prev_collapsible = false;
        }
    }
    if !needs_work {
        return Cow::Borrowed(text);
    }

    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_collapsible(c) {
            if !in_run {
                collapsed.push(' ');
                in_run = true;
            }
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }
    Cow::Owned(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_to_single_space() {
        assert_eq!(collapse_whitespace("a  \t\n  b"), "a b");
        assert_eq!(collapse_whitespace("a\r\nb"), "a b");
    }

    #[test]
    fn replaces_lone_non_space_whitespace() {
        assert_eq!(collapse_whitespace("a\tb"), "a b");
        assert_eq!(collapse_whitespace("a\nb"), "a b");
    }

    #[test]
    fn whitespace_only_input_becomes_single_space() {
        assert_eq!(collapse_whitespace(" \t\r\n "), " ");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn normalized_input_is_borrowed() {
        assert!(matches!(collapse_whitespace("a b c"), Cow::Borrowed(_)));
    }

    #[test]
    fn collapse_is_idempotent() {
        let once = collapse_whitespace("  mixed \t content\r\n here ").into_owned();
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn other_characters_are_untouched() {
        // Non-breaking space is not in the collapsible set.
        assert_eq!(collapse_whitespace("a\u{a0}b"), "a\u{a0}b");
    }
}
