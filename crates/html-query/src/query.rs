//! Selector-query pipeline: parse, match, order, and emit per-node output.

use scraper::{Html, Selector};

use crate::dom;
use crate::error::{QueryError, Result};
use crate::options::{FormatBinding, StyleMode};
use crate::overlay::{self, FormatOverlay};
use crate::render;

fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|err| QueryError::Selector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Renders the text of every node matching `selector`, in document order.
///
/// Format bindings are validated before the document is parsed, so a
/// malformed template aborts the invocation with no output at all. A
/// selector that matches nothing yields an empty vector, which is a
/// deliberate no-op rather than an error.
pub fn query_text(
    html: &str,
    selector: &str,
    mode: StyleMode,
    bindings: &[FormatBinding],
) -> Result<Vec<String>> {
    overlay::validate_bindings(bindings)?;

    let document = Html::parse_document(html);
    let selector = compile_selector(selector)?;
    let overlay = FormatOverlay::compile(&document, bindings)?;

    let matches = document.select(&selector).collect();
    let ordered = dom::order_nodes(&document, matches);
    Ok(ordered
        .into_iter()
        .map(|node| render::render_text(node, mode, &overlay))
        .collect())
}

/// Returns the raw HTML serialization of every matching subtree, in
/// document order.
pub fn query_html(html: &str, selector: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = compile_selector(selector)?;

    let matches = document.select(&selector).collect();
    let ordered = dom::order_nodes(&document, matches);
    Ok(ordered.into_iter().map(|node| node.html()).collect())
}

/// Returns the value of `attribute` for every matching element carrying it,
/// in document order.
pub fn query_attr(html: &str, selector: &str, attribute: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = compile_selector(selector)?;

    let matches = document.select(&selector).collect();
    let ordered = dom::order_nodes(&document, matches);
    Ok(ordered
        .into_iter()
        .filter_map(|node| node.value().attr(attribute))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_primary_selector_is_reported() {
        assert!(matches!(
            query_text("<p>x</p>", "p[", StyleMode::Plain, &[]),
            Err(QueryError::Selector { .. })
        ));
    }

    #[test]
    fn malformed_template_fails_before_any_rendering() {
        let bindings = [FormatBinding::new("a", "no placeholder")];
        assert!(matches!(
            query_text("<p>x</p>", "p", StyleMode::Plain, &bindings),
            Err(QueryError::Template { .. })
        ));
    }

    #[test]
    fn zero_matches_is_an_empty_result() {
        let results = query_text("<p>x</p>", "article", StyleMode::Plain, &[]).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn attr_skips_elements_without_the_attribute() {
        let html = "<a href=\"one\">1</a><a>2</a><a href=\"three\">3</a>";
        let values = query_attr(html, "a", "href").unwrap();
        assert_eq!(values, ["one", "three"]);
    }

    #[test]
    fn data_mode_round_trips_the_serialization() {
        let html = "<div><a href=\"x\">y</a></div>";
        let results = query_html(html, "a").unwrap();
        assert_eq!(results, ["<a href=\"x\">y</a>"]);
    }
}
