//! Per-node output templates registered against auxiliary selectors.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{Html, Selector};

use crate::error::{QueryError, Result};
use crate::options::FormatBinding;

/// A validated template, split at its single `{}` placeholder.
#[derive(Debug)]
pub(crate) struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    /// Splits `raw` at its placeholder.
    ///
    /// A template must contain exactly one `{}`; anything else is a
    /// configuration error and is reported before any rendering begins.
    fn parse(raw: &str) -> Result<Self> {
        let mut placeholders = raw.match_indices("{}");
        let Some((at, _)) = placeholders.next() else {
            return Err(QueryError::Template {
                template: raw.to_string(),
                reason: "missing {} placeholder".to_string(),
            });
        };
        if placeholders.next().is_some() {
            return Err(QueryError::Template {
                template: raw.to_string(),
                reason: "more than one {} placeholder".to_string(),
            });
        }
        Ok(Self {
            prefix: raw[..at].to_string(),
            suffix: raw[at + 2..].to_string(),
        })
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn suffix(&self) -> &str {
        &self.suffix
    }
}

struct Rule {
    members: HashSet<NodeId>,
    template: Template,
}

/// The resolved set of format bindings for one document.
///
/// Each binding's selector is matched up front and its node set stored by
/// identity, so the per-node lookup during rendering is a handful of
/// hash-set probes instead of a selector evaluation.
#[derive(Default)]
pub struct FormatOverlay {
    rules: Vec<Rule>,
}

impl FormatOverlay {
    /// Compiles bindings against a parsed document.
    ///
    /// Templates are validated before any selector is touched, so a
    /// malformed template fails the whole invocation even when its selector
    /// would never match. Zero bindings yield an overlay that resolves
    /// nothing.
    pub fn compile(document: &Html, bindings: &[FormatBinding]) -> Result<Self> {
        validate_bindings(bindings)?;

        let mut rules = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let template = Template::parse(&binding.template)?;
            let selector = Selector::parse(&binding.selector).map_err(|err| QueryError::Selector {
                selector: binding.selector.clone(),
                message: err.to_string(),
            })?;
            let members = document.select(&selector).map(|node| node.id()).collect();
            rules.push(Rule { members, template });
        }
        Ok(Self { rules })
    }

    /// First registered template whose match set contains `id`, if any.
    ///
    /// `None` means the identity template: the rendered text passes through
    /// unchanged.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<&Template> {
        self.rules
            .iter()
            .find(|rule| rule.members.contains(&id))
            .map(|rule| &rule.template)
    }
}

/// Checks every binding's template for well-formedness.
///
/// Called once per invocation, before rendering; a failure here aborts with
/// no partial output.
pub fn validate_bindings(bindings: &[FormatBinding]) -> Result<()> {
    for binding in bindings {
        Template::parse(&binding.template)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_splits_at_placeholder() {
        let template = Template::parse("[{}]").unwrap();
        assert_eq!(template.prefix(), "[");
        assert_eq!(template.suffix(), "]");

        let identity = Template::parse("{}").unwrap();
        assert_eq!(identity.prefix(), "");
        assert_eq!(identity.suffix(), "");
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        assert!(matches!(
            Template::parse("[]"),
            Err(QueryError::Template { reason, .. }) if reason.contains("missing")
        ));
    }

    #[test]
    fn template_with_two_placeholders_is_rejected() {
        assert!(matches!(
            Template::parse("{}{}"),
            Err(QueryError::Template { reason, .. }) if reason.contains("more than one")
        ));
    }

    #[test]
    fn validate_accepts_zero_bindings() {
        assert!(validate_bindings(&[]).is_ok());
    }

    #[test]
    fn first_registered_binding_wins() {
        let document = Html::parse_document("<a class=\"x\">link</a>");
        let bindings = [
            FormatBinding::new("a", "<{}>"),
            FormatBinding::new(".x", "[{}]"),
        ];
        let overlay = FormatOverlay::compile(&document, &bindings).unwrap();

        let selector = Selector::parse("a").unwrap();
        let node = document.select(&selector).next().unwrap();
        let template = overlay.resolve(node.id()).unwrap();
        assert_eq!(template.prefix(), "<");
    }

    #[test]
    fn unmatched_node_resolves_to_identity() {
        let document = Html::parse_document("<a>link</a><b>bold</b>");
        let bindings = [FormatBinding::new("a", "[{}]")];
        let overlay = FormatOverlay::compile(&document, &bindings).unwrap();

        let selector = Selector::parse("b").unwrap();
        let node = document.select(&selector).next().unwrap();
        assert!(overlay.resolve(node.id()).is_none());
    }

    #[test]
    fn bad_binding_selector_is_reported() {
        let document = Html::parse_document("<a>link</a>");
        let bindings = [FormatBinding::new("a[", "[{}]")];
        assert!(matches!(
            FormatOverlay::compile(&document, &bindings),
            Err(QueryError::Selector { selector, .. }) if selector == "a["
        ));
    }
}
