//! Style rules with base/override composition.
//!
//! A [`StyleRule`] is a named class: its own declarations, `:hover`
//! declarations, descendant blocks and media blocks. A rule created with
//! [`StyleRule::extend`] keeps an `Arc` to its base and stores only the
//! declarations it redeclares.
//!
//! # Cascade
//!
//! Effective values at a viewport are resolved in stylesheet order:
//!
//! ```text
//! base.declarations → base.media (matching) → own.declarations → own.media (matching)
//! ```
//!
//! which is exactly what a browser does with `class="base derived"` when the
//! derived class is emitted after the base class.

use super::value::{Value, Viewport};
use std::sync::Arc;

// ============================================================================
// Declarations & Media
// ============================================================================

/// `property: value`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: Value,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<Value>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Media query condition. Only width thresholds are used by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaQuery {
    /// `(max-width: Npx)`, inclusive.
    MaxWidth(f32),
}

impl MediaQuery {
    pub fn matches(&self, viewport: Viewport) -> bool {
        match *self {
            Self::MaxWidth(w) => viewport.width <= w,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::MaxWidth(w) => format!("(max-width: {}px)", w),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaBlock {
    pub query: MediaQuery,
    pub declarations: Vec<Declaration>,
}

/// Declarations for a descendant selector, e.g. `.toc-item a`.
#[derive(Debug, Clone, PartialEq)]
pub struct DescendantBlock {
    pub selector: &'static str,
    pub declarations: Vec<Declaration>,
}

// ============================================================================
// StyleRule
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    class: &'static str,
    base: Option<Arc<StyleRule>>,
    declarations: Vec<Declaration>,
    hover: Vec<Declaration>,
    descendants: Vec<DescendantBlock>,
    media: Vec<MediaBlock>,
}

impl StyleRule {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            base: None,
            declarations: Vec::new(),
            hover: Vec::new(),
            descendants: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Derive a rule from `base`. Only the declarations added afterwards are
    /// stored on the derived rule.
    pub fn extend(class: &'static str, base: &Arc<StyleRule>) -> Self {
        Self {
            base: Some(Arc::clone(base)),
            ..Self::new(class)
        }
    }

    // ------------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------------

    pub fn with(mut self, property: &'static str, value: impl Into<Value>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn hover(mut self, property: &'static str, value: impl Into<Value>) -> Self {
        self.hover.push(Declaration::new(property, value));
        self
    }

    pub fn descendant<I>(mut self, selector: &'static str, declarations: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        self.descendants.push(DescendantBlock {
            selector,
            declarations: collect(declarations),
        });
        self
    }

    pub fn media<I>(mut self, query: MediaQuery, declarations: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        self.media.push(MediaBlock {
            query,
            declarations: collect(declarations),
        });
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn class(&self) -> &'static str {
        self.class
    }

    #[cfg(test)]
    pub fn base(&self) -> Option<&Arc<StyleRule>> {
        self.base.as_ref()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn hover_declarations(&self) -> &[Declaration] {
        &self.hover
    }

    pub fn descendants(&self) -> &[DescendantBlock] {
        &self.descendants
    }

    pub fn media_blocks(&self) -> &[MediaBlock] {
        &self.media
    }

    /// Class list for an element styled with this rule, base classes first.
    pub fn class_list(&self) -> Vec<&'static str> {
        let mut classes = self
            .base
            .as_ref()
            .map(|base| base.class_list())
            .unwrap_or_default();
        classes.push(self.class);
        classes
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    /// Effective value of `property` at `viewport`, following the cascade.
    pub fn get(&self, property: &str, viewport: Viewport) -> Option<&Value> {
        let own = self
            .media
            .iter()
            .rev()
            .filter(|block| block.query.matches(viewport))
            .find_map(|block| last_of(&block.declarations, property))
            .or_else(|| last_of(&self.declarations, property));

        own.or_else(|| self.base.as_ref()?.get(property, viewport))
    }

    /// Effective value of `property` resolved to pixels.
    pub fn px(&self, property: &str, viewport: Viewport) -> Option<f32> {
        self.get(property, viewport)?.to_px(viewport)
    }

    /// Whether `property` is declared on this rule itself (not inherited).
    #[cfg(test)]
    pub fn overrides(&self, property: &str) -> bool {
        last_of(&self.declarations, property).is_some()
            || self
                .media
                .iter()
                .any(|block| last_of(&block.declarations, property).is_some())
    }
}

fn collect<I>(declarations: I) -> Vec<Declaration>
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    declarations
        .into_iter()
        .map(|(property, value)| Declaration { property, value })
        .collect()
}

fn last_of<'a>(declarations: &'a [Declaration], property: &str) -> Option<&'a Value> {
    declarations
        .iter()
        .rev()
        .find(|d| d.property == property)
        .map(|d| &d.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::px;

    fn logo() -> Arc<StyleRule> {
        Arc::new(
            StyleRule::new("logo")
                .with("width", px(100.0))
                .with("height", "auto")
                .with("object-fit", "contain")
                .media(MediaQuery::MaxWidth(420.0), [("width", px(90.0))]),
        )
    }

    #[test]
    fn test_media_query_matches_inclusive() {
        let q = MediaQuery::MaxWidth(420.0);
        assert!(q.matches(Viewport::with_width(420.0)));
        assert!(q.matches(Viewport::with_width(320.0)));
        assert!(!q.matches(Viewport::with_width(421.0)));
        assert_eq!(q.to_css(), "(max-width: 420px)");
    }

    #[test]
    fn test_base_rule_resolution() {
        let logo = logo();
        assert_eq!(logo.px("width", Viewport::with_width(1440.0)), Some(100.0));
        assert_eq!(logo.px("width", Viewport::with_width(400.0)), Some(90.0));
        assert_eq!(
            logo.get("object-fit", Viewport::with_width(400.0)),
            Some(&Value::Keyword("contain"))
        );
        assert_eq!(logo.get("color", Viewport::with_width(400.0)), None);
    }

    #[test]
    fn test_extended_rule_overrides_only_declared_fields() {
        let logo = logo();
        let footer = StyleRule::extend("footer-logo", &logo)
            .with("width", px(160.0))
            .media(MediaQuery::MaxWidth(420.0), [("width", px(100.0))]);

        assert_eq!(footer.px("width", Viewport::with_width(1440.0)), Some(160.0));
        assert_eq!(footer.px("width", Viewport::with_width(420.0)), Some(100.0));
        assert_eq!(footer.px("width", Viewport::with_width(421.0)), Some(160.0));

        // Inherited, not copied
        assert_eq!(footer.declarations().len(), 1);
        assert!(!footer.overrides("object-fit"));
        assert_eq!(
            footer.get("object-fit", Viewport::with_width(1440.0)),
            Some(&Value::Keyword("contain"))
        );
        assert!(Arc::ptr_eq(footer.base().unwrap(), &logo));
    }

    #[test]
    fn test_class_list_puts_base_first() {
        let logo = logo();
        let footer = StyleRule::extend("footer-logo", &logo);
        assert_eq!(logo.class_list(), vec!["logo"]);
        assert_eq!(footer.class_list(), vec!["logo", "footer-logo"]);
    }

    #[test]
    fn test_later_declaration_wins() {
        let rule = StyleRule::new("title")
            .with("font-size", px(14.0))
            .with("font-size", px(12.0));
        assert_eq!(rule.px("font-size", Viewport::with_width(1000.0)), Some(12.0));
    }

    #[test]
    fn test_hover_and_descendants_are_kept_separately() {
        let rule = StyleRule::new("toc-item")
            .hover("text-decoration", "underline")
            .descendant("a", [("color", Value::from("inherit"))]);
        assert_eq!(rule.hover_declarations().len(), 1);
        assert_eq!(rule.descendants()[0].selector, "a");
        assert_eq!(rule.get("text-decoration", Viewport::with_width(500.0)), None);
    }
}
