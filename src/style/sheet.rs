//! Stylesheet serialization.
//!
//! Rules are emitted in registration order, so a derived rule registered
//! after its base wins ties the same way [`StyleRule::get`] resolves them.

use super::global::GlobalStyle;
use super::rule::{Declaration, StyleRule};
use std::fmt::Write;

#[derive(Debug)]
pub struct Stylesheet<'a> {
    global: &'a GlobalStyle,
    rules: Vec<&'a StyleRule>,
}

impl<'a> Stylesheet<'a> {
    pub fn new(global: &'a GlobalStyle) -> Self {
        Self {
            global,
            rules: Vec::new(),
        }
    }

    pub fn push(&mut self, rule: &'a StyleRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Serialize to CSS text.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        // `@import` must precede every other rule
        let _ = writeln!(css, "@import url('{}');", self.global.font_import);
        write_block(&mut css, "", "body", &self.global.body);
        write_block(&mut css, "", "*", &self.global.universal);

        for rule in &self.rules {
            let class = format!(".{}", rule.class());
            write_block(&mut css, "", &class, rule.declarations());
            write_block(&mut css, "", &format!("{class}:hover"), rule.hover_declarations());
            for block in rule.descendants() {
                write_block(
                    &mut css,
                    "",
                    &format!("{class} {}", block.selector),
                    &block.declarations,
                );
            }
            for block in rule.media_blocks() {
                let _ = writeln!(css, "@media {} {{", block.query.to_css());
                write_block(&mut css, "  ", &class, &block.declarations);
                css.push_str("}\n");
            }
        }

        css
    }
}

fn write_block(css: &mut String, indent: &str, selector: &str, declarations: &[Declaration]) {
    if declarations.is_empty() {
        return;
    }
    let _ = writeln!(css, "{indent}{selector} {{");
    for d in declarations {
        let _ = writeln!(css, "{indent}  {}: {};", d.property, d.value);
    }
    let _ = writeln!(css, "{indent}}}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::global::global;
    use crate::style::rule::MediaQuery;
    use crate::style::value::px;
    use std::sync::Arc;

    #[test]
    fn test_import_comes_first() {
        let sheet = Stylesheet::new(global());
        let css = sheet.to_css();
        assert!(css.starts_with("@import url('https://fonts.googleapis.com/"));
        assert!(css.contains("body {\n  margin: 0px;\n"));
        assert!(css.contains("* {\n  box-sizing: border-box;\n}"));
    }

    #[test]
    fn test_derived_rule_emits_only_overrides() {
        let logo = Arc::new(
            StyleRule::new("logo")
                .with("width", px(100.0))
                .with("height", "auto")
                .media(MediaQuery::MaxWidth(420.0), [("width", px(90.0))]),
        );
        let footer = StyleRule::extend("footer-logo", &logo)
            .with("width", px(160.0))
            .media(MediaQuery::MaxWidth(420.0), [("width", px(100.0))]);

        let mut sheet = Stylesheet::new(global());
        sheet.push(&logo).push(&footer);
        let css = sheet.to_css();

        assert!(css.contains(".logo {\n  width: 100px;\n  height: auto;\n}"));
        assert!(css.contains(".footer-logo {\n  width: 160px;\n}"));
        assert!(css.contains("@media (max-width: 420px) {\n  .footer-logo {\n    width: 100px;\n  }\n}"));
        // base emitted before derived
        assert!(css.find(".logo {").unwrap() < css.find(".footer-logo {").unwrap());
    }

    #[test]
    fn test_hover_and_descendant_selectors() {
        let rule = StyleRule::new("toc-item")
            .with("margin-bottom", crate::style::value::rem(1.5))
            .hover("opacity", crate::style::value::num(0.6))
            .descendant("a", [("color", "inherit".into())]);
        let mut sheet = Stylesheet::new(global());
        sheet.push(&rule);
        let css = sheet.to_css();

        assert!(css.contains(".toc-item:hover {\n  opacity: 0.6;\n}"));
        assert!(css.contains(".toc-item a {\n  color: inherit;\n}"));
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let rule = StyleRule::new("bare");
        let mut sheet = Stylesheet::new(global());
        sheet.push(&rule);
        assert!(!sheet.to_css().contains(".bare"));
    }
}
