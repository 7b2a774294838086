//! Page composition.
//!
//! # Structure
//!
//! ```text
//! body
//! └── div.page
//!     ├── header.header          title │ logo → #contact │ contact me
//!     ├── main.main-content      table of contents
//!     ├── section.sections       i. about … vi. origins
//!     └── section.full-page      #contact footer
//! ```

pub mod content;
mod footer;
mod header;
mod sections;
pub mod styles;
mod toc;

use crate::config::SiteConfig;
use crate::dom::{Document, Element, StyleLink};
use crate::style::global;
use styles::STYLES;

/// Build the body tree. The global style layer is initialized before any
/// component renders.
pub fn compose_body() -> Element {
    global();
    let s = &*STYLES;

    Element::new("body").child(
        Element::new("div")
            .styled(&s.page)
            .child(header::header(s))
            .child(toc::table_of_contents(s))
            .child(sections::sections(s))
            .child(footer::footer(s)),
    )
}

/// Full page stylesheet.
pub fn stylesheet() -> String {
    STYLES.sheet().to_css()
}

/// Wrap the body tree into a document using the site metadata.
pub fn compose(config: &SiteConfig, style: StyleLink) -> Document {
    Document {
        lang: config.base.language.clone(),
        title: config.base.title.clone(),
        description: config.base.description.clone(),
        style,
        body: compose_body(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::global::init_count;

    #[test]
    fn test_top_to_bottom_order() {
        let body = compose_body();
        let page = body.find_class("page").unwrap();
        let order: Vec<_> = page.child_elements().map(|e| e.classes[0]).collect();
        assert_eq!(order, vec!["header", "main-content", "sections", "full-page"]);
    }

    #[test]
    fn test_global_style_initialized_once_across_renders() {
        compose_body();
        compose_body();
        assert_eq!(init_count(), 1);
    }

    #[test]
    fn test_compose_uses_site_metadata() {
        let config = SiteConfig::default();
        let doc = compose(&config, StyleLink::Inline(stylesheet()));
        assert_eq!(doc.lang, "en");
        assert_eq!(doc.title, "Sabrina Button");
        let html = doc.to_html();
        assert!(html.contains("<style>\n@import url("));
        assert!(html.contains("i. about"));
        assert!(html.contains(r#"id="contact""#));
    }
}
