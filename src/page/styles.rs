//! Named style rules for every page primitive.
//!
//! Registration order in [`Styles::sheet`] is the emission order, so derived
//! rules must come after their base.

use crate::style::{
    Clamp, MediaQuery, StyleRule, Stylesheet, global,
    value::{Value, ch, em, num, percent, px, rem, vh},
};
use std::sync::{Arc, LazyLock};

/// Responsive size shared by the header title and contact label.
pub const HEADER_TEXT_SIZE: Clamp = Clamp::new(10.0, 2.5, 14.0);

/// The single named breakpoint for narrow phones.
pub const NARROW_VIEWPORT: f32 = 420.0;

pub const BODY_TEXT_SIZE: f32 = 14.0;

pub static STYLES: LazyLock<Styles> = LazyLock::new(Styles::build);

pub struct Styles {
    // layout
    pub page: StyleRule,
    pub header: StyleRule,
    pub header_left: StyleRule,
    pub header_center: StyleRule,
    pub header_right: StyleRule,
    pub main: StyleRule,
    pub sections: StyleRule,
    pub section: StyleRule,
    pub section_content: StyleRule,
    pub full_page: StyleRule,

    // typography
    pub site_title: StyleRule,
    pub contact_label: StyleRule,
    pub section_title: StyleRule,
    pub bold: StyleRule,
    pub bold_underline: StyleRule,
    pub italic: StyleRule,
    pub toc_list: StyleRule,
    pub toc_item: StyleRule,
    pub toc_number: StyleRule,

    // images
    pub logo: Arc<StyleRule>,
    pub footer_logo: StyleRule,

    // footer
    pub footer_name: StyleRule,
    pub footer_links: StyleRule,
    pub footer_link: StyleRule,
    pub footer_copyright: StyleRule,
}

impl Styles {
    fn build() -> Self {
        let logo = Arc::new(
            StyleRule::new("logo")
                .with("width", px(100.0))
                .with("height", "auto")
                .with("object-fit", "contain")
                .media(MediaQuery::MaxWidth(NARROW_VIEWPORT), [("width", px(90.0))]),
        );

        let footer_logo = StyleRule::extend("footer-logo", &logo)
            .with("width", px(160.0))
            .media(MediaQuery::MaxWidth(NARROW_VIEWPORT), [("width", px(100.0))]);

        Self {
            page: StyleRule::new("page")
                .with("display", "flex")
                .with("flex-direction", "column")
                .with("min-height", vh(100.0))
                .with("padding", rem(2.0)),
            header: StyleRule::new("header")
                .with("display", "grid")
                .with("grid-template-columns", "1fr auto 1fr")
                .with("align-items", "center")
                .with("width", percent(100.0))
                .with("margin-bottom", rem(2.0)),
            header_left: StyleRule::new("header-left")
                .with("justify-self", "start")
                .with("min-width", px(0.0)),
            header_center: StyleRule::new("header-center")
                .with("justify-self", "center")
                .with("display", "flex")
                .with("align-items", "center")
                .with("justify-content", "center"),
            header_right: StyleRule::new("header-right")
                .with("justify-self", "end")
                .with("min-width", px(0.0)),
            main: StyleRule::new("main-content")
                .with("flex", num(1.0))
                .with("display", "flex")
                .with("font-size", px(BODY_TEXT_SIZE))
                .with("flex-direction", "column")
                .with("justify-content", "center")
                .with("align-items", "center")
                .with("min-height", "calc(100vh - 160px)"),
            sections: StyleRule::new("sections")
                .with("display", "flex")
                .with("flex-direction", "column")
                .with("gap", rem(4.0))
                .with("padding", "3rem 2rem")
                .with("width", percent(100.0))
                .with("align-items", "center"),
            section: StyleRule::new("section")
                .with("width", percent(100.0))
                .with("display", "flex")
                .with("justify-content", "center"),
            section_content: StyleRule::new("section-content")
                .with("width", "min(900px, 100%)")
                .with("font-size", px(BODY_TEXT_SIZE))
                .with("text-align", "left")
                .with("line-height", num(1.6))
                .with("font-weight", num(300.0)),
            full_page: StyleRule::new("full-page")
                .with("min-height", vh(100.0))
                .with("display", "flex")
                .with("flex-direction", "column")
                .with("align-items", "center")
                .with("justify-content", "center")
                .with("position", "relative")
                .with("padding", rem(2.0)),

            site_title: StyleRule::new("site-title")
                .with("font-weight", num(600.0))
                .with("margin", px(0.0))
                .with("text-transform", "uppercase")
                .with("letter-spacing", em(0.05))
                .with("white-space", "nowrap")
                .with("overflow", "hidden")
                .with("text-overflow", "ellipsis")
                .with("font-size", HEADER_TEXT_SIZE),
            contact_label: StyleRule::new("contact-label")
                .with("font-weight", num(400.0))
                .with("cursor", "pointer")
                .with("color", "inherit")
                .with("white-space", "nowrap")
                .with("overflow", "hidden")
                .with("text-overflow", "ellipsis")
                .with("font-size", HEADER_TEXT_SIZE)
                .hover("text-decoration", "underline"),
            section_title: StyleRule::new("section-title")
                .with("margin", "0 0 1rem 0")
                .with("font-size", px(BODY_TEXT_SIZE))
                .with("font-weight", num(600.0)),
            bold: StyleRule::new("bold").with("font-weight", num(600.0)),
            bold_underline: StyleRule::new("bold-underline")
                .with("font-weight", num(600.0))
                .with("color", "inherit")
                .with("text-decoration", "none")
                .with("display", "inline-flex")
                .with("align-items", "baseline")
                .with("gap", rem(0.25))
                .hover("text-decoration", "underline")
                .hover("cursor", "pointer"),
            italic: StyleRule::new("italic").with("font-style", "italic"),
            toc_list: StyleRule::new("toc-list")
                .with("list-style", "none")
                .with("padding", px(0.0))
                .with("margin", px(0.0))
                .with("text-align", "left"),
            toc_item: StyleRule::new("toc-item")
                .with("margin-bottom", rem(1.5))
                .descendant(
                    "a",
                    [
                        ("text-decoration", Value::from("none")),
                        ("color", Value::from("inherit")),
                        ("transition", Value::from("opacity 0.2s ease")),
                        ("display", Value::from("flex")),
                        ("align-items", Value::from("baseline")),
                        ("gap", rem(0.25)),
                    ],
                ),
            toc_number: StyleRule::new("toc-number")
                .with("display", "inline-block")
                .with("min-width", ch(4.0))
                .with("text-align", "left")
                .with("font-weight", num(300.0)),

            logo,
            footer_logo,

            footer_name: StyleRule::new("footer-name")
                .with("margin", "1rem 0 0.5rem 0")
                .with("font-weight", num(600.0))
                .with("text-transform", "uppercase"),
            footer_links: StyleRule::new("footer-links")
                .with("display", "flex")
                .with("align-items", "center")
                .with("justify-content", "center")
                .with("font-size", px(BODY_TEXT_SIZE))
                .with("gap", rem(1.0))
                .with("margin-top", rem(0.5)),
            footer_link: StyleRule::new("footer-link")
                .with("color", "inherit")
                .with("text-decoration", "none")
                .with("font-weight", num(600.0))
                .hover("text-decoration", "underline"),
            footer_copyright: StyleRule::new("footer-copyright")
                .with("position", "absolute")
                .with("left", rem(1.0))
                .with("bottom", rem(1.0))
                .with("color", "#888")
                .with("font-size", px(12.0)),
        }
    }

    /// Full stylesheet: global layer first, then every rule.
    pub fn sheet(&self) -> Stylesheet<'_> {
        let mut sheet = Stylesheet::new(global());
        sheet
            .push(&self.page)
            .push(&self.header)
            .push(&self.header_left)
            .push(&self.header_center)
            .push(&self.header_right)
            .push(&self.site_title)
            .push(&self.contact_label)
            .push(&self.logo)
            .push(&self.main)
            .push(&self.full_page)
            .push(&self.footer_logo)
            .push(&self.footer_name)
            .push(&self.footer_links)
            .push(&self.footer_link)
            .push(&self.footer_copyright)
            .push(&self.toc_list)
            .push(&self.toc_item)
            .push(&self.bold_underline)
            .push(&self.bold)
            .push(&self.toc_number)
            .push(&self.sections)
            .push(&self.section)
            .push(&self.section_content)
            .push(&self.section_title)
            .push(&self.italic);
        sheet
    }
}
