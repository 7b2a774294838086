//! Table of contents.

use super::content::{SECTIONS, TOC_HEADING};
use super::styles::Styles;
use crate::dom::Element;

/// Centered main area holding the numbered list of section links.
pub fn table_of_contents(s: &Styles) -> Element {
    let heading = Element::new("li")
        .styled(&s.toc_item)
        .child(Element::new("span").styled(&s.bold).text(TOC_HEADING));

    let entries = SECTIONS.iter().map(|section| {
        Element::new("li").styled(&s.toc_item).child(
            Element::new("a")
                .attr("href", format!("#{}", section.anchor))
                .child(Element::new("span").styled(&s.toc_number).text(section.numeral))
                .child(
                    Element::new("span")
                        .styled(&s.bold_underline)
                        .text(section.label),
                ),
        )
    });

    let list = Element::new("ul")
        .styled(&s.toc_list)
        .child(heading)
        .children(entries);

    Element::new("main")
        .styled(&s.main)
        .child(Element::new("nav").child(list))
}
