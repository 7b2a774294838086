//! Three-zone page header.

use super::content::{
    CONTACT_ANCHOR, CONTACT_EMAIL, CONTACT_LABEL, LOGO_ALT, LOGO_SRC, Link, OWNER_NAME,
};
use super::sections::anchor;
use super::styles::Styles;
use crate::dom::Element;

/// Title left, logo (linking to the contact footer) center, contact right.
pub fn header(s: &Styles) -> Element {
    let left = Element::new("div")
        .styled(&s.header_left)
        .child(Element::new("h1").styled(&s.site_title).text(OWNER_NAME));

    let center = Element::new("div").styled(&s.header_center).child(
        Element::new("a")
            .attr("href", format!("#{CONTACT_ANCHOR}"))
            .child(logo(s)),
    );

    let right = Element::new("div").styled(&s.header_right).child(
        Element::new("span")
            .styled(&s.contact_label)
            .child(anchor(&Link::new(CONTACT_EMAIL, CONTACT_LABEL), &s.bold_underline)),
    );

    Element::new("header")
        .styled(&s.header)
        .child(left)
        .child(center)
        .child(right)
}

fn logo(s: &Styles) -> Element {
    Element::new("img")
        .styled(&s.logo)
        .attr("src", LOGO_SRC)
        .attr("alt", LOGO_ALT)
}
