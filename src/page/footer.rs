//! Full-height contact footer.

use super::content::{
    CONTACT_ANCHOR, COPYRIGHT, LOGO_ALT, LOGO_SRC, OWNER_NAME, PROFILE_SEPARATOR, PROFILES,
};
use super::sections::anchor;
use super::styles::Styles;
use crate::dom::{Element, Node};

pub fn footer(s: &Styles) -> Element {
    let mut links: Vec<Node> = Vec::with_capacity(PROFILES.len() * 2);
    for (i, profile) in PROFILES.iter().enumerate() {
        if i > 0 {
            links.push(PROFILE_SEPARATOR.into());
        }
        links.push(anchor(profile, &s.footer_link).into());
    }

    Element::new("section")
        .styled(&s.full_page)
        .id(CONTACT_ANCHOR)
        .child(
            Element::new("img")
                .styled(&s.footer_logo)
                .attr("src", LOGO_SRC)
                .attr("alt", LOGO_ALT),
        )
        .child(Element::new("h3").styled(&s.footer_name).text(OWNER_NAME))
        .child(Element::new("div").styled(&s.footer_links).children(links))
        .child(Element::new("div").styled(&s.footer_copyright).text(COPYRIGHT))
}
