//! Content sections and rich-text rendering.

use super::content::{Inline, Link, SECTIONS, Section};
use super::styles::Styles;
use crate::dom::{Element, Node};
use crate::style::StyleRule;

/// Stack of every content section, in display order.
pub fn sections(s: &Styles) -> Element {
    Element::new("section")
        .styled(&s.sections)
        .children(SECTIONS.iter().map(|section| section_block(s, section)))
}

/// Outer centering wrapper carrying the anchor, inner max-width box with
/// left-aligned text.
fn section_block(s: &Styles, section: &Section) -> Element {
    let content = Element::new("div")
        .styled(&s.section_content)
        .child(
            Element::new("h2")
                .styled(&s.section_title)
                .text(&section.heading()),
        )
        .children(
            section
                .paragraphs
                .iter()
                .map(|paragraph| Element::new("p").children(inline_nodes(s, paragraph))),
        );

    Element::new("section")
        .styled(&s.section)
        .id(section.anchor)
        .child(content)
}

pub fn inline_nodes(s: &Styles, inlines: &[Inline]) -> Vec<Node> {
    inlines.iter().map(|inline| inline_node(s, inline)).collect()
}

fn inline_node(s: &Styles, inline: &Inline) -> Node {
    match inline {
        Inline::Text(text) => Node::from(*text),
        Inline::Bold(text) => Element::new("span").styled(&s.bold).text(text).into(),
        Inline::Italic(children) => Element::new("span")
            .styled(&s.italic)
            .children(inline_nodes(s, children))
            .into(),
        Inline::Link(link) => anchor(link, &s.bold_underline).into(),
        Inline::Break => Element::new("br").into(),
    }
}

/// `<a>` for a link, with new-context attributes when requested.
pub fn anchor(link: &Link, rule: &StyleRule) -> Element {
    let a = Element::new("a").styled(rule).attr("href", link.href);
    let a = if link.new_tab {
        a.attr("target", "_blank").attr("rel", "noopener noreferrer")
    } else {
        a
    };
    a.text(&link.display_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render;
    use crate::page::styles::STYLES;

    #[test]
    fn test_about_has_single_bold_lead() {
        let tree = sections(&STYLES);
        let about = tree.find_by_id("about").unwrap();

        assert_eq!(about.find_class("section-title").unwrap().text_content(), "i. about");

        let paragraphs: Vec<_> = about.find_all(|e| e.tag == "p").collect();
        assert_eq!(paragraphs.len(), 1);
        let p = paragraphs[0];
        assert_eq!(p.children.len(), 2);
        match (&p.children[0], &p.children[1]) {
            (Node::Element(lead), Node::Text(body)) => {
                assert!(lead.has_class("bold"));
                assert_eq!(
                    lead.text_content(),
                    "I build autonomous systems for unpredictable environments."
                );
                assert!(body.starts_with(" My work focuses"));
            }
            other => panic!("unexpected about paragraph: {other:?}"),
        }
        assert_eq!(about.find_all(|e| e.has_class("bold")).count(), 1);
    }

    #[test]
    fn test_two_layer_section_pattern() {
        let tree = sections(&STYLES);
        for section in tree.child_elements() {
            assert!(section.has_class("section"));
            assert!(section.get_id().is_some());
            let inner: Vec<_> = section.child_elements().collect();
            assert_eq!(inner.len(), 1);
            assert!(inner[0].has_class("section-content"));
        }
        assert_eq!(tree.child_elements().count(), 6);
    }

    #[test]
    fn test_document_link_attributes() {
        let link = Link::new("/omni-diff-drive.pdf", "Paper").bracketed().new_tab();
        let html = render(&anchor(&link, &STYLES.bold_underline).into());
        assert_eq!(
            html,
            r#"<a class="bold-underline" href="/omni-diff-drive.pdf" target="_blank" rel="noopener noreferrer">[Paper↗]</a>"#
        );
    }

    #[test]
    fn test_education_italic_block_with_breaks() {
        let tree = sections(&STYLES);
        let education = tree.find_by_id("education").unwrap();
        let breaks = education.find_all(|e| e.tag == "br").count();
        assert_eq!(breaks, 2);
        assert!(education.text_content().contains("Schulich Leader Scholarship"));
    }
}
