//! Read-only traversal over a document tree.

use super::node::{Element, Node};

/// Pre-order iterator over an element and all its descendant elements.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // push in reverse so the first child is visited next
        self.stack.extend(element.child_elements().rev());
        Some(element)
    }
}

impl Element {
    /// This element followed by every descendant element, document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn find_all<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Element>
    where
        P: Fn(&Element) -> bool + 'a,
    {
        self.descendants().filter(move |e| predicate(e))
    }

    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.descendants().find(|e| predicate(e))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|e| e.get_id() == Some(id))
    }

    pub fn count_id(&self, id: &str) -> usize {
        self.descendants().filter(|e| e.get_id() == Some(id)).count()
    }

    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.find(|e| e.has_class(class))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::new("body")
            .child(
                Element::new("nav")
                    .id("toc")
                    .child(Element::new("a").attr("href", "#a").text("first"))
                    .child(Element::new("a").attr("href", "#b").text("second")),
            )
            .child(Element::new("section").id("a").text("A "))
            .child(Element::new("section").id("b").child(Element::new("b").text("bold")))
    }

    #[test]
    fn test_descendants_document_order() {
        let t = tree();
        let tags: Vec<_> = t.descendants().map(|e| e.tag).collect();
        assert_eq!(tags, vec!["body", "nav", "a", "a", "section", "section", "b"]);
    }

    #[test]
    fn test_find_by_id_and_count() {
        let t = tree();
        assert_eq!(t.find_by_id("b").map(|e| e.tag), Some("section"));
        assert_eq!(t.count_id("a"), 1);
        assert_eq!(t.count_id("missing"), 0);
    }

    #[test]
    fn test_find_all_links() {
        let t = tree();
        let hrefs: Vec<_> = t
            .find_all(|e| e.tag == "a")
            .filter_map(|e| e.get_attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["#a", "#b"]);
    }

    #[test]
    fn test_text_content() {
        let t = tree();
        assert_eq!(t.text_content(), "firstsecondA bold");
        assert_eq!(t.find_by_id("b").unwrap().text_content(), "bold");
    }
}
