//! HTML serialization.

use super::node::{Element, Node};
use quick_xml::escape::escape;

/// How the page stylesheet is attached to the document head.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleLink {
    /// `<style>` element with the given CSS.
    Inline(String),
    /// `<link rel="stylesheet">` to the given href.
    External(String),
}

/// A complete HTML document: head metadata plus the body tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub style: StyleLink,
    pub body: Element,
}

impl Document {
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape(self.lang.as_str())));
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        if !self.description.is_empty() {
            html.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                escape(self.description.as_str())
            ));
        }
        html.push_str(&format!("<title>{}</title>\n", escape(self.title.as_str())));
        match &self.style {
            StyleLink::Inline(css) => {
                html.push_str("<style>\n");
                html.push_str(css);
                html.push_str("</style>\n");
            }
            StyleLink::External(href) => html.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                escape(href.as_str())
            )),
        }
        html.push_str("</head>\n");
        write_element(&self.body, &mut html);
        html.push_str("\n</html>\n");
        html
    }
}

/// Serialize a single node.
#[cfg(test)]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape(text.as_str())),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&element.classes.join(" "));
        out.push('"');
    }
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }
    out.push('>');

    if element.is_void() {
        return;
    }
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}
