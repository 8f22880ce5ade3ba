//! HTML serialization of a composed page tree.
//!
//! Motion is not serialized: a static snapshot shows every node at rest.

use crate::assets::{icon_element, image_element};
use crate::view::{Element, VisualNode};
use std::fmt::Write;

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

const STYLESHEETS: &[&str] =
    &["https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"];
const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

pub fn to_html(node: &VisualNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Full standalone document with the page tree inside `<body>`.
pub fn document(title: &str, tree: &VisualNode) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    _ = writeln!(out, "<title>{}</title>", escape_text(title));
    for href in STYLESHEETS {
        _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_attr(href));
    }
    _ = writeln!(out, "<script src=\"{}\"></script>", escape_attr(TAILWIND_SCRIPT));
    out.push_str("</head>\n<body>\n");
    write_node(&mut out, tree);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn write_node(out: &mut String, node: &VisualNode) {
    match node {
        VisualNode::Element(el) => write_element(out, el),
        VisualNode::Text(text) => out.push_str(&escape_text(text)),
        VisualNode::Icon(icon) => write_element(out, &icon_element(*icon)),
        VisualNode::Image { asset, alt, class } => {
            write_element(out, &image_element(*asset, alt, class))
        }
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag);
    for (name, value) in &el.attrs {
        _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag) {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    _ = write!(out, "</{}>", el.tag);
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
