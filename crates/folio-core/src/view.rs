//! Host-independent page tree.

use crate::assets::{Icon, ImageAsset};
use crate::motion::{HoverEffect, Transition};
use smallvec::SmallVec;

pub type Attrs = SmallVec<[(&'static str, String); 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum VisualNode {
    Element(Element),
    /// Verbatim text; newlines are kept as-is.
    Text(String),
    Icon(Icon),
    Image {
        asset: ImageAsset,
        alt: String,
        class: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Attrs,
    pub children: Vec<VisualNode>,
    pub transition: Option<Transition>,
    pub hover: Option<HoverEffect>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: SmallVec::new(),
            children: Vec::new(),
            transition: None,
            hover: None,
        }
    }

    /// Sets `name`, replacing an earlier value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<VisualNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VisualNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VisualNode::Text(text.into()))
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn hover(mut self, hover: HoverEffect) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for VisualNode {
    fn from(el: Element) -> Self {
        VisualNode::Element(el)
    }
}

impl VisualNode {
    pub fn text(text: impl Into<String>) -> Self {
        VisualNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VisualNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this subtree in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VisualNode::Text(t) => out.push_str(t),
            VisualNode::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            VisualNode::Icon(_) | VisualNode::Image { .. } => {}
        }
    }

    /// Depth-first, pre-order visit of every node.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a VisualNode)) {
        visit(self);
        if let VisualNode::Element(el) = self {
            for c in &el.children {
                c.walk(visit);
            }
        }
    }

    /// Elements matching `pred`, in document order.
    pub fn find_elements(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |n| {
            if let VisualNode::Element(el) = n {
                if pred(el) {
                    found.push(el);
                }
            }
        });
        found
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        self.find_elements(|el| el.attr_value(name) == Some(value))
    }

    pub fn icons(&self) -> Vec<Icon> {
        let mut found = Vec::new();
        self.walk(&mut |n| {
            if let VisualNode::Icon(icon) = n {
                found.push(*icon);
            }
        });
        found
    }
}
