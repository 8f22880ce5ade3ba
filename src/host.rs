use crate::dom::js_err;
use crate::motion::MotionPlayer;
use folio_core::{icon_element, image_element, Element, RenderHost, VisualNode};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handle for each node of the active tree, mirroring its shape.
struct MountedNode {
    node: web::Node,
    children: Vec<MountedNode>,
}

/// Renders page trees under a root element.
///
/// Updates patch the live DOM in place: attributes and text are rewritten
/// where they differ, and a subtree is rebuilt only when its shape changes.
/// This keeps running entrance transitions intact across pointer updates.
pub struct DomHost {
    document: web::Document,
    root: web::Element,
    current: Option<(VisualNode, MountedNode)>,
    motion: MotionPlayer,
}

impl DomHost {
    pub fn new(document: web::Document, root: web::Element) -> Self {
        Self {
            document,
            root,
            current: None,
            motion: MotionPlayer::default(),
        }
    }

    fn build(&mut self, node: &VisualNode) -> anyhow::Result<MountedNode> {
        match node {
            VisualNode::Element(el) => self.build_element(el),
            VisualNode::Text(text) => Ok(MountedNode {
                node: self.document.create_text_node(text).into(),
                children: Vec::new(),
            }),
            VisualNode::Icon(icon) => self.build_element(&icon_element(*icon)),
            VisualNode::Image { asset, alt, class } => {
                self.build_element(&image_element(*asset, alt, class))
            }
        }
    }

    fn build_element(&mut self, el: &Element) -> anyhow::Result<MountedNode> {
        let dom = self.document.create_element(el.tag).map_err(js_err)?;
        for (name, value) in &el.attrs {
            dom.set_attribute(name, value).map_err(js_err)?;
        }
        let mut children = Vec::with_capacity(el.children.len());
        for child in &el.children {
            let mounted = self.build(child)?;
            dom.append_child(&mounted.node).map_err(js_err)?;
            children.push(mounted);
        }
        if el.transition.is_some() || el.hover.is_some() {
            if let Some(html) = dom.dyn_ref::<web::HtmlElement>() {
                if let Some(t) = el.transition {
                    self.motion.prepare_enter(html, t)?;
                }
                if let Some(h) = el.hover {
                    self.motion.attach_hover(html, h)?;
                }
            }
        }
        Ok(MountedNode {
            node: dom.into(),
            children,
        })
    }

    fn patch(
        &mut self,
        old: &VisualNode,
        new: &VisualNode,
        mounted: MountedNode,
    ) -> anyhow::Result<MountedNode> {
        match (old, new) {
            (VisualNode::Element(a), VisualNode::Element(b))
                if a.tag == b.tag && a.children.len() == b.children.len() =>
            {
                let MountedNode { node, children } = mounted;
                let el = node
                    .dyn_ref::<web::Element>()
                    .ok_or_else(|| anyhow::anyhow!("mounted <{}> is not an element", a.tag))?;
                patch_attrs(el, a, b)?;
                let mut patched = Vec::with_capacity(children.len());
                for ((oc, nc), mc) in a.children.iter().zip(&b.children).zip(children) {
                    patched.push(self.patch(oc, nc, mc)?);
                }
                Ok(MountedNode {
                    node,
                    children: patched,
                })
            }
            (VisualNode::Text(a), VisualNode::Text(b)) => {
                if a != b {
                    mounted.node.set_text_content(Some(b.as_str()));
                }
                Ok(mounted)
            }
            _ if old == new => Ok(mounted),
            _ => {
                self.motion.release(&mounted.node);
                let fresh = self.build(new)?;
                let parent = mounted
                    .node
                    .parent_node()
                    .ok_or_else(|| anyhow::anyhow!("replaced node has no parent"))?;
                parent
                    .replace_child(&fresh.node, &mounted.node)
                    .map_err(js_err)?;
                Ok(fresh)
            }
        }
    }
}

fn patch_attrs(el: &web::Element, old: &Element, new: &Element) -> anyhow::Result<()> {
    for (name, value) in &new.attrs {
        if old.attr_value(name) != Some(value.as_str()) {
            el.set_attribute(name, value).map_err(js_err)?;
        }
    }
    for (name, _) in &old.attrs {
        if new.attr_value(name).is_none() {
            el.remove_attribute(name).map_err(js_err)?;
        }
    }
    Ok(())
}

impl RenderHost for DomHost {
    fn mount(&mut self, tree: &VisualNode) -> anyhow::Result<()> {
        if self.current.is_some() {
            self.unmount();
        }
        let mounted = self.build(tree)?;
        self.root.append_child(&mounted.node).map_err(js_err)?;
        self.current = Some((tree.clone(), mounted));
        self.motion.flush()
    }

    fn update(&mut self, tree: &VisualNode) -> anyhow::Result<()> {
        let Some((old, mounted)) = self.current.take() else {
            return self.mount(tree);
        };
        match self.patch(&old, tree, mounted) {
            Ok(mounted) => {
                self.current = Some((tree.clone(), mounted));
                self.motion.flush()
            }
            Err(e) => {
                // drop the half-patched DOM; the next update mounts fresh
                self.root.set_inner_html("");
                self.motion.clear();
                Err(e)
            }
        }
    }

    fn unmount(&mut self) {
        if let Some((_, mounted)) = self.current.take() {
            _ = self.root.remove_child(&mounted.node);
        }
        self.motion.clear();
    }
}
