//! Section and hero rendering into view subtrees.
//!
//! Each content block is two nested nodes: an outer *layer* that carries the
//! parallax translation and an inner *card* that carries the entrance motion,
//! so pointer updates never restart a running entrance.

use crate::constants::*;
use crate::content::{HeroContent, ProjectEntry, SectionBody, SectionDescriptor, SkillEntry};
use crate::motion::{HoverEffect, Transition, VisualState};
use crate::parallax::LayerTransform;
use crate::view::{Element, VisualNode};

const CARD_CLASS: &str = "backdrop-blur-xl bg-white/30 rounded-2xl shadow-lg max-w-5xl border border-white/40 transition transform hover:scale-[1.03] hover:shadow-2xl hover:border-purple-400/50";
const SECTION_TITLE_CLASS: &str = "text-4xl font-semibold text-gray-800 transition-colors duration-300 hover:text-purple-600";
const SKILL_GRID_CLASS: &str = "grid grid-cols-3 sm:grid-cols-4 gap-6 mt-4";
const SKILL_ITEM_CLASS: &str = "flex flex-col items-center space-y-2 cursor-pointer group";
const PROJECT_GRID_CLASS: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-6";
const PROJECT_CARD_CLASS: &str = "backdrop-blur-xl bg-white/30 rounded-xl shadow-lg border border-white/40 overflow-hidden hover:shadow-2xl hover:border-purple-400/50";
const PROJECT_IMAGE_CLASS: &str = "w-full h-48 object-cover transition-transform duration-300 hover:scale-105";
const TECH_CHIP_CLASS: &str = "bg-purple-100 text-purple-600 px-2 py-1 rounded text-sm";
const LIVE_LINK_CLASS: &str = "px-3 py-1 bg-purple-500 text-white rounded hover:bg-purple-600 transition text-lg";
const CODE_LINK_CLASS: &str = "px-3 py-1 bg-gray-800 text-white rounded hover:bg-gray-900 transition text-lg";
const BODY_TEXT_CLASS: &str = "mt-2 text-xl md:text-2xl text-gray-700 whitespace-pre-line";

fn layer(key: &str, transform: LayerTransform) -> Element {
    Element::new("div")
        .class("w-full max-w-5xl flex justify-center")
        .attr("data-layer", key)
        .attr("style", format!("transform: {}", transform.to_css()))
}

pub fn render_hero(hero: &HeroContent, transform: LayerTransform) -> VisualNode {
    let enter = Transition::enter(
        VisualState {
            opacity: 0.0,
            scale: HERO_ENTER_SCALE,
            translate_y: 0.0,
        },
        HERO_ENTER_DURATION_SEC,
    );
    let card = Element::new("div")
        .class(format!("{CARD_CLASS} p-10 text-center"))
        .transition(enter)
        .child(
            Element::new("h1")
                .class("text-5xl md:text-8xl font-bold text-gray-800 transition-colors duration-300 hover:text-purple-600")
                .text(hero.greeting)
                .child(Element::new("span").class("text-purple-600").text(hero.name)),
        )
        .child(
            Element::new("p")
                .class("text-xl md:text-3xl mt-4 text-gray-700")
                .text(hero.tagline),
        );
    layer("hero", transform).child(card).into()
}

/// Renders one content section at display position `index`.
pub fn render_section(
    section: &SectionDescriptor,
    index: usize,
    transform: LayerTransform,
) -> VisualNode {
    let enter = Transition::enter(
        VisualState {
            opacity: 0.0,
            scale: 1.0,
            translate_y: SECTION_ENTER_OFFSET_Y,
        },
        SECTION_ENTER_DURATION_SEC,
    )
    .with_delay(index as f32 * SECTION_STAGGER_SEC)
    .on_visible();

    let body = match section.body {
        SectionBody::Skills(skills) => skill_grid(skills),
        SectionBody::Projects(projects) => project_grid(projects),
        SectionBody::Text(text) => text_block(text),
    };

    let card = Element::new("section")
        .class(format!("{CARD_CLASS} p-8 w-full"))
        .attr("id", section.id)
        .attr("data-kind", section.body.kind().name())
        .transition(enter)
        .child(Element::new("h2").class(SECTION_TITLE_CLASS).text(section.title))
        .child(body);
    layer(section.id, transform).child(card).into()
}

fn skill_grid(skills: &[SkillEntry]) -> Element {
    Element::new("div")
        .class(SKILL_GRID_CLASS)
        .children(skills.iter().map(skill_item))
}

fn skill_item(skill: &SkillEntry) -> Element {
    Element::new("div")
        .class(SKILL_ITEM_CLASS)
        .attr("data-skill", skill.label)
        .hover(HoverEffect {
            scale: SKILL_HOVER_SCALE,
            rotate_deg: SKILL_HOVER_ROTATE_DEG,
        })
        .child(
            Element::new("div")
                .class("text-4xl group-hover:drop-shadow-[0_0_10px_rgba(255,255,255,0.8)] transition")
                .child(VisualNode::Icon(skill.icon)),
        )
        .child(Element::new("p").class("text-lg text-gray-700").text(skill.label))
}

fn project_grid(projects: &[ProjectEntry]) -> Element {
    Element::new("div")
        .class(PROJECT_GRID_CLASS)
        .children(projects.iter().map(project_card))
}

fn project_card(project: &ProjectEntry) -> Element {
    let chips = project
        .tech
        .iter()
        .map(|t| Element::new("span").class(TECH_CHIP_CLASS).text(*t));
    Element::new("article")
        .class(PROJECT_CARD_CLASS)
        .attr("data-project", project.title)
        .hover(HoverEffect::scale(PROJECT_HOVER_SCALE))
        .child(
            Element::new("div")
                .class("overflow-hidden")
                .child(VisualNode::Image {
                    asset: project.image,
                    alt: project.title.to_string(),
                    class: PROJECT_IMAGE_CLASS,
                }),
        )
        .child(
            Element::new("div")
                .class("p-5")
                .child(
                    Element::new("h3")
                        .class("text-3xl font-semibold text-gray-800")
                        .text(project.title),
                )
                .child(
                    Element::new("p")
                        .class("text-gray-600 mt-2 text-xl")
                        .text(project.description),
                )
                .child(Element::new("div").class("flex flex-wrap gap-2 mt-3").children(chips))
                .child(
                    Element::new("div")
                        .class("flex gap-3 mt-4")
                        .child(outbound_link(project.live_url, "Live Demo", LIVE_LINK_CLASS))
                        .child(outbound_link(project.code_url, "Code", CODE_LINK_CLASS)),
                ),
        )
}

fn outbound_link(href: &str, label: &str, class: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", LINK_TARGET)
        .attr("rel", LINK_REL)
        .class(class)
        .text(label)
}

fn text_block(text: &str) -> Element {
    let p = Element::new("p").class(BODY_TEXT_CLASS);
    if text.is_empty() {
        p
    } else {
        p.text(text)
    }
}

/// Decorative gradient and blurred blobs behind the content column.
pub fn render_backdrop() -> Vec<VisualNode> {
    vec![
        Element::new("div")
            .class("absolute inset-0 bg-gradient-to-tr from-slate-200 to-slate-300 opacity-40 animate-[spin_30s_linear_infinite]")
            .attr("aria-hidden", "true")
            .into(),
        Element::new("div")
            .class("absolute w-72 h-72 bg-gray-400 rounded-full mix-blend-multiply filter blur-3xl opacity-40 top-10 left-10 animate-bounce")
            .attr("aria-hidden", "true")
            .into(),
        Element::new("div")
            .class("absolute w-96 h-96 rounded-full mix-blend-multiply filter blur-3xl opacity-40 bottom-10 right-10 animate-pulse")
            .attr("aria-hidden", "true")
            .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SECTIONS, SKILLS};

    fn card(node: &VisualNode) -> &Element {
        node.as_element()
            .and_then(|layer| layer.children.first())
            .and_then(VisualNode::as_element)
            .expect("layer wraps a card")
    }

    #[test]
    fn layer_carries_parallax_transform() {
        let node = render_section(&SECTIONS[2], 2, LayerTransform { dx: -3.75, dy: -3.75 });
        let layer = node.as_element().unwrap();
        assert_eq!(layer.attr_value("data-layer"), Some("projects"));
        assert_eq!(
            layer.attr_value("style"),
            Some("transform: translate(-3.75px, -3.75px)")
        );
    }

    #[test]
    fn card_enters_on_visible_with_stagger() {
        let node = render_section(&SECTIONS[3], 3, LayerTransform::IDENTITY);
        let t = card(&node).transition.expect("section entrance");
        assert!(t.trigger_on_visible);
        assert_eq!(t.delay_sec, Some(3.0 * SECTION_STAGGER_SEC));
        assert_eq!(t.initial.translate_y, SECTION_ENTER_OFFSET_Y);
        assert!(t.target.is_rest());
    }

    #[test]
    fn first_section_has_no_delay() {
        let node = render_section(&SECTIONS[0], 0, LayerTransform::IDENTITY);
        assert_eq!(card(&node).transition.and_then(|t| t.delay_sec), None);
    }

    #[test]
    fn skill_items_hover_with_scale_and_rotation() {
        let node = render_section(&SECTIONS[1], 1, LayerTransform::IDENTITY);
        let items = node.find_elements(|el| el.attr_value("data-skill").is_some());
        assert_eq!(items.len(), SKILLS.len());
        assert!(items.iter().all(|el| el.hover
            == Some(HoverEffect {
                scale: SKILL_HOVER_SCALE,
                rotate_deg: SKILL_HOVER_ROTATE_DEG
            })));
    }

    #[test]
    fn empty_text_renders_empty_paragraph() {
        let section = SectionDescriptor {
            id: "blank",
            title: "Blank",
            body: SectionBody::Text(""),
        };
        let node = render_section(&section, 0, LayerTransform::IDENTITY);
        let paragraphs = node.find_elements(|el| el.tag == "p");
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].children.is_empty());
        assert_eq!(node.text_content(), "Blank");
    }

    #[test]
    fn empty_lists_render_empty_grids() {
        let skills = SectionDescriptor {
            id: "skills",
            title: "Skills",
            body: SectionBody::Skills(&[]),
        };
        let projects = SectionDescriptor {
            id: "projects",
            title: "Projects",
            body: SectionBody::Projects(&[]),
        };
        for s in [skills, projects] {
            let node = render_section(&s, 0, LayerTransform::IDENTITY);
            let grids = node.find_elements(|el| el.has_class("grid"));
            assert_eq!(grids.len(), 1);
            assert!(grids[0].children.is_empty());
        }
    }

    #[test]
    fn hero_scales_in_on_mount() {
        let node = render_hero(&crate::content::HERO, LayerTransform { dx: 1.0, dy: -2.0 });
        let layer = node.as_element().unwrap();
        assert_eq!(layer.attr_value("data-layer"), Some("hero"));
        let t = card(&node).transition.unwrap();
        assert!(!t.trigger_on_visible);
        assert_eq!(t.initial.scale, HERO_ENTER_SCALE);
        assert!(node.text_content().contains("Aditya Sharma"));
    }
}
