// Host-side tests for section rendering against the built-in content.

use folio_core::*;

fn render(id: &str) -> VisualNode {
    let model = ContentModel::portfolio();
    let (index, section) = model
        .sections()
        .iter()
        .enumerate()
        .find(|(_, s)| s.id == id)
        .expect("section exists");
    render_section(section, index, LayerTransform::IDENTITY)
}

#[test]
fn skills_render_eight_icon_label_pairs_in_order() {
    let node = render("skills");
    let items = node.find_elements(|el| el.attr_value("data-skill").is_some());
    let labels: Vec<String> = items
        .iter()
        .map(|el| VisualNode::Element((*el).clone()).text_content())
        .collect();
    assert_eq!(
        labels,
        vec!["React", "TailwindCSS", "Node.js", "MongoDB", "HTML", "CSS", "JAVASCIPT", "Databases"]
    );
    for el in &items {
        let item = VisualNode::Element((*el).clone());
        assert_eq!(item.icons().len(), 1, "each skill carries one icon");
    }
    assert_eq!(
        node.icons(),
        vec![
            Icon::React,
            Icon::TailwindCss,
            Icon::NodeJs,
            Icon::MongoDb,
            Icon::Html5,
            Icon::Css3,
            Icon::JavaScript,
            Icon::Database
        ]
    );
}

#[test]
fn projects_render_three_cards_with_safe_outbound_links() {
    let node = render("projects");
    let cards = node.find_elements(|el| el.attr_value("data-project").is_some());
    assert_eq!(cards.len(), 3);

    for card in cards {
        let card = VisualNode::Element(card.clone());
        let links = card.find_elements(|el| el.tag == "a");
        assert_eq!(links.len(), 2);
        for link in links {
            assert_eq!(link.attr_value("rel"), Some("noopener noreferrer"));
            assert_eq!(link.attr_value("target"), Some("_blank"));
            assert!(link.attr_value("href").is_some_and(|h| h.starts_with("https://")));
        }
    }
}

#[test]
fn project_cards_keep_tech_order_and_urls() {
    let node = render("projects");
    let card = node
        .find_by_attr("data-project", "E-commerce App")
        .into_iter()
        .next()
        .expect("e-commerce card")
        .clone();
    let card = VisualNode::Element(card);

    let chips: Vec<String> = card
        .find_elements(|el| el.tag == "span")
        .into_iter()
        .map(|el| VisualNode::Element(el.clone()).text_content())
        .collect();
    assert_eq!(chips, vec!["Node.js", "Express", "MongoDB", "ReactJs"]);

    let hrefs: Vec<&str> = card
        .find_elements(|el| el.tag == "a")
        .into_iter()
        .filter_map(|el| el.attr_value("href"))
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "https://ecommerce-three-black-47.vercel.app/",
            "https://github.com/adiityasharma/e-commerce-web"
        ]
    );
}

#[test]
fn text_sections_preserve_newlines() {
    let contact = render("contact");
    let body = contact
        .find_elements(|el| el.tag == "p")
        .into_iter()
        .next()
        .expect("contact body")
        .clone();
    let text = VisualNode::Element(body.clone()).text_content();
    assert_eq!(
        text,
        "Email: adityasharma626367@gmail.com\nLinkedIn: /in/adiityasharma\nX: /adityasharma_16"
    );
    assert!(body.has_class("whitespace-pre-line"));

    let html = html::to_html(&contact);
    assert!(html.contains("adityasharma626367@gmail.com\nLinkedIn"));
}

#[test]
fn about_renders_title_then_text() {
    let about = render("about");
    let text = about.text_content();
    assert!(text.starts_with("About Me"));
    assert!(text.contains("MERN stack developer"));
}

#[test]
fn project_without_tech_renders_empty_chip_row() {
    static BARE: [ProjectEntry; 1] = [ProjectEntry {
        title: "Bare",
        description: "",
        tech: &[],
        image: ImageAsset::Portfolio,
        live_url: "https://example.com",
        code_url: "https://example.com/code",
    }];
    let section = SectionDescriptor {
        id: "projects",
        title: "Projects",
        body: SectionBody::Projects(&BARE),
    };
    let node = render_section(&section, 2, LayerTransform::IDENTITY);
    assert!(node.find_elements(|el| el.tag == "span").is_empty());
    let rows = node.find_elements(|el| el.has_class("flex-wrap"));
    assert_eq!(rows.len(), 1);
    assert!(rows[0].children.is_empty());
    assert_eq!(node.find_elements(|el| el.tag == "a").len(), 2);
}
