//! Opaque icon and image references plus their resolution to renderable nodes.
//!
//! Content only ever names an [`Icon`] or [`ImageAsset`]; turning that name
//! into markup (an icon-font glyph, an image path) happens here so that the
//! DOM host and the HTML serializer resolve assets identically.

use crate::view::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    React,
    TailwindCss,
    NodeJs,
    MongoDb,
    Html5,
    Css3,
    JavaScript,
    Database,
}

impl Icon {
    pub fn id(self) -> &'static str {
        match self {
            Icon::React => "react",
            Icon::TailwindCss => "tailwindcss",
            Icon::NodeJs => "nodejs",
            Icon::MongoDb => "mongodb",
            Icon::Html5 => "html5",
            Icon::Css3 => "css3",
            Icon::JavaScript => "javascript",
            Icon::Database => "database",
        }
    }

    /// Devicon glyph class.
    pub fn glyph_class(self) -> &'static str {
        match self {
            Icon::React => "devicon-react-original",
            Icon::TailwindCss => "devicon-tailwindcss-original",
            Icon::NodeJs => "devicon-nodejs-plain",
            Icon::MongoDb => "devicon-mongodb-plain",
            Icon::Html5 => "devicon-html5-plain",
            Icon::Css3 => "devicon-css3-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::Database => "devicon-azuresqldatabase-plain",
        }
    }

    pub fn tint_class(self) -> &'static str {
        match self {
            Icon::React => "text-sky-400",
            Icon::TailwindCss => "text-teal-400",
            Icon::NodeJs => "text-green-500",
            Icon::MongoDb => "text-green-400",
            Icon::Html5 => "text-orange-500",
            Icon::Css3 => "text-blue-500",
            Icon::JavaScript => "text-yellow-500",
            Icon::Database => "text-purple-500",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    Portfolio,
    Ecommerce,
    Giphy,
}

impl ImageAsset {
    pub fn id(self) -> &'static str {
        match self {
            ImageAsset::Portfolio => "portfolio",
            ImageAsset::Ecommerce => "ecommerce",
            ImageAsset::Giphy => "giphy",
        }
    }

    /// Path relative to the served page.
    pub fn path(self) -> &'static str {
        match self {
            ImageAsset::Portfolio => "assets/image/portfolio.png",
            ImageAsset::Ecommerce => "assets/image/ecommerce.png",
            ImageAsset::Giphy => "assets/image/giphy.png",
        }
    }
}

pub fn icon_element(icon: Icon) -> Element {
    Element::new("i")
        .class(format!("{} {}", icon.glyph_class(), icon.tint_class()))
        .attr("data-icon", icon.id())
        .attr("aria-hidden", "true")
}

pub fn image_element(asset: ImageAsset, alt: &str, class: &str) -> Element {
    Element::new("img")
        .attr("src", asset.path())
        .attr("data-image", asset.id())
        .attr("alt", alt)
        .attr("loading", "lazy")
        .class(class)
}
