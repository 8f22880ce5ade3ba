//! Static page content: hero copy, section descriptors, skills and projects.

use crate::assets::{Icon, ImageAsset};
use crate::error::ContentError;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: ImageAsset,
    pub live_url: &'static str,
    pub code_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    Skills,
    Projects,
}

impl SectionKind {
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBody {
    /// Plain text; embedded newlines are rendered as line breaks.
    Text(&'static str),
    Skills(&'static [SkillEntry]),
    Projects(&'static [ProjectEntry]),
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Text(_) => SectionKind::Text,
            SectionBody::Skills(_) => SectionKind::Skills,
            SectionBody::Projects(_) => SectionKind::Projects,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub greeting: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub static HERO: HeroContent = HeroContent {
    greeting: "Hi👋, I’m ",
    name: "Aditya Sharma",
    tagline: "Full-stack Developer — building beautiful & functional experiences.",
};

pub static SKILLS: [SkillEntry; 8] = [
    SkillEntry { label: "React", icon: Icon::React },
    SkillEntry { label: "TailwindCSS", icon: Icon::TailwindCss },
    SkillEntry { label: "Node.js", icon: Icon::NodeJs },
    SkillEntry { label: "MongoDB", icon: Icon::MongoDb },
    SkillEntry { label: "HTML", icon: Icon::Html5 },
    SkillEntry { label: "CSS", icon: Icon::Css3 },
    SkillEntry { label: "JAVASCIPT", icon: Icon::JavaScript },
    SkillEntry { label: "Databases", icon: Icon::Database },
];

pub static PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Portfolio Website",
        description: "A personal portfolio to showcase my work and skills.",
        tech: &["React", "TailwindCSS", "Framer-motion"],
        image: ImageAsset::Portfolio,
        live_url: "https://adityasharma-puce.vercel.app",
        code_url: "https://github.com/adiityasharma/portfolio-web",
    },
    ProjectEntry {
        title: "E-commerce App",
        description: "A full-stack e-commerce platform with payment integration.",
        tech: &["Node.js", "Express", "MongoDB", "ReactJs"],
        image: ImageAsset::Ecommerce,
        live_url: "https://ecommerce-three-black-47.vercel.app/",
        code_url: "https://github.com/adiityasharma/e-commerce-web",
    },
    ProjectEntry {
        title: "Giphy",
        description: "A fast, fun, and seamless interface for exploring and sharing GIFs from Giphy.",
        tech: &["React", "TailwindCSS"],
        image: ImageAsset::Giphy,
        live_url: "https://giphy-clone-bice-xi.vercel.app/",
        code_url: "https://github.com/adiityasharma/GIPHY-Clone",
    },
];

pub static SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor {
        id: "about",
        title: "About Me",
        body: SectionBody::Text(
            "MERN stack developer skilled in building responsive, dynamic web applications using MongoDB, Express, React, and Node.js. Passionate about creating clean, efficient code and delivering seamless user experiences from front to back.",
        ),
    },
    SectionDescriptor {
        id: "skills",
        title: "Skills",
        body: SectionBody::Skills(&SKILLS),
    },
    SectionDescriptor {
        id: "projects",
        title: "Projects",
        body: SectionBody::Projects(&PROJECTS),
    },
    SectionDescriptor {
        id: "contact",
        title: "Contact",
        body: SectionBody::Text(
            "Email: adityasharma626367@gmail.com\nLinkedIn: /in/adiityasharma\nX: /adityasharma_16",
        ),
    },
];

/// Read-only view over the page content. Section order is display order.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentModel {
    hero: HeroContent,
    sections: Vec<SectionDescriptor>,
}

impl ContentModel {
    pub fn new(hero: HeroContent, sections: Vec<SectionDescriptor>) -> Result<Self, ContentError> {
        let mut seen = FnvHashSet::default();
        for s in &sections {
            if s.id.is_empty() {
                return Err(ContentError::EmptySectionId(s.title.to_string()));
            }
            if !seen.insert(s.id) {
                return Err(ContentError::DuplicateSectionId(s.id.to_string()));
            }
        }
        Ok(Self { hero, sections })
    }

    /// The built-in page: about, skills, projects, contact.
    pub fn portfolio() -> Self {
        Self {
            hero: HERO,
            sections: SECTIONS.to_vec(),
        }
    }

    pub fn hero(&self) -> &HeroContent {
        &self.hero
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Skills of the first skills section, empty if there is none.
    pub fn skills(&self) -> &'static [SkillEntry] {
        self.sections
            .iter()
            .find_map(|s| match s.body {
                SectionBody::Skills(list) => Some(list),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn projects(&self) -> &'static [ProjectEntry] {
        self.sections
            .iter()
            .find_map(|s| match s.body {
                SectionBody::Projects(list) => Some(list),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
