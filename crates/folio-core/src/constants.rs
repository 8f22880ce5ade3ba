// Shared layout/motion tuning constants used by the web and static frontends.

// Document title shared by every front end
pub const PAGE_TITLE: &str = "Aditya Sharma — Portfolio";

// Parallax
pub const PARALLAX_RANGE: f32 = 20.0; // full offset span across the viewport (±10)
pub const SECTION_WEIGHT_DIVISOR: f32 = 8.0; // section i moves (i+1)/8 of the hero
pub const HERO_WEIGHT: f32 = 1.0;

// Hero entrance
pub const HERO_ENTER_SCALE: f32 = 0.9;
pub const HERO_ENTER_DURATION_SEC: f32 = 0.8;

// Section entrance (revealed once when scrolled into view)
pub const SECTION_ENTER_OFFSET_Y: f32 = 40.0; // px below resting position
pub const SECTION_ENTER_DURATION_SEC: f32 = 0.6;
pub const SECTION_STAGGER_SEC: f32 = 0.1; // delay per section index

// Hover effects
pub const SKILL_HOVER_SCALE: f32 = 1.2;
pub const SKILL_HOVER_ROTATE_DEG: f32 = 5.0;
pub const PROJECT_HOVER_SCALE: f32 = 1.03;

// Outbound links open in a new browsing context without an opener reference
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";
