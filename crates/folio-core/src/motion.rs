//! Declarative motion attached to view nodes.
//!
//! These values only describe *what* should animate; the host decides how to
//! play them back (CSS transitions on the web, nothing in a static snapshot).

/// Visual properties an entrance transition interpolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub scale: f32,
    /// Vertical displacement in CSS pixels.
    pub translate_y: f32,
}

impl VisualState {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        translate_y: 0.0,
    };

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    pub fn css_transform(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub initial: VisualState,
    pub target: VisualState,
    pub duration_sec: f32,
    pub delay_sec: Option<f32>,
    /// Start once the node first scrolls into view instead of on mount.
    pub trigger_on_visible: bool,
}

impl Transition {
    pub fn enter(initial: VisualState, duration_sec: f32) -> Self {
        Self {
            initial,
            target: VisualState::REST,
            duration_sec,
            delay_sec: None,
            trigger_on_visible: false,
        }
    }

    pub fn with_delay(mut self, delay_sec: f32) -> Self {
        self.delay_sec = (delay_sec > 0.0).then_some(delay_sec);
        self
    }

    pub fn on_visible(mut self) -> Self {
        self.trigger_on_visible = true;
        self
    }

    /// CSS `transition` shorthand covering the animated properties.
    pub fn css_transition(&self, easing: &str) -> String {
        let delay = self.delay_sec.unwrap_or(0.0);
        format!(
            "opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s",
            d = self.duration_sec,
            e = easing,
            delay = delay
        )
    }
}

/// Transform applied while the pointer hovers a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEffect {
    pub scale: f32,
    pub rotate_deg: f32,
}

impl HoverEffect {
    pub fn scale(scale: f32) -> Self {
        Self {
            scale,
            rotate_deg: 0.0,
        }
    }

    pub fn css_transform(&self) -> String {
        if self.rotate_deg == 0.0 {
            format!("scale({})", self.scale)
        } else {
            format!("scale({}) rotate({}deg)", self.scale, self.rotate_deg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_is_dropped() {
        let t = Transition::enter(VisualState::REST, 0.6).with_delay(0.0);
        assert_eq!(t.delay_sec, None);
        let t = t.with_delay(0.2);
        assert_eq!(t.delay_sec, Some(0.2));
    }

    #[test]
    fn css_transition_lists_both_properties() {
        let t = Transition::enter(VisualState::REST, 0.5).with_delay(0.25);
        assert_eq!(
            t.css_transition("ease-out"),
            "opacity 0.5s ease-out 0.25s, transform 0.5s ease-out 0.25s"
        );
    }

    #[test]
    fn hover_transform_omits_zero_rotation() {
        assert_eq!(HoverEffect::scale(1.03).css_transform(), "scale(1.03)");
        let h = HoverEffect {
            scale: 1.2,
            rotate_deg: 5.0,
        };
        assert_eq!(h.css_transform(), "scale(1.2) rotate(5deg)");
    }
}
