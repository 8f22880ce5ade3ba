/// DOM wiring and playback constants for the web frontend.
///
/// Kept free of `web_sys` so host-side tests can include this file directly.
// Element the page is mounted into
pub const APP_ROOT_ID: &str = "app-root";

// Event names
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const MOUSE_ENTER_EVENT: &str = "mouseenter";
pub const MOUSE_LEAVE_EVENT: &str = "mouseleave";
pub const PAGE_HIDE_EVENT: &str = "pagehide";
pub const PAGE_SHOW_EVENT: &str = "pageshow";

// Entrance playback
pub const ENTER_EASING: &str = "ease-out";

// Hover playback; the overshooting curve stands in for a stiff spring
pub const HOVER_DURATION_SEC: f32 = 0.25;
pub const HOVER_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

// Fraction of a revealed node that must be visible before its entrance starts
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[inline]
pub fn hover_transition_css() -> String {
    format!("transform {}s {}", HOVER_DURATION_SEC, HOVER_EASING)
}
