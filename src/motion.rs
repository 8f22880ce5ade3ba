//! Plays back declarative motion with CSS transitions.
//!
//! Entrances are prepared while nodes are still detached (initial state applied
//! inline) and started by [`MotionPlayer::flush`] once they are in the document.
//! Reveal-on-visible entrances wait for an `IntersectionObserver` hit and fire once.

use crate::constants::{
    hover_transition_css, ENTER_EASING, MOUSE_ENTER_EVENT, MOUSE_LEAVE_EVENT, REVEAL_THRESHOLD,
};
use crate::dom;
use folio_core::{HoverEffect, Transition, VisualState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type RevealCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;
type Revealing = Rc<RefCell<Vec<(web::HtmlElement, Transition)>>>;

#[derive(Default)]
pub struct MotionPlayer {
    pending: Vec<(web::HtmlElement, Transition)>,
    revealing: Revealing,
    observer: Option<(web::IntersectionObserver, RevealCallback)>,
    hover_listeners: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut()>)>,
}

impl MotionPlayer {
    /// Applies the initial state now; playback starts at the next `flush`.
    pub fn prepare_enter(&mut self, el: &web::HtmlElement, t: Transition) -> anyhow::Result<()> {
        apply_state(&el.style(), &t.initial)?;
        self.pending.push((el.clone(), t));
        Ok(())
    }

    pub fn attach_hover(&mut self, el: &web::HtmlElement, h: HoverEffect) -> anyhow::Result<()> {
        let enter_el = el.clone();
        let on_enter = dom::add_listener(el, MOUSE_ENTER_EVENT, move || {
            let style = enter_el.style();
            _ = style.set_property("transition", &hover_transition_css());
            _ = style.set_property("transform", &h.css_transform());
        })?;
        let leave_el = el.clone();
        let on_leave = dom::add_listener(el, MOUSE_LEAVE_EVENT, move || {
            _ = leave_el.style().remove_property("transform");
        })?;
        let target: web::EventTarget = el.clone().into();
        self.hover_listeners
            .push((target.clone(), MOUSE_ENTER_EVENT, on_enter));
        self.hover_listeners.push((target, MOUSE_LEAVE_EVENT, on_leave));
        Ok(())
    }

    /// Starts every prepared entrance. Call after the nodes are attached.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        let pending = std::mem::take(&mut self.pending);
        for (el, t) in pending {
            if t.trigger_on_visible {
                self.observe(el, t)?;
            } else {
                play(&el, &t)?;
            }
        }
        Ok(())
    }

    fn observe(&mut self, el: web::HtmlElement, t: Transition) -> anyhow::Result<()> {
        if self.observer.is_none() {
            self.observer = Some(self.build_observer()?);
        }
        if let Some((observer, _)) = &self.observer {
            observer.observe(&el);
            self.revealing.borrow_mut().push((el, t));
        }
        Ok(())
    }

    fn build_observer(&self) -> anyhow::Result<(web::IntersectionObserver, RevealCallback)> {
        let revealing = self.revealing.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let found = {
                        let mut r = revealing.borrow_mut();
                        r.iter()
                            .position(|(el, _)| el.is_same_node(Some(&*target)))
                            .map(|i| r.swap_remove(i))
                    };
                    if let Some((el, t)) = found {
                        if let Err(e) = play(&el, &t) {
                            log::warn!("[motion] reveal failed: {:?}", e);
                        }
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(dom::js_err)?;
        Ok((observer, callback))
    }

    /// Drops hover listeners and pending reveals registered on `subtree` or
    /// its descendants. Called when a subtree is replaced in the document.
    pub fn release(&mut self, subtree: &web::Node) {
        self.hover_listeners.retain(|(target, event, closure)| {
            let inside = target
                .dyn_ref::<web::Node>()
                .is_some_and(|n| subtree.contains(Some(n)));
            if inside {
                dom::remove_listener(target, event, closure);
                false
            } else {
                true
            }
        });
        let observer = self.observer.as_ref().map(|(o, _)| o);
        self.revealing.borrow_mut().retain(|(el, _)| {
            if subtree.contains(Some(el)) {
                if let Some(observer) = observer {
                    observer.unobserve(el);
                }
                false
            } else {
                true
            }
        });
        self.pending.retain(|(el, _)| !subtree.contains(Some(el)));
    }

    /// Stops observers and removes hover listeners.
    pub fn clear(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        for (target, event, closure) in self.hover_listeners.drain(..) {
            dom::remove_listener(&target, event, &closure);
        }
        self.pending.clear();
        self.revealing.borrow_mut().clear();
    }
}

fn play(el: &web::HtmlElement, t: &Transition) -> anyhow::Result<()> {
    // layout read commits the initial state before the transition is set
    _ = el.offset_width();
    let style = el.style();
    style
        .set_property("transition", &t.css_transition(ENTER_EASING))
        .map_err(dom::js_err)?;
    apply_state(&style, &t.target)
}

/// The rest state is expressed by clearing inline overrides so stylesheet
/// hover rules keep working after the entrance.
fn apply_state(style: &web::CssStyleDeclaration, state: &VisualState) -> anyhow::Result<()> {
    if state.is_rest() {
        style.remove_property("opacity").map_err(dom::js_err)?;
        style.remove_property("transform").map_err(dom::js_err)?;
    } else {
        style
            .set_property("opacity", &state.opacity.to_string())
            .map_err(dom::js_err)?;
        style
            .set_property("transform", &state.css_transform())
            .map_err(dom::js_err)?;
    }
    Ok(())
}
