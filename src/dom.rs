use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Registers `handler` for `event` on `target` and hands the closure back;
/// the caller keeps it alive for as long as the listener should fire.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<Closure<dyn FnMut()>> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    Ok(closure)
}

#[inline]
pub fn remove_listener(target: &web::EventTarget, event: &str, closure: &Closure<dyn FnMut()>) {
    _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
}

/// Viewport size in CSS pixels; 0 on an axis the window cannot report.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (dim(window.inner_width()), dim(window.inner_height()))
}
