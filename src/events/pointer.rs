use crate::constants::POINTER_MOVE_EVENT;
use crate::dom;
use folio_core::{MoveHandler, PointerSample, PointerSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer movement anywhere over the window.
#[derive(Clone)]
pub struct WindowPointerSource {
    window: web::Window,
}

impl WindowPointerSource {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

/// Live `pointermove` subscription; removed from the window on drop.
pub struct PointerMoveListener {
    window: web::Window,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl Drop for PointerMoveListener {
    fn drop(&mut self) {
        _ = self.window.remove_event_listener_with_callback(
            POINTER_MOVE_EVENT,
            self.closure.as_ref().unchecked_ref(),
        );
        log::debug!("[pointer] window listener removed");
    }
}

impl PointerSource for WindowPointerSource {
    type Listener = PointerMoveListener;

    fn on_move(&self, mut handler: MoveHandler) -> anyhow::Result<PointerMoveListener> {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (w, h) = dom::viewport_size(&window);
            handler(PointerSample::new(ev.client_x() as f32, ev.client_y() as f32, w, h));
        }) as Box<dyn FnMut(_)>);

        self.window
            .add_event_listener_with_callback(POINTER_MOVE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;

        Ok(PointerMoveListener {
            window: self.window.clone(),
            closure,
        })
    }
}
