#![cfg(target_arch = "wasm32")]
use folio_core::{ContentModel, MountedPage, PageComposer};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod host;
mod motion;

use constants::{APP_ROOT_ID, PAGE_HIDE_EVENT, PAGE_SHOW_EVENT};
use folio_core::constants::PAGE_TITLE;

type LivePage = MountedPage<events::WindowPointerSource, host::DomHost>;

thread_local! {
    // The page lives as long as the document; pagehide tears it down.
    static PAGE: RefCell<Option<LivePage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document.set_title(PAGE_TITLE);

    mount_page(&window, &document)?;
    wire_page_lifecycle(&window);
    Ok(())
}

fn mount_page(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        return Ok(());
    }
    let root = document
        .get_element_by_id(APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_ROOT_ID))?;

    let host = host::DomHost::new(document.clone(), root);
    let source = events::WindowPointerSource::new(window.clone());
    let page = PageComposer::new(ContentModel::portfolio(), host).mount(&source)?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

fn unmount_page() {
    // take first so the page drops outside the thread-local borrow
    let page = PAGE.with(|p| p.borrow_mut().take());
    drop(page);
}

fn wire_page_lifecycle(window: &web::Window) {
    let on_hide = Closure::wrap(Box::new(move || {
        unmount_page();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(PAGE_HIDE_EVENT, on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    // back/forward cache restores the document without re-running start()
    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if !ev.persisted() {
            return;
        }
        let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
            return;
        };
        if let Err(e) = mount_page(&window, &document) {
            log::error!("remount error: {:?}", e);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback(PAGE_SHOW_EVENT, on_show.as_ref().unchecked_ref());
    on_show.forget();
}
