#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod geolocation;
mod maps;
mod overlay;
mod page;
mod report;

thread_local! {
    // Keeps the page alive for the lifetime of the document.
    static PAGE: RefCell<Option<Rc<page::Page>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("roadtrip-web starting");
    Ok(())
}

/// Callback for the Maps JS loader (`&callback=initMap`). Runs once the
/// `google.maps` namespace exists.
#[wasm_bindgen(js_name = initMap)]
pub fn init_map() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::warn!("[map] initMap called twice; ignoring");
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = page::Page::initialize(&document)?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}
