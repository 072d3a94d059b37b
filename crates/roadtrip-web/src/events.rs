use crate::page::Page;
use crate::{dom, geolocation, maps};
use roadtrip_core::LOCATE_BUTTON_ID;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// dragstart / dragend / position_changed on the marker.
pub fn wire_marker_listeners(page: &Rc<Page>) {
    let p = page.clone();
    let drag_start = Closure::wrap(Box::new(move || {
        p.controller.borrow_mut().on_drag_start();
    }) as Box<dyn FnMut()>);
    page.marker
        .add_listener("dragstart", drag_start.as_ref().unchecked_ref());
    drag_start.forget();

    let p = page.clone();
    let drag_end = Closure::wrap(Box::new(move || {
        let position = p.marker_position();
        p.dispatch(|ctl, out| ctl.on_drag_end(position, out));
    }) as Box<dyn FnMut()>);
    page.marker
        .add_listener("dragend", drag_end.as_ref().unchecked_ref());
    drag_end.forget();

    let p = page.clone();
    let position_changed = Closure::wrap(Box::new(move || {
        let position = p.marker_position();
        p.dispatch(|ctl, out| ctl.on_position_changed(position, out));
    }) as Box<dyn FnMut()>);
    page.marker
        .add_listener("position_changed", position_changed.as_ref().unchecked_ref());
    position_changed.forget();
}

pub fn wire_map_double_click(page: &Rc<Page>) {
    let p = page.clone();
    let closure = Closure::wrap(Box::new(move |ev: JsValue| {
        match maps::event_lat_lng(&ev) {
            Some(position) => p.dispatch(|ctl, out| ctl.on_map_double_click(position, out)),
            None => log::warn!("[map] dblclick without latLng"),
        }
    }) as Box<dyn FnMut(JsValue)>);
    page.map
        .add_listener("dblclick", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_locate_button(document: &web::Document, page: &Rc<Page>) -> bool {
    let p = page.clone();
    dom::add_click_listener(document, LOCATE_BUTTON_ID, move || {
        let available = geolocation::is_available();
        let center = p.map_center();
        log::info!("[geo] locate requested (available={})", available);
        p.dispatch(|ctl, out| ctl.locate_me(available, center, out));
    })
}
