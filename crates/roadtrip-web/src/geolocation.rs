use roadtrip_core::{Coordinate, GeoError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whether the browser exposes `navigator.geolocation` at all.
pub fn is_available() -> bool {
    web::window()
        .and_then(|w| js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("geolocation")).ok())
        .map(|g| !g.is_undefined() && !g.is_null())
        .unwrap_or(false)
}

/// Ask for the device position once. `on_result` runs exactly once, from
/// whichever browser callback fires.
pub fn get_current_position(on_result: impl FnOnce(Result<Coordinate, GeoError>) + 'static) {
    let geolocation = match web::window().map(|w| w.navigator().geolocation()) {
        Some(Ok(g)) => g,
        _ => {
            on_result(Err(GeoError::Unsupported));
            return;
        }
    };

    let slot = Rc::new(RefCell::new(Some(on_result)));

    let slot_ok = slot.clone();
    let success = Closure::once_into_js(move |position: web::GeolocationPosition| {
        let coords = position.coords();
        let found = Coordinate::new(coords.latitude(), coords.longitude());
        let callback = slot_ok.borrow_mut().take();
        if let Some(callback) = callback {
            callback(Ok(found));
        }
    });

    let slot_err = slot.clone();
    let failure = Closure::once_into_js(move |err: web::GeolocationPositionError| {
        log::warn!("[geo] code={} message={:?}", err.code(), err.message());
        let callback = slot_err.borrow_mut().take();
        if let Some(callback) = callback {
            callback(Err(GeoError::ServiceFailed {
                code: err.code(),
                message: err.message(),
            }));
        }
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
    ) {
        log::error!("[geo] getCurrentPosition threw: {:?}", e);
        let callback = slot.borrow_mut().take();
        if let Some(callback) = callback {
            callback(Err(GeoError::ServiceFailed {
                code: 0,
                message: format!("{:?}", e),
            }));
        }
    }
}
