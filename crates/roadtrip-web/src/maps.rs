//! Bindings to the host-provided Google Maps JS API (`google.maps`).
//!
//! Only the handful of classes the page touches are declared. Option objects
//! are built as plain JS objects from the core types.

use js_sys::{Object, Reflect};
use roadtrip_core::{Coordinate, MapOptions, Marker as MarkerState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(element: &web::Element, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &Map, position: &JsValue);

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> LatLng;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Map, event: &str, handler: &js_sys::Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = getPosition)]
    pub fn get_position(this: &Marker) -> LatLng;

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &Marker, position: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event: &str, handler: &js_sys::Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new() -> InfoWindow;

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &InfoWindow, position: &JsValue);

    #[wasm_bindgen(method, js_name = setContent)]
    pub fn set_content(this: &InfoWindow, content: &str);

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, map: &Map);
}

impl LatLng {
    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat(), self.lng())
    }
}

#[inline]
fn set(target: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(target, &JsValue::from_str(key), value);
}

/// `{lat, lng}` literal accepted wherever the API takes a `LatLng`.
pub fn lat_lng_literal(position: Coordinate) -> JsValue {
    let obj = Object::new();
    set(&obj, "lat", &JsValue::from_f64(position.lat));
    set(&obj, "lng", &JsValue::from_f64(position.lng));
    obj.into()
}

pub fn map_options(options: &MapOptions) -> JsValue {
    let obj = Object::new();
    set(&obj, "center", &lat_lng_literal(options.center));
    set(&obj, "zoom", &JsValue::from_f64(f64::from(options.zoom)));
    set(
        &obj,
        "fullscreenControl",
        &JsValue::from_bool(options.fullscreen_control),
    );
    set(
        &obj,
        "gestureHandling",
        &JsValue::from_str(options.gesture_handling.as_str()),
    );
    obj.into()
}

pub fn marker_options(map: &Map, marker: &MarkerState) -> JsValue {
    let obj = Object::new();
    set(&obj, "animation", &drop_animation());
    set(&obj, "draggable", &JsValue::from_bool(marker.draggable));
    set(&obj, "position", &lat_lng_literal(marker.position));
    set(&obj, "map", map.as_ref());
    obj.into()
}

// google.maps.Animation.DROP, or undefined (no animation) if the enum is missing.
fn drop_animation() -> JsValue {
    ["google", "maps", "Animation", "DROP"]
        .iter()
        .try_fold(JsValue::from(js_sys::global()), |obj, key| {
            Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined())
        })
        .unwrap_or(JsValue::UNDEFINED)
}

/// Read `latLng` off a `google.maps.MapMouseEvent`.
pub fn event_lat_lng(event: &JsValue) -> Option<Coordinate> {
    let value = Reflect::get(event, &JsValue::from_str("latLng")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into::<LatLng>().to_coordinate())
}
