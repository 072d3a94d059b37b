use crate::maps::{self, InfoWindow, Map};
use roadtrip_core::Coordinate;

/// Open a passive info window on `map` anchored at `at`.
#[inline]
pub fn show_info(map: &Map, at: Coordinate, message: &str) {
    let info = InfoWindow::new();
    info.set_position(&maps::lat_lng_literal(at));
    info.set_content(message);
    info.open(map);
}
