use crate::{events, geolocation, maps, overlay, report};
use roadtrip_core::{Coordinate, Effect, MapOptions, Marker, MarkerController, MAP_ELEMENT_ID};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page keeps alive: the controller plus the widget handles it
/// drives. Built once from the Maps loader callback.
pub struct Page {
    pub controller: RefCell<MarkerController>,
    pub map: maps::Map,
    pub marker: maps::Marker,
}

impl Page {
    pub fn initialize(document: &web::Document) -> anyhow::Result<Rc<Page>> {
        let element = document
            .get_element_by_id(MAP_ELEMENT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", MAP_ELEMENT_ID))?;

        let options = MapOptions::default();
        let map = maps::Map::new(&element, &maps::map_options(&options));
        let marker = maps::Marker::new(&maps::marker_options(&map, &Marker::new(options.center)));

        let page = Rc::new(Page {
            controller: RefCell::new(MarkerController::new(options)),
            map,
            marker,
        });

        events::wire_map_double_click(&page);
        if !events::wire_locate_button(document, &page) {
            log::warn!("[map] locate button missing; locate disabled");
        }
        events::wire_marker_listeners(&page);
        page.dispatch(|ctl, out| ctl.initialize(out));
        Ok(page)
    }

    pub fn map_center(&self) -> Coordinate {
        self.map.get_center().to_coordinate()
    }

    pub fn marker_position(&self) -> Coordinate {
        self.marker.get_position().to_coordinate()
    }

    /// Run one controller handler, then apply its effects with the controller
    /// released; moving the marker re-enters through position_changed.
    pub fn dispatch(self: &Rc<Self>, handler: impl FnOnce(&mut MarkerController, &mut Vec<Effect>)) {
        let mut out = Vec::new();
        handler(&mut self.controller.borrow_mut(), &mut out);
        self.apply(out);
    }

    fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Report(position) => report::report_position(position),
                Effect::MoveMarker(position) => {
                    self.marker.set_position(&maps::lat_lng_literal(position))
                }
                Effect::PanTo(position) => self.map.pan_to(&maps::lat_lng_literal(position)),
                Effect::ShowInfo { at, message } => overlay::show_info(&self.map, at, message),
                Effect::RequestLocation => {
                    let page = Rc::clone(self);
                    geolocation::get_current_position(move |result| match result {
                        Ok(found) => page.dispatch(|ctl, out| ctl.on_location_found(found, out)),
                        Err(err) => {
                            let center = page.map_center();
                            page.dispatch(|ctl, out| ctl.on_location_error(err, center, out));
                        }
                    });
                }
            }
        }
    }
}
