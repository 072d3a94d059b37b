use crate::error::GeoError;
use crate::geo::Coordinate;
use crate::state::{DragState, MapOptions, Marker};

/// Work the page layer performs on the widget or the network on behalf of
/// the controller.
///
/// Applying `MoveMarker` makes the widget fire its position-changed event,
/// which the page feeds back through [`MarkerController::on_position_changed`].
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// POST the coordinate to the location endpoint.
    Report(Coordinate),
    MoveMarker(Coordinate),
    PanTo(Coordinate),
    /// Open an info window anchored at `at`.
    ShowInfo { at: Coordinate, message: &'static str },
    /// Ask the geolocation provider for the device position.
    RequestLocation,
}

/// Owns the single marker and its drag flag.
///
/// Every handler appends the effects it wants applied to `out` instead of
/// touching the widget itself, so the widget may re-enter the controller
/// while those effects are applied.
pub struct MarkerController {
    pub options: MapOptions,
    marker: Option<Marker>,
    drag: DragState,
}

impl MarkerController {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            marker: None,
            drag: DragState::Idle,
        }
    }

    /// Place the initial marker at the configured center.
    pub fn initialize(&mut self, out: &mut Vec<Effect>) {
        let center = self.options.center;
        log::info!(
            "[map] center=({:.6},{:.6}) zoom={} gestures={}",
            center.lat,
            center.lng,
            self.options.zoom,
            self.options.gesture_handling.as_str()
        );
        self.place_marker(center, out);
    }

    /// Record a freshly created marker and report its position once.
    pub fn place_marker(&mut self, position: Coordinate, out: &mut Vec<Effect>) {
        if self.marker.is_some() {
            log::warn!("[marker] replacing existing marker");
        }
        self.marker = Some(Marker::new(position));
        self.drag = DragState::Idle;
        out.push(Effect::Report(position));
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn marker_position(&self) -> Option<Coordinate> {
        self.marker.map(|m| m.position)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// The widget moved the marker. Suppressed while a drag is in progress.
    pub fn on_position_changed(&mut self, position: Coordinate, out: &mut Vec<Effect>) {
        let Some(marker) = self.marker.as_mut() else {
            log::warn!("[marker] position_changed before placement; ignoring");
            return;
        };
        marker.position = position;
        if self.drag == DragState::Dragging {
            return;
        }
        log::info!("[marker] position_changed {}", position);
        out.push(Effect::Report(position));
    }

    pub fn on_drag_start(&mut self) {
        self.drag = DragState::Dragging;
        log::debug!("[marker] drag start");
    }

    /// End of a drag: clear the flag and force one report of the final position.
    pub fn on_drag_end(&mut self, position: Coordinate, out: &mut Vec<Effect>) {
        self.drag = DragState::Idle;
        let Some(marker) = self.marker.as_mut() else {
            log::warn!("[marker] dragend without a marker; ignoring");
            return;
        };
        marker.position = position;
        log::debug!("[marker] drag end {}", position);
        out.push(Effect::Report(position));
    }

    /// Relocate the marker; the report follows from the position-changed event.
    pub fn on_map_double_click(&mut self, position: Coordinate, out: &mut Vec<Effect>) {
        if self.marker.is_none() {
            log::warn!("[map] dblclick before marker placement; ignoring");
            return;
        }
        out.push(Effect::MoveMarker(position));
    }

    /// "Locate me" was pressed. `geolocation_available` reflects the host,
    /// `center` is the map's current center used to anchor an error overlay.
    pub fn locate_me(
        &mut self,
        geolocation_available: bool,
        center: Coordinate,
        out: &mut Vec<Effect>,
    ) {
        if geolocation_available {
            out.push(Effect::RequestLocation);
        } else {
            self.on_location_error(GeoError::Unsupported, center, out);
        }
    }

    pub fn on_location_found(&mut self, position: Coordinate, out: &mut Vec<Effect>) {
        log::info!("[geo] located {}", position);
        out.push(Effect::PanTo(position));
        out.push(Effect::MoveMarker(position));
    }

    pub fn on_location_error(&mut self, error: GeoError, center: Coordinate, out: &mut Vec<Effect>) {
        log::warn!("[geo] {}", error);
        out.push(Effect::ShowInfo {
            at: center,
            message: error.user_message(),
        });
    }
}

impl Default for MarkerController {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}
