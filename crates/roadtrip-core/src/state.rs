//! View-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! turns `MapOptions` into the options object handed to the map widget and
//! consults `DragState` through the controller.

use crate::constants::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::geo::Coordinate;

/// How the widget treats scroll and touch gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureHandling {
    /// Pan/zoom only with an explicit gesture (ctrl+scroll, two fingers).
    #[default]
    Cooperative,
}

impl GestureHandling {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureHandling::Cooperative => "cooperative",
        }
    }
}

/// Initial map view configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: u8,
    pub fullscreen_control: bool,
    pub gesture_handling: GestureHandling,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            fullscreen_control: false,
            gesture_handling: GestureHandling::Cooperative,
        }
    }
}

/// Drag-in-progress flag of the marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// The single marker as last seen by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Coordinate,
    pub draggable: bool,
}

impl Marker {
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            draggable: true,
        }
    }
}
