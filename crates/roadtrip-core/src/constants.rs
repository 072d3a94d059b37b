use crate::geo::Coordinate;

// Shared map and reporting constants used by the web front-end and the server.

// Initial view
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(48.868297, 2.353764); // Paris, 10e
pub const DEFAULT_ZOOM: u8 = 6;

// Page elements
pub const MAP_ELEMENT_ID: &str = "map";
pub const LOCATE_BUTTON_ID: &str = "btn-locate-me";

// Backend
pub const LOCATION_ENDPOINT: &str = "/location";
pub const LAT_FIELD: &str = "lat";
pub const LNG_FIELD: &str = "lng";

// Messages shown in the info overlay
pub const MSG_GEOLOCATION_UNSUPPORTED: &str = "Error: your browser doesn't support geolocation.";
pub const MSG_GEOLOCATION_FAILED: &str = "Error: the geolocation service failed.";
