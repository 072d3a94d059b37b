use crate::constants::{MSG_GEOLOCATION_FAILED, MSG_GEOLOCATION_UNSUPPORTED};
use thiserror::Error;

/// Why a "locate me" request produced no position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeoError {
    /// The host has no geolocation capability at all.
    #[error("geolocation is not supported")]
    Unsupported,
    /// The capability exists but the request failed (denied, timeout, ...).
    #[error("geolocation service failed (code {code}): {message}")]
    ServiceFailed { code: u16, message: String },
}

impl GeoError {
    /// Text shown to the user in the info overlay.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Unsupported => MSG_GEOLOCATION_UNSUPPORTED,
            GeoError::ServiceFailed { .. } => MSG_GEOLOCATION_FAILED,
        }
    }
}

/// Why a position report did not come back with a usable result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("HTTP {status} {status_text}: {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("HTTP {status} but the body could not be read: {reason}")]
    UnreadableBody { status: u16, reason: String },
}
