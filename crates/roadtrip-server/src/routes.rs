use crate::templates::{PageData, TemplateEngine};
use actix_files::Files;
use actix_web::{http::StatusCode, web, HttpMessage, HttpRequest, HttpResponse};
use roadtrip_core::{Coordinate, LOCATION_ENDPOINT};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("unsupported content type {0}")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    Invalid(String),
}

impl LocationError {
    fn status(&self) -> StatusCode {
        match self {
            LocationError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            LocationError::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Shared state backing HTTP handlers.
pub struct AppState {
    pub templates: TemplateEngine,
}

pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let static_dir = state.templates.static_dir();
    cfg.app_data(state)
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource(LOCATION_ENDPOINT).route(web::post().to(location)))
        .service(Files::new("/static", static_dir));
}

async fn index(state: web::Data<AppState>) -> HttpResponse {
    let data = PageData {
        title: "index".into(),
        content: "Hello, World!".into(),
    };
    match state.templates.render("index.html", &data) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            log::error!("unable to render index.html: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Accepts `lat`/`lng` as a form or JSON body and echoes them back.
async fn location(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    match decode_location(req.content_type(), &body) {
        Ok(position) => {
            log::info!("[location] {}", position);
            HttpResponse::Accepted().json(position)
        }
        Err(err) => {
            log::warn!("[location] rejected: {err}");
            HttpResponse::build(err.status()).json(json!({ "error": err.to_string() }))
        }
    }
}

/// JSON for `application/json`, urlencoded form for anything else except
/// multipart, which is refused.
pub fn decode_location(content_type: &str, body: &[u8]) -> Result<Coordinate, LocationError> {
    let invalid = |e: &dyn std::fmt::Display| LocationError::Invalid(e.to_string());
    let position: Coordinate = if content_type.eq_ignore_ascii_case("application/json") {
        serde_json::from_slice(body).map_err(|e| invalid(&e))?
    } else if content_type.to_ascii_lowercase().starts_with("multipart/") {
        return Err(LocationError::UnsupportedMediaType(content_type.to_string()));
    } else {
        let text = std::str::from_utf8(body).map_err(|e| invalid(&e))?;
        web::Query::<Coordinate>::from_query(text)
            .map_err(|e| invalid(&e))?
            .into_inner()
    };
    if !position.is_valid() {
        return Err(LocationError::Invalid(format!("{} is not a valid coordinate", position)));
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_form_body() {
        let c = decode_location("application/x-www-form-urlencoded", b"lat=48.868297&lng=2.353764")
            .unwrap();
        assert_eq!(c, Coordinate::new(48.868297, 2.353764));
    }

    #[test]
    fn decodes_json_body() {
        let c = decode_location("application/json", br#"{"lat": -33.5, "lng": 151.25}"#).unwrap();
        assert_eq!(c, Coordinate::new(-33.5, 151.25));
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(decode_location("application/x-www-form-urlencoded", b"lat=1.0").is_err());
        assert!(decode_location("application/json", br#"{"lng": 1.0}"#).is_err());
    }

    #[test]
    fn non_numeric_or_non_finite_is_an_error() {
        assert!(decode_location("", b"lat=north&lng=2").is_err());
        assert!(decode_location("", b"lat=NaN&lng=2").is_err());
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert!(decode_location("", b"lat=91&lng=2").is_err());
        assert!(decode_location("application/json", br#"{"lat": 0, "lng": -180.5}"#).is_err());
        assert!(decode_location("", b"lat=-90&lng=180").is_ok());
    }

    #[test]
    fn multipart_is_unsupported_media_type() {
        let body = b"--b\r\nContent-Disposition: form-data; name=\"lat\"\r\n\r\n1.5\r\n--b--\r\n";
        let err = decode_location("multipart/form-data", body).unwrap_err();
        assert_eq!(err, LocationError::UnsupportedMediaType("multipart/form-data".into()));
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
