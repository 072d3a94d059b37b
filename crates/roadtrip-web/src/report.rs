use gloo_net::http::Request;
use roadtrip_core::{report_outcome, Coordinate, LAT_FIELD, LNG_FIELD, LOCATION_ENDPOINT};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Fire-and-forget POST of the marker position. The outcome is only logged;
/// earlier requests still in flight are left alone.
pub fn report_position(position: Coordinate) {
    spawn_local(async move {
        match post_location(position).await {
            Ok(body) => log::info!("[report] result {}", body),
            Err(e) => log::error!("[report] error {:?}", e),
        }
    });
}

async fn post_location(position: Coordinate) -> anyhow::Result<String> {
    let params = web::UrlSearchParams::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    params.append(LAT_FIELD, &position.lat.to_string());
    params.append(LNG_FIELD, &position.lng.to_string());

    // A URLSearchParams body is sent as application/x-www-form-urlencoded.
    let response = Request::post(LOCATION_ENDPOINT)
        .body(params)
        .map_err(|e| anyhow::anyhow!("{}", e))?
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let body = response.text().await.map_err(|e| e.to_string());
    Ok(report_outcome(
        response.ok(),
        response.status(),
        &response.status_text(),
        body,
    )?)
}
