use crate::routes::AppState;
use actix_web::web;

/// Clear template and static URL caches on every SIGHUP.
#[cfg(unix)]
pub fn spawn_hup_listener(state: web::Data<AppState>) {
    use tokio::signal::unix::{signal, SignalKind};

    actix_web::rt::spawn(async move {
        let mut hup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                log::error!("unable to listen for SIGHUP: {e}");
                return;
            }
        };
        while hup.recv().await.is_some() {
            log::info!("SIGHUP received");
            state.templates.clear_cache();
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_hup_listener(_state: web::Data<AppState>) {
    log::debug!("SIGHUP cache reset unavailable on this platform");
}
