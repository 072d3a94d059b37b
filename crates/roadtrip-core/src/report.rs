use crate::error::ReportError;

/// Turn a finished location POST into the logged result.
///
/// A failed status wins over a failed body read; an unreadable error body is
/// only logged. A successful status with an unreadable body is an error, never
/// an empty result.
pub fn report_outcome(
    ok: bool,
    status: u16,
    status_text: &str,
    body: Result<String, String>,
) -> Result<String, ReportError> {
    if !ok {
        let body = body.unwrap_or_else(|reason| {
            log::warn!("[report] unable to read error body: {}", reason);
            String::new()
        });
        return Err(ReportError::Status {
            status,
            status_text: status_text.to_string(),
            body,
        });
    }
    body.map_err(|reason| ReportError::UnreadableBody { status, reason })
}
