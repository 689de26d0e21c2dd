//! HTTP helper shared by the endpoint wrappers.

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub(super) async fn get_text(url: &str) -> Result<String, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("Request to {} failed: {}", url, e))?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {}", e))
}
