//! Shared HTTP response helpers.

use crate::error::ModelError;

/// Map a non-success status to [`ModelError::Api`] with the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ModelError> {
    if !resp.status().is_success() {
        return Err(ModelError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
