use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    /// Missing and `null` are both reported as an empty input.
    #[serde(default)]
    pub original_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUrlResponse {
    pub original_url: String,
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct GetUrlResponse {
    pub original_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
