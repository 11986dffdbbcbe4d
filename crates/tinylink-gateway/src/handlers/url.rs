use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, GetUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tinylink_core::{ShortCode, ShortenerError};
use tracing::debug;

pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let original_url = request.original_url.ok_or(ShortenerError::EmptyInput)?;

    let record = state.shortener().shorten(&original_url).await?;

    let response = CreateUrlResponse {
        short_url: record.short_code.to_url(state.base_url()),
        original_url: record.original_url,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_url_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<GetUrlResponse>> {
    let code = match ShortCode::new(short_code.as_str()) {
        Ok(code) => code,
        Err(err) => {
            debug!(short_code = %short_code, error = %err, "malformed short code");
            return Err(AppError::NotFound(short_code));
        }
    };

    match state.shortener().resolve(&code).await? {
        Some(record) => Ok(Json(GetUrlResponse {
            original_url: record.original_url,
        })),
        None => Err(AppError::NotFound(short_code)),
    }
}
