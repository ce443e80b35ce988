//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use radarweb_common::{error::RadarError, protocol::ErrorBody};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RadarError);

impl From<RadarError> for AppError {
    fn from(err: RadarError) -> Self {
        AppError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(RadarError::Database(err.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // レスポンスにはexternal_message()のみを載せ、詳細はログに残す
        let status = match &self.0 {
            RadarError::Validation(_) => StatusCode::BAD_REQUEST,
            RadarError::WebsiteNotFound(_) => StatusCode::NOT_FOUND,
            RadarError::Duplicate(_) => StatusCode::CONFLICT,
            RadarError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RadarError::Http(_) => StatusCode::BAD_GATEWAY,
            RadarError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorBody {
            error: self.0.external_message(),
            code: self.0.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
