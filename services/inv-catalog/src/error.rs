//! API 错误响应

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inv_errors::AppError;
use serde::Serialize;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// HTTP 层错误：状态码 + 对外文案
///
/// 对外文案与底层错误分离，数据库细节只进日志。
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(err: &AppError, message: impl Into<String>) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
