use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;

/// Map a rejected request input. `code` names the offending parameter's error
/// (`invalid_sort`, `invalid_page`); an unusable id reads as an unknown product.
pub fn domain_error_to_response(code: &'static str, err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidId(_) => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        other => json_error(StatusCode::BAD_REQUEST, code, other.to_string()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn render_error_to_response(err: minijinja::Error) -> axum::response::Response {
    tracing::error!(error = %err, "template rendering failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "render_error", err.to_string())
}
