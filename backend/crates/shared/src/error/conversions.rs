//! Error conversions - Rendering of [`AppError`] for HTTP frameworks
//!
//! Every error response in the workspace shares one JSON shape:
//! `{ "error": <code>, "message": <message> }`.

use serde::Serialize;

use super::app_error::AppError;

/// JSON error body written to the client
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    pub message: &'a str,
}

impl AppError {
    /// レスポンスボディを構築
    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            error: self.code(),
            message: self.message(),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_uses_code_and_message() {
        let err = AppError::bad_request("Malformed payload").with_code("MalformedPayload");
        let value = serde_json::to_value(err.body()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": "MalformedPayload",
                "message": "Malformed payload",
            })
        );
    }

    #[test]
    fn test_body_never_contains_source() {
        let err = AppError::internal("generic").with_source(std::io::Error::other("secret detail"));
        let text = serde_json::to_string(&err.body()).unwrap();
        assert!(!text.contains("secret detail"));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_status_and_json() {
        use axum::response::IntoResponse;
        use http_body_util::BodyExt;

        let response = AppError::unprocessable("nope")
            .with_code("OrderNotShippable")
            .into_response();

        assert_eq!(response.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "OrderNotShippable");
        assert_eq!(value["message"], "nope");
    }
}
