use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// The access parameters cannot identify both a database and a user
/// allowed to reach it.
///
/// The message is surfaced to API clients unchanged, so it carries the
/// remediation hints (OAuth tokens, table publication) rather than the
/// name of the missing field.
///
/// # Example
/// ```
/// use psql_access::error::access::AccessDeniedError;
///
/// let err = AccessDeniedError;
/// assert!(err.to_string().starts_with("Incorrect access parameters."));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Incorrect access parameters. If you are accessing via OAuth, please check your tokens are correct. For public users, please ensure your table is published."
)]
pub struct AccessDeniedError;

impl IntoResponse for AccessDeniedError {
    /// Renders `401 Unauthorized` with body `{"error": ["<message>"]}`.
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": [self.to_string()] }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    const MESSAGE: &str = "Incorrect access parameters. \
        If you are accessing via OAuth, please check your tokens are correct. \
        For public users, please ensure your table is published.";

    #[test]
    fn display_is_the_user_facing_message() {
        assert_eq!(AccessDeniedError.to_string(), MESSAGE);
    }

    #[test]
    fn debug_output_contains_struct_name() {
        assert_eq!(format!("{:?}", AccessDeniedError), "AccessDeniedError");
    }

    #[tokio::test]
    async fn into_response_is_401_with_error_array() {
        let res = AccessDeniedError.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v, json!({ "error": [MESSAGE] }));
    }
}
