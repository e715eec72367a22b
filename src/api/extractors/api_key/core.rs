use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::{AuthError, extract_api_key};

use super::{ApiKey, OptionalApiKey};

/// Handler で API key を受け取るための extractor
/// ヘッダが無ければ 401、形式が違えば 400 を返す (AppError 経由)
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_api_key(&parts.headers) {
            Ok(token) => Ok(ApiKey(token)),
            Err(err) => {
                tracing::debug!(error = %err, path = %parts.uri.path(), "api key rejected");
                Err(err.into())
            }
        }
    }
}

impl<S> FromRequestParts<S> for OptionalApiKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_api_key(&parts.headers) {
            Ok(token) => Ok(OptionalApiKey(Some(token))),
            Err(AuthError::NoAuthHeader) => Ok(OptionalApiKey(None)),
            Err(err) => {
                tracing::debug!(error = %err, path = %parts.uri.path(), "api key rejected");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request, StatusCode, header},
        response::IntoResponse,
    };

    fn parts(authorization: Option<&str>) -> Parts {
        let mut req = Request::builder().uri("/notes");
        if let Some(value) = authorization {
            req = req.header(header::AUTHORIZATION, value);
        }
        req.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn api_key_accepts_valid_header() {
        let mut parts = parts(Some("ApiKey abc123"));
        let ApiKey(key) = ApiKey::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, "abc123");
    }

    #[tokio::test]
    async fn api_key_rejects_missing_header_with_401() {
        let mut parts = parts(None);
        let err = ApiKey::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn api_key_rejects_wrong_scheme_with_400() {
        let mut parts = parts(Some("Bearer abc123"));
        let err = ApiKey::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest {
                code: "MALFORMED_AUTHORIZATION_HEADER",
                ..
            }
        ));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn api_key_rejects_missing_token_with_400() {
        let mut parts = parts(Some("ApiKey"));
        let err = ApiKey::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn optional_allows_missing_header() {
        let mut parts = parts(None);
        let key = OptionalApiKey::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, OptionalApiKey(None));
    }

    #[tokio::test]
    async fn optional_passes_token_through() {
        let mut parts = parts(Some("ApiKey abc123"));
        let key = OptionalApiKey::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, OptionalApiKey(Some("abc123".to_string())));
    }

    #[tokio::test]
    async fn optional_still_rejects_malformed_header() {
        let mut parts = parts(Some("apikey abc123"));
        let err = OptionalApiKey::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
