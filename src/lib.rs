/*
 * Responsibility
 * - crate の公開インターフェース
 *   - services::auth::extract_api_key: `Authorization: ApiKey <token>` の解析 (HTTP status 非依存)
 *   - api::extractors::{ApiKey, OptionalApiKey}: axum handler 向け extractor
 *   - error::AppError: AuthError → 401 / 400 の変換
 */
pub mod api;
pub mod error;
pub mod services;

pub use api::extractors::{ApiKey, OptionalApiKey};
pub use error::AppError;
pub use services::auth::{API_KEY_SCHEME, AuthError, extract_api_key};
