/*
 * Responsibility
 * - 認証まわりの service (HTTP / axum の extractor からはここを使う)
 */
pub mod api_key;

pub use api_key::{API_KEY_SCHEME, AuthError, extract_api_key};
