/*
 * Responsibility
 * - Authorization ヘッダから API key を取り出す (`Authorization: ApiKey <token>`)
 * - 失敗は NoAuthHeader / MalformedHeader の 2 種類だけに分類する
 * - 副作用なし (I/O / logging / cache なし)
 * - HTTP status への変換は呼び出し側 (AppError) の責務
 *
 * Notes
 * - scheme は大文字小文字を区別する (`apikey` / `APIKEY` は MalformedHeader)
 * - token の中身 (長さ・文字種) は検証しない。空白を含む token は非対応
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// `Authorization` ヘッダで受け付ける唯一の scheme
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// ヘッダが無い、または値が空
    #[error("no authorization header included")]
    NoAuthHeader,
    /// ヘッダはあるが `ApiKey <token>` の形になっていない
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// `Authorization: ApiKey <token>` の `<token>` をそのまま返す。
///
/// ヘッダ名の照合は `HeaderMap` 側で大文字小文字を無視して行われる。
/// 同名ヘッダが複数ある場合は最初の値だけを見る。
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::NoAuthHeader)?;

    // visible ASCII 以外を含む値はこの形式として解釈できない
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(token)) => Ok(token.to_string()),
        _ => Err(AuthError::MalformedHeader),
    }
}
