/*!
 * API key extractor
 *
 * Responsibility:
 * - `Authorization: ApiKey <token>` の token を handler に提供する
 * - ヘッダ解析は services::auth に閉じ込め、ここは axum との接続と拒否レスポンスだけ
 *
 * Public API:
 * - ApiKey
 * - OptionalApiKey
 */

mod core;
mod types;

pub use types::{ApiKey, OptionalApiKey};
