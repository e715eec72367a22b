/*
 * Responsibility
 * - Handler から見える API key の型
 * - 検証 (ストア照合) はここでは行わない。token をそのまま渡すだけ
 */
use std::fmt;

/// `Authorization: ApiKey <token>` の `<token>`
///
/// ヘッダが無い・形式が違う場合は extractor 側で reject 済み
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

/// ヘッダが無い場合は `None` を許す版
///
/// 形式が違うヘッダは `ApiKey` と同じく 400 で reject する
#[derive(Clone, PartialEq, Eq)]
pub struct OptionalApiKey(pub Option<String>);

// token を log に出さない
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

impl fmt::Debug for OptionalApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.0.as_ref().map(|_| "<redacted>");
        f.debug_tuple("OptionalApiKey").field(&shown).finish()
    }
}
