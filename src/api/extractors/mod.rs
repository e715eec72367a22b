/*
 * Responsibility
 * - handler 向け extractor の re-export
 */
mod api_key;

pub use api_key::{ApiKey, OptionalApiKey};
