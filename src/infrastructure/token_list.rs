//! Trusted token list fetch.
//!
//! The allowlist of tokens eligible for buffer trading is hosted as a JSON
//! document; only its addresses matter here.

use crate::infrastructure::error::ApiResult;
use crate::infrastructure::http::HttpClient;
use serde::Deserialize;
use tracing::debug;

/// Default location of the hosted allowlist.
pub const HOSTED_TRUSTED_TOKEN_LIST_URL: &str =
    "https://raw.githubusercontent.com/gnosis/cow-dex-solver/main/data/token_list_for_buffer_trading.json";

#[derive(Debug, Deserialize)]
struct TokenListFile {
    tokens: Vec<TokenEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenEntry {
    address: String,
}

/// Fetches the trusted token addresses, lowercased.
///
/// # Errors
///
/// Returns an [`ApiError`](crate::infrastructure::error::ApiError) when the
/// list cannot be fetched or does not match the expected shape.
pub async fn fetch_trusted_tokens(client: &HttpClient, url: &str) -> ApiResult<Vec<String>> {
    let list: TokenListFile = client.get(url).await?;
    debug!(count = list.tokens.len(), "fetched trusted token list");
    Ok(list
        .tokens
        .into_iter()
        .map(|token| token.address.to_lowercase())
        .collect())
}
