//! # Slippage Query Assembly
//!
//! Splices the trusted-token allowlist into the slippage sub-query and
//! appends the selecting statement. The sub-query template itself is loaded
//! by the caller; no SQL is parsed here, only spliced under two shape
//! checks carried over from the original tooling.

use std::fmt;
use thiserror::Error;

/// Which slippage result table to select from.
///
/// The sub-query defines both; per-transaction results exist for
/// investigation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    /// Per-transaction breakdown.
    PerTx,
    /// Totals per solver.
    Total,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerTx => write!(f, "results_per_tx"),
            Self::Total => write!(f, "results"),
        }
    }
}

/// Failure while assembling the slippage query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The trusted token list was empty.
    #[error("Cannot build query for empty token list")]
    EmptyTokenList,

    /// The sub-query template does not open with a `with` clause.
    #[error("Type {0} does not start with 'with'!")]
    MissingWithClause(String),
}

/// Builds the allowlisted-token values table from lowercase hex addresses.
///
/// Each `0x...` address is rendered as a Postgres bytea literal by dropping
/// the leading `0`.
///
/// # Errors
///
/// Returns [`QueryError::EmptyTokenList`] when no addresses are given.
pub fn allowed_token_list_query(token_list: &[String]) -> Result<String, QueryError> {
    if token_list.is_empty() {
        return Err(QueryError::EmptyTokenList);
    }

    let values = token_list
        .iter()
        .map(|address| {
            let escaped = address.strip_prefix('0').unwrap_or(address);
            format!("('\\{escaped}' :: bytea)")
        })
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!(
        "allow_listed_tokens as (select * from (VALUES {values}) AS t (token)),"
    ))
}

/// Prepends a table definition immediately after the opening `with`.
///
/// # Errors
///
/// Returns [`QueryError::MissingWithClause`] when the query does not start
/// with `with` (case-insensitive).
pub fn prepend_to_sub_query(query: &str, table_to_add: &str) -> Result<String, QueryError> {
    let head = query.get(..4).unwrap_or(query);
    if !head.eq_ignore_ascii_case("with") {
        return Err(QueryError::MissingWithClause(query.to_string()));
    }
    let rest = query.get(5..).unwrap_or("");
    Ok(format!("{head}\n{table_to_add}\n{rest}"))
}

/// Assembles the full slippage query from the sub-query template, the
/// trusted token list, and the result table to select from.
///
/// # Errors
///
/// Propagates the shape failures of [`allowed_token_list_query`] and
/// [`prepend_to_sub_query`].
pub fn slippage_query(
    sub_query: &str,
    token_list: &[String],
    query_type: QueryType,
) -> Result<String, QueryError> {
    let token_table = allowed_token_list_query(token_list)?;
    let with_tokens = prepend_to_sub_query(sub_query, &token_table)?;
    let select_statement = format!(
        "select *, \n    usd_value / (select price from eth_price) * 10 ^ 18 as eth_slippage_wei \nfrom {query_type}"
    );
    Ok(format!("{with_tokens}\n{select_statement}"))
}
