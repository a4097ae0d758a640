//! # Period Record Fetch
//!
//! Materializes a period's transfer and slippage records through the
//! analytics query seam and decodes them into domain types.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::slippage::{SlippageRow, SolverSlippage, SplitSlippages};
use crate::domain::entities::transfer::{Transfer, TransferRow};
use crate::domain::value_objects::AccountingPeriod;
use crate::infrastructure::analytics::{AnalyticsQueryEngine, QueryParameter};
use tracing::info;

fn period_parameters(period: &AccountingPeriod) -> Vec<QueryParameter> {
    vec![
        QueryParameter::date("StartTime", period.start_time()),
        QueryParameter::date("EndTime", period.end_time()),
    ]
}

/// Fetches and splits the solver slippage for an accounting period.
///
/// `raw_sql` is the fully assembled slippage query (see
/// [`slippage_query`](crate::infrastructure::analytics::queries::slippage_query)).
/// The `TxHash` parameter is pinned to `0x`, selecting all transactions.
///
/// # Errors
///
/// Returns an [`ApplicationError`] when the query execution fails, a row
/// does not match the expected shape, or a solver address is malformed.
pub async fn get_period_slippage(
    engine: &dyn AnalyticsQueryEngine,
    period: &AccountingPeriod,
    raw_sql: &str,
) -> ApplicationResult<SplitSlippages> {
    let mut parameters = period_parameters(period);
    parameters.push(QueryParameter::text("TxHash", "0x"));

    let rows = engine.fetch(raw_sql, &parameters).await?;
    info!(period = %period, rows = rows.len(), "fetched period slippage");

    let mut results = SplitSlippages::new();
    for row in rows {
        let row: SlippageRow = serde_json::from_value(row)
            .map_err(|e| ApplicationError::Row(e.to_string()))?;
        results.append(SolverSlippage::from_row(row)?);
    }
    Ok(results)
}

/// Fetches the settlement transfers for an accounting period.
///
/// # Errors
///
/// Returns an [`ApplicationError`] when the query execution fails, a row
/// does not match the expected shape, or a record violates the transfer
/// invariants.
pub async fn get_period_transfers(
    engine: &dyn AnalyticsQueryEngine,
    period: &AccountingPeriod,
    raw_sql: &str,
) -> ApplicationResult<Vec<Transfer>> {
    let parameters = period_parameters(period);
    let rows = engine.fetch(raw_sql, &parameters).await?;
    info!(period = %period, rows = rows.len(), "fetched period transfers");

    rows.into_iter()
        .map(|row| {
            let row: TransferRow = serde_json::from_value(row)
                .map_err(|e| ApplicationError::Row(e.to_string()))?;
            Ok(Transfer::from_row(row)?)
        })
        .collect()
}
