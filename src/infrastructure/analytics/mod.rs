//! # Analytics Query Seam
//!
//! Trait boundary to the external analytics query engine that materializes
//! transfer and slippage records. The engine's transport, credentials, and
//! SQL templates are external collaborators; only the parameter shapes and
//! the result-row contract live here.

pub mod queries;

use crate::infrastructure::error::ApiResult;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp format for datetime query parameters.
pub const PARAMETER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of a query parameter, as understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// A timestamp parameter.
    Datetime,
    /// A free-form text parameter.
    Text,
}

/// A named parameter attached to a query execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    /// Parameter name referenced by the query.
    pub key: String,
    /// Parameter kind.
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    /// Rendered parameter value.
    pub value: String,
}

impl QueryParameter {
    /// Creates a datetime parameter.
    #[must_use]
    pub fn date(key: impl Into<String>, value: NaiveDateTime) -> Self {
        Self {
            key: key.into(),
            kind: ParameterKind::Datetime,
            value: value.format(PARAMETER_TIME_FORMAT).to_string(),
        }
    }

    /// Creates a text parameter.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: ParameterKind::Text,
            value: value.into(),
        }
    }
}

/// Executes raw queries against the analytics engine and returns result
/// rows as loosely-typed JSON objects.
///
/// Implementations own all transport concerns. Row decoding into domain
/// records happens in the application services.
#[async_trait]
pub trait AnalyticsQueryEngine: Send + Sync {
    /// Executes `raw_sql` with the given parameters and returns all rows.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`](crate::infrastructure::error::ApiError) on
    /// any transport or execution failure.
    async fn fetch(
        &self,
        raw_sql: &str,
        parameters: &[QueryParameter],
    ) -> ApiResult<Vec<serde_json::Value>>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_parameter_renders_fixed_format() {
        let instant = NaiveDate::from_ymd_opt(2022, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let param = QueryParameter::date("StartTime", instant);
        assert_eq!(param.value, "2022-01-01 00:00:00");
        assert_eq!(param.kind, ParameterKind::Datetime);
    }

    #[test]
    fn parameters_serialize_with_wire_names() {
        let param = QueryParameter::text("TxHash", "0x");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"key": "TxHash", "type": "text", "value": "0x"})
        );
    }
}
