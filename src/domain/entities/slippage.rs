//! # Solver Slippage
//!
//! Solver-reported signed corrections to settlement transfers, reconciled
//! after the fact for one accounting period.

use crate::domain::errors::ValidationResult;
use crate::domain::value_objects::Address;
use serde::Deserialize;
use std::fmt;

/// Wei per whole token of the native asset.
pub const WEI_PER_TOKEN: f64 = 1e18;

/// A single signed slippage adjustment attributed to one solver.
///
/// Ephemeral: produced per reconciliation record and consumed once by
/// [`Transfer::apply_slippage`](crate::domain::entities::transfer::Transfer::apply_slippage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverSlippage {
    solver_name: String,
    solver_address: Address,
    amount_wei: i128,
}

impl SolverSlippage {
    /// Creates a slippage record.
    #[must_use]
    pub fn new(solver_name: impl Into<String>, solver_address: Address, amount_wei: i128) -> Self {
        Self {
            solver_name: solver_name.into(),
            solver_address,
            amount_wei,
        }
    }

    /// Decodes an analytics result row.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::domain::errors::ValidationError)
    /// when the solver address is malformed.
    pub fn from_row(row: SlippageRow) -> ValidationResult<Self> {
        Ok(Self {
            solver_address: Address::new(&row.solver_address)?,
            solver_name: row.solver_name,
            amount_wei: row.eth_slippage_wei,
        })
    }

    /// Returns the solver's display name.
    #[inline]
    #[must_use]
    pub fn solver_name(&self) -> &str {
        &self.solver_name
    }

    /// Returns the solver's settlement address.
    #[inline]
    #[must_use]
    pub fn solver_address(&self) -> Address {
        self.solver_address
    }

    /// Returns the signed adjustment in wei.
    #[inline]
    #[must_use]
    pub fn amount_wei(&self) -> i128 {
        self.amount_wei
    }

    /// Returns the adjustment converted to whole tokens.
    #[must_use]
    pub fn amount_tokens(&self) -> f64 {
        self.amount_wei as f64 / WEI_PER_TOKEN
    }
}

impl fmt::Display for SolverSlippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wei slippage for {} ({})",
            self.amount_wei, self.solver_name, self.solver_address
        )
    }
}

/// Raw analytics row for a slippage record.
#[derive(Debug, Clone, Deserialize)]
pub struct SlippageRow {
    /// Solver settlement address, hex-encoded.
    pub solver_address: String,
    /// Solver display name.
    pub solver_name: String,
    /// Signed wei adjustment; arrives as a string or a number.
    #[serde(deserialize_with = "wei_amount")]
    pub eth_slippage_wei: i128,
}

fn wei_amount<'de, D>(deserializer: D) -> Result<i128, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s
            .parse::<i128>()
            .map_err(|_| D::Error::custom(format!("invalid wei amount string '{s}'"))),
        serde_json::Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(i128::from(v))
            } else if let Some(v) = n.as_u64() {
                Ok(i128::from(v))
            } else if let Some(v) = n.as_f64() {
                // Aggregated slippage values come back from the query engine
                // as floats; truncate to whole wei.
                Ok(v as i128)
            } else {
                Err(D::Error::custom(format!("invalid wei amount number {n}")))
            }
        }
        other => Err(D::Error::custom(format!(
            "expected wei amount string or number, got {other}"
        ))),
    }
}

/// Slippage records for one period, split by sign of the adjustment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSlippages {
    negative: Vec<SolverSlippage>,
    positive: Vec<SolverSlippage>,
}

impl SplitSlippages {
    /// Creates an empty split.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the half matching the sign of its amount.
    pub fn append(&mut self, slippage: SolverSlippage) {
        if slippage.amount_wei() < 0 {
            self.negative.push(slippage);
        } else {
            self.positive.push(slippage);
        }
    }

    /// Returns the total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.negative.len() + self.positive.len()
    }

    /// Returns true when no records have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.negative.is_empty() && self.positive.is_empty()
    }

    /// Returns the negative records.
    #[must_use]
    pub fn negative(&self) -> &[SolverSlippage] {
        &self.negative
    }

    /// Returns the non-negative records.
    #[must_use]
    pub fn positive(&self) -> &[SolverSlippage] {
        &self.positive
    }

    /// Sums the negative adjustments in wei.
    #[must_use]
    pub fn sum_negative(&self) -> i128 {
        self.negative.iter().map(SolverSlippage::amount_wei).sum()
    }

    /// Sums the non-negative adjustments in wei.
    #[must_use]
    pub fn sum_positive(&self) -> i128 {
        self.positive.iter().map(SolverSlippage::amount_wei).sum()
    }

    /// Iterates over all records, negative half first.
    pub fn iter(&self) -> impl Iterator<Item = &SolverSlippage> {
        self.negative.iter().chain(self.positive.iter())
    }
}
