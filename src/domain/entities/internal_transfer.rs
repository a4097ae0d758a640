//! Internal token transfers reimbursed over an accounting period.

use crate::domain::errors::ValidationResult;
use crate::domain::value_objects::{Address, TransferType};
use serde::Deserialize;

/// A classified internal token movement, in atoms of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalTokenTransfer {
    /// Classification of the movement.
    pub transfer_type: TransferType,
    /// Token the movement is denominated in.
    pub token: Address,
    /// Signed amount in atoms.
    pub amount: i128,
}

impl InternalTokenTransfer {
    /// Decodes an analytics result row.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::domain::errors::ValidationError)
    /// for an unknown transfer type or a malformed token address.
    pub fn from_row(row: InternalTransferRow) -> ValidationResult<Self> {
        Ok(Self {
            transfer_type: TransferType::parse(&row.transfer_type)?,
            token: Address::new(&row.token)?,
            amount: row.amount,
        })
    }

    /// Filters records to those with the given classification.
    #[must_use]
    pub fn filter_by(
        records: &[InternalTokenTransfer],
        transfer_type: TransferType,
    ) -> Vec<InternalTokenTransfer> {
        records
            .iter()
            .filter(|r| r.transfer_type == transfer_type)
            .copied()
            .collect()
    }

    /// Filters records to internal trades only.
    #[must_use]
    pub fn internal_trades(records: &[InternalTokenTransfer]) -> Vec<InternalTokenTransfer> {
        Self::filter_by(records, TransferType::InternalTrade)
    }
}

/// Raw analytics row for an internal transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct InternalTransferRow {
    /// Wire classification string, matched case-insensitively.
    pub transfer_type: String,
    /// Token address, hex-encoded.
    pub token: String,
    /// Signed amount in atoms.
    pub amount: i128,
}
