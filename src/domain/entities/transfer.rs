//! # Settlement Transfer
//!
//! A token balance destined for a single receiver, mutated in place as
//! slippage adjustments are folded in during a reconciliation pass.
//!
//! Two invariants are enforced here:
//!
//! - the token-address cross-invariant at construction (ERC20 transfers
//!   carry a token address, native transfers must not), and
//! - the overdraft-prevention invariant on adjustment: a transfer balance
//!   never goes negative, since that would imply paying out more than was
//!   ever credited.

use crate::domain::entities::slippage::SolverSlippage;
use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::value_objects::{Address, TokenType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token movement to a single receiver.
///
/// The amount is denominated in the token's native unit and is the only
/// mutable state in the model; it changes exclusively through
/// [`Transfer::apply_slippage`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    token_type: TokenType,
    token_address: Option<Address>,
    receiver: Address,
    amount: f64,
}

impl Transfer {
    /// Creates a transfer, enforcing the token-address cross-invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Erc20TokenAddress`] for an ERC20 transfer
    /// without a token address and [`ValidationError::NativeTokenAddress`]
    /// for a native transfer with one.
    pub fn new(
        token_type: TokenType,
        token_address: Option<Address>,
        receiver: Address,
        amount: f64,
    ) -> ValidationResult<Self> {
        match token_type {
            TokenType::Erc20 if token_address.is_none() => Err(ValidationError::Erc20TokenAddress),
            TokenType::Native if token_address.is_some() => {
                Err(ValidationError::NativeTokenAddress)
            }
            _ => Ok(Self {
                token_type,
                token_address,
                receiver,
                amount,
            }),
        }
    }

    /// Decodes a raw fetch-layer record, re-enforcing both construction
    /// invariants after coercing the wire amount.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an unknown token type, a malformed
    /// address, a non-decimal amount, or a cross-invariant violation.
    pub fn from_row(row: TransferRow) -> ValidationResult<Self> {
        let token_type: TokenType = row.token_type.parse()?;
        let token_address = row
            .token_address
            .filter(|raw| !raw.is_empty())
            .map(|raw| Address::new(&raw))
            .transpose()?;
        let receiver = Address::new(&row.receiver)?;
        let amount: f64 = row
            .amount
            .parse()
            .map_err(|_| ValidationError::InvalidTransferAmount(row.amount.clone()))?;

        Self::new(token_type, token_address, receiver, amount)
    }

    /// Returns the asset class of the transfer.
    #[inline]
    #[must_use]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Returns the token contract address, present iff ERC20.
    #[inline]
    #[must_use]
    pub fn token_address(&self) -> Option<Address> {
        self.token_address
    }

    /// Returns the receiver of the transfer.
    #[inline]
    #[must_use]
    pub fn receiver(&self) -> Address {
        self.receiver
    }

    /// Returns the current balance in the token's native unit.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Folds a signed slippage adjustment into the balance, in place.
    ///
    /// The new balance must not go negative; on violation the transfer is
    /// left untouched. Repeated adjustments within one reconciliation pass
    /// accumulate on the same object.
    ///
    /// # Panics
    ///
    /// Panics when the adjustment's solver address differs from the
    /// transfer's receiver. Routing adjustments to the right transfer is
    /// the caller's contract, not input validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAdjustment`] when the adjusted
    /// balance would be negative.
    pub fn apply_slippage(&mut self, adjustment: &SolverSlippage) -> ValidationResult<()> {
        assert_eq!(
            adjustment.solver_address(),
            self.receiver,
            "receiver != solver"
        );

        let adjustment_tokens = adjustment.amount_tokens();
        let new_amount = self.amount + adjustment_tokens;
        if new_amount < 0.0 {
            return Err(ValidationError::InvalidAdjustment {
                transfer: self.to_string(),
                adjustment_tokens,
            });
        }
        self.amount = new_amount;
        Ok(())
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_address {
            Some(token) => write!(
                f,
                "erc20[{token}] transfer of {} to {}",
                self.amount, self.receiver
            ),
            None => write!(f, "native transfer of {} to {}", self.amount, self.receiver),
        }
    }
}

/// Raw fetch-layer record for a settlement transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRow {
    /// Wire token type, `native` or `erc20`.
    pub token_type: String,
    /// Token contract address; null for native transfers.
    pub token_address: Option<String>,
    /// Receiver address, hex-encoded.
    pub receiver: String,
    /// Amount in the token's native unit, as a decimal string.
    pub amount: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ONE: &str = "0x1111111111111111111111111111111111111111";
    const TWO: &str = "0x2222222222222222222222222222222222222222";

    fn native_transfer(receiver: Address, amount: f64) -> Transfer {
        Transfer::new(TokenType::Native, None, receiver, amount).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn erc20_requires_token_address() {
            let err = Transfer::new(TokenType::Erc20, None, Address::new(ONE).unwrap(), 1.234)
                .unwrap_err();
            assert_eq!(err.to_string(), "ERC20 transfers must have valid token_address");
        }

        #[test]
        fn native_forbids_token_address() {
            let err = Transfer::new(
                TokenType::Native,
                Some(Address::new(ONE).unwrap()),
                Address::new(ONE).unwrap(),
                1.234,
            )
            .unwrap_err();
            assert_eq!(err.to_string(), "Native transfers must have null token_address");
        }

        #[test]
        fn valid_erc20_constructs() {
            let transfer = Transfer::new(
                TokenType::Erc20,
                Some(Address::new(TWO).unwrap()),
                Address::new(ONE).unwrap(),
                0.5,
            )
            .unwrap();
            assert_eq!(transfer.token_address(), Some(Address::new(TWO).unwrap()));
        }
    }

    mod raw_records {
        use super::*;

        #[test]
        fn native_row_decodes() {
            let row: TransferRow = serde_json::from_value(serde_json::json!({
                "token_type": "native",
                "token_address": null,
                "receiver": ONE,
                "amount": "1.234",
            }))
            .unwrap();
            let transfer = Transfer::from_row(row).unwrap();
            assert_eq!(
                transfer,
                native_transfer(Address::new(ONE).unwrap(), 1.234)
            );
        }

        #[test]
        fn row_invariants_match_construction() {
            let erc20_missing = TransferRow {
                token_type: "erc20".to_string(),
                token_address: None,
                receiver: ONE.to_string(),
                amount: "1.234".to_string(),
            };
            assert_eq!(
                Transfer::from_row(erc20_missing).unwrap_err().to_string(),
                "ERC20 transfers must have valid token_address"
            );

            let native_with_token = TransferRow {
                token_type: "native".to_string(),
                token_address: Some(ONE.to_string()),
                receiver: ONE.to_string(),
                amount: "1.234".to_string(),
            };
            assert_eq!(
                Transfer::from_row(native_with_token).unwrap_err().to_string(),
                "Native transfers must have null token_address"
            );
        }

        #[test]
        fn bad_amount_string_fails() {
            let row = TransferRow {
                token_type: "native".to_string(),
                token_address: None,
                receiver: ONE.to_string(),
                amount: "one point two".to_string(),
            };
            assert_eq!(
                Transfer::from_row(row).unwrap_err().to_string(),
                "invalid transfer amount 'one point two'"
            );
        }
    }

    mod slippage_application {
        use super::*;

        #[test]
        fn adjustments_accumulate_in_place() {
            let solver = Address::zero();
            let mut transfer = native_transfer(solver, 1.0);

            let positive = SolverSlippage::new("Test Solver", solver, 5 * 10i128.pow(17));
            transfer.apply_slippage(&positive).unwrap();
            assert!((transfer.amount() - 1.5).abs() < 1e-10);

            let negative = SolverSlippage::new("Test Solver", solver, -(5 * 10i128.pow(17)));
            transfer.apply_slippage(&negative).unwrap();
            assert!((transfer.amount() - 1.0).abs() < 1e-10);
        }

        #[test]
        fn overdraft_fails_and_leaves_amount_unchanged() {
            let solver = Address::zero();
            let mut transfer = native_transfer(solver, 1.0);

            let overdraft = SolverSlippage::new("Test Solver", solver, -2 * 10i128.pow(18));
            let err = transfer.apply_slippage(&overdraft).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Invalid adjustment {transfer} by -2")
            );
            assert!((transfer.amount() - 1.0).abs() < 1e-10);
        }

        #[test]
        #[should_panic(expected = "receiver != solver")]
        fn mismatched_solver_is_a_contract_violation() {
            let mut transfer = native_transfer(Address::new(ONE).unwrap(), 1.0);
            let mismatched = SolverSlippage::new("Test Solver", Address::new(TWO).unwrap(), 0);
            let _ = transfer.apply_slippage(&mismatched);
        }
    }
}
