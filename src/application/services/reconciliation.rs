//! # Reconciliation Pass
//!
//! Folds a period's solver slippage into the period's settlement
//! transfers. The pass is the single owner of the transfers it mutates:
//! one logical pass per run, adjustments applied sequentially, nothing
//! shared across invocations.

use crate::domain::entities::slippage::SplitSlippages;
use crate::domain::entities::transfer::Transfer;
use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::value_objects::Address;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Indexes transfers by receiver, requiring the receiver to be unique.
///
/// # Errors
///
/// Returns [`ValidationError::NonUniqueIndexEntry`] naming the first
/// transfer whose receiver was already indexed.
pub fn index_by_receiver(
    transfers: Vec<Transfer>,
) -> ValidationResult<HashMap<Address, Transfer>> {
    let mut indexed = HashMap::with_capacity(transfers.len());
    for transfer in transfers {
        let key = transfer.receiver();
        if indexed.contains_key(&key) {
            return Err(ValidationError::NonUniqueIndexEntry(transfer.to_string()));
        }
        indexed.insert(key, transfer);
    }
    Ok(indexed)
}

/// Applies every slippage record to the transfer owned by its solver.
///
/// A record is routed to the transfer whose receiver equals the record's
/// solver address. Records with no matching transfer are logged and
/// skipped; an adjustment that would overdraw a transfer aborts the pass
/// with that transfer untouched.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAdjustment`] when an adjustment would
/// take a transfer balance below zero.
pub fn apply_period_slippage(
    transfers: &mut [Transfer],
    slippages: &SplitSlippages,
) -> ValidationResult<()> {
    for adjustment in slippages.iter() {
        let solver = adjustment.solver_address();
        match transfers.iter_mut().find(|t| t.receiver() == solver) {
            Some(transfer) => {
                transfer.apply_slippage(adjustment)?;
                debug!(
                    solver = %solver,
                    adjustment_wei = adjustment.amount_wei(),
                    balance = transfer.amount(),
                    "applied slippage adjustment"
                );
            }
            None => {
                warn!(
                    solver = %solver,
                    solver_name = adjustment.solver_name(),
                    "no transfer for solver slippage, skipping"
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::slippage::SolverSlippage;
    use crate::domain::value_objects::TokenType;

    const ONE: &str = "0x1111111111111111111111111111111111111111";
    const TWO: &str = "0x2222222222222222222222222222222222222222";

    fn native_transfer(receiver: &str, amount: f64) -> Transfer {
        Transfer::new(
            TokenType::Native,
            None,
            Address::new(receiver).unwrap(),
            amount,
        )
        .unwrap()
    }

    mod indexing {
        use super::*;

        #[test]
        fn unique_receivers_index_cleanly() {
            let indexed = index_by_receiver(vec![
                native_transfer(ONE, 1.0),
                native_transfer(TWO, 2.0),
            ])
            .unwrap();
            assert_eq!(indexed.len(), 2);
            assert!((indexed[&Address::new(ONE).unwrap()].amount() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn duplicate_receiver_fails_with_literal_message() {
            let duplicate = native_transfer(ONE, 2.0);
            let expected = format!(
                "Attempting to index by non-unique entry \"{duplicate}\""
            );
            let err =
                index_by_receiver(vec![native_transfer(ONE, 1.0), duplicate]).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    mod slippage_pass {
        use super::*;

        #[test]
        fn adjustments_route_by_solver_address() {
            let mut transfers = vec![native_transfer(ONE, 1.0), native_transfer(TWO, 2.0)];
            let mut slippages = SplitSlippages::new();
            slippages.append(SolverSlippage::new(
                "Solver One",
                Address::new(ONE).unwrap(),
                5 * 10i128.pow(17),
            ));
            slippages.append(SolverSlippage::new(
                "Solver Two",
                Address::new(TWO).unwrap(),
                -(10i128.pow(18)),
            ));

            apply_period_slippage(&mut transfers, &slippages).unwrap();
            assert!((transfers[0].amount() - 1.5).abs() < 1e-10);
            assert!((transfers[1].amount() - 1.0).abs() < 1e-10);
        }

        #[test]
        fn unmatched_slippage_is_skipped() {
            let mut transfers = vec![native_transfer(ONE, 1.0)];
            let mut slippages = SplitSlippages::new();
            slippages.append(SolverSlippage::new(
                "Unknown Solver",
                Address::new(TWO).unwrap(),
                10i128.pow(18),
            ));

            apply_period_slippage(&mut transfers, &slippages).unwrap();
            assert!((transfers[0].amount() - 1.0).abs() < 1e-10);
        }

        #[test]
        fn overdraft_aborts_the_pass() {
            let mut transfers = vec![native_transfer(ONE, 1.0)];
            let mut slippages = SplitSlippages::new();
            slippages.append(SolverSlippage::new(
                "Solver One",
                Address::new(ONE).unwrap(),
                -2 * 10i128.pow(18),
            ));

            let err = apply_period_slippage(&mut transfers, &slippages).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidAdjustment { .. }));
            assert!((transfers[0].amount() - 1.0).abs() < 1e-10);
        }
    }
}
