//! Position-constrained greedy matching
//!
//! Walks a ranked candidate list once, taking the opposite side of each
//! resting order whose full volume keeps the net position within the
//! limit. No partial fills; a skipped candidate does not stop the scan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{Price, Volume};

use crate::ledger::Ledger;
use crate::ranker::Candidate;

/// A fill taken against a resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub price: Price,
    /// Signed: positive buys, negative sells
    pub quantity: Volume,
    pub position_after: Volume,
    pub pnl_after: Decimal,
}

/// Outcome for one ranked candidate.
///
/// A candidate whose fill would push the PnL out of Decimal range is
/// skipped with the ledger left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchDecision {
    Accepted(Fill),
    Skipped {
        candidate: Candidate,
        /// None when the position would overflow
        prospective_position: Option<Volume>,
    },
}

impl MatchDecision {
    pub fn fill(&self) -> Option<&Fill> {
        match self {
            MatchDecision::Accepted(fill) => Some(fill),
            MatchDecision::Skipped { .. } => None,
        }
    }
}

/// Match ranked candidates against the ledger.
///
/// Each candidate is checked against the position as updated by earlier
/// acceptances in the same pass.
pub fn match_candidates(
    candidates: &[Candidate],
    ledger: &mut Ledger,
    position_limit: Volume,
) -> Vec<MatchDecision> {
    candidates
        .iter()
        .map(|candidate| {
            // Taking the other side flips the sign
            let quantity = candidate.volume.checked_neg();
            let prospective = quantity.and_then(|q| ledger.prospective(q));

            let within_limit = prospective
                .and_then(|next| next.checked_abs())
                .is_some_and(|abs| abs <= position_limit);

            let filled = match quantity {
                Some(q) if within_limit => ledger.apply_fill(candidate.price, q).then_some(q),
                _ => None,
            };

            match filled {
                Some(quantity) => {
                    MatchDecision::Accepted(Fill {
                        price: candidate.price,
                        quantity,
                        position_after: ledger.position,
                        pnl_after: ledger.pnl,
                    })
                }
                None => MatchDecision::Skipped {
                    candidate: *candidate,
                    prospective_position: prospective,
                },
            }
        })
        .collect()
}
