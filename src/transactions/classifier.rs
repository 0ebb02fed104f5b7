use std::collections::HashSet;

use super::{TxValidity, ValidityReport};
use crate::models::{Transaction, TxHash};

/// Classify a transaction record into its validity state and the related
/// hash lists to surface.
///
/// Deterministic and total over deserialized records: absent annotations
/// arrive as empty lists and no combination of inputs fails. The twin list
/// is not assumed to be a subset of `conflict_with`; the difference is
/// computed by membership test either way.
pub fn classify(tx: &Transaction) -> ValidityReport {
    let twin_set: HashSet<&TxHash> = tx.twins.iter().collect();
    let conflicts_excluding_twins: Vec<TxHash> = tx
        .conflict_with
        .iter()
        .filter(|hash| !twin_set.contains(hash))
        .copied()
        .collect();

    let validity = if tx.voided_by.is_empty() {
        if tx.conflict_with.is_empty() {
            TxValidity::ValidNoConflict
        } else {
            TxValidity::ValidWithConflict
        }
    } else if tx.conflict_with.is_empty() {
        TxValidity::VoidedNoConflict
    } else {
        TxValidity::VoidedWithConflict
    };

    ValidityReport {
        validity,
        conflicts_excluding_twins,
        twins: tx.twins.clone(),
        voided_by: tx.voided_by.clone(),
    }
}
