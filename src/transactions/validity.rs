use crate::format::plural;
use crate::models::TxHash;
use serde::{Deserialize, Serialize};

/// Validity state of a transaction, derived from its conflict and voiding
/// annotations.
///
/// This is a single four-way decision, not two independent flags: a voided
/// transaction with no direct conflict (voided by inheritance from an
/// ancestor) renders differently from one that lost a double-spend race.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TxValidity {
    ValidNoConflict,
    ValidWithConflict,
    VoidedNoConflict,
    VoidedWithConflict,
}

impl TxValidity {
    pub fn is_voided(&self) -> bool {
        matches!(self, Self::VoidedNoConflict | Self::VoidedWithConflict)
    }

    pub fn has_conflict(&self) -> bool {
        matches!(self, Self::ValidWithConflict | Self::VoidedWithConflict)
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::ValidNoConflict => "Valid",
            Self::ValidWithConflict => "Valid (conflicting)",
            Self::VoidedNoConflict => "Voided",
            Self::VoidedWithConflict => "Voided (conflicting)",
        }
    }

    /// Narrative shown on the transaction detail page.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ValidNoConflict => "This transaction is valid.",
            Self::ValidWithConflict => {
                "Although there is a double-spending transaction, this transaction has the highest accumulated \
                 weight and is valid."
            },
            Self::VoidedNoConflict => {
                "This transaction is verifying (directly or indirectly) a voided double-spending transaction, \
                 hence it is voided as well."
            },
            Self::VoidedWithConflict => {
                "This transaction is voided and in direct conflict with a double-spending transaction."
            },
        }
    }
}

/// Classification result for one transaction record.
///
/// The hash lists preserve the order of the source record. Twins are a
/// sub-case of conflicts and are reported separately so the UI can render
/// the twin notice in addition to the conflict state, never instead of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidityReport {
    pub validity: TxValidity,
    /// `conflict_with` minus `twins`.
    pub conflicts_excluding_twins: Vec<TxHash>,
    pub twins: Vec<TxHash>,
    pub voided_by: Vec<TxHash>,
}

impl ValidityReport {
    /// Twin narrative, present only when the transaction has twins.
    pub fn twin_notice(&self) -> Option<String> {
        if self.twins.is_empty() {
            return None;
        }
        Some(format!(
            "This transaction has twin {}",
            plural(self.twins.len(), "transaction", "transactions")
        ))
    }
}
