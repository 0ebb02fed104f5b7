//! Transaction validity classification.
//!
//! A transaction on a DAG chain carries two annotations that together
//! determine how the explorer presents it: `voided_by` (the transactions
//! that invalidated it, directly or by inheritance) and `conflict_with`
//! (transactions double-spending the same outputs). [`classify`] reduces a
//! record to one of the four [`TxValidity`] states and the related hash
//! lists the UI links to.
//!
//! Classification is a pure function over the fetched record: it is
//! recomputed on every render and holds no state of its own.

mod classifier;
mod validity;

pub use classifier::classify;
pub use validity::{TxValidity, ValidityReport};
