//! Data models for explorer API payloads.
//!
//! This module contains the typed counterparts of the records served by the
//! full-node API, plus small containers used by the presentation layer.
//!
//! # Key Types
//!
//! - [`TxHash`] - 32-byte transaction/block hash, hex-encoded on the wire
//! - [`Transaction`] - A transaction (or block) record with its conflict and
//!   voiding annotations
//! - [`TxType`] - Whether a record is a block or a regular transaction
//! - [`RecentFeed`] - Bounded most-recent-first list for live dashboard panes
//!
//! All optional annotation fields (`voided_by`, `conflict_with`, `twins`)
//! normalize to empty collections during deserialization, so downstream code
//! only ever branches on emptiness, never on presence.

pub mod recent;
pub mod transaction;

pub use recent::RecentFeed;
pub use transaction::{DecodedScript, HashParseError, TX_HASH_SIZE, Transaction, TxHash, TxInput, TxOutput, TxType};
