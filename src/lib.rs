pub mod config;
pub mod format;
pub mod models;
pub mod transactions;
pub mod version;

pub use crate::config::{ExplorerSettings, load_settings};
pub use crate::format::{ScaledValue, divide_value_into_prefix, pretty_value, unit_prefix};
pub use crate::models::{RecentFeed, Transaction, TxHash, TxType};
pub use crate::transactions::{TxValidity, ValidityReport, classify};
pub use crate::version::is_version_allowed;
