use serde::{Deserialize, Serialize};

use crate::format;
use crate::models::{Transaction, TxHash, TxType};
use crate::version;

/// Explorer-wide settings.
///
/// The formatter precision, minimum node version and genesis hash lists are
/// deployment constants; they are threaded explicitly into the functions
/// that need them rather than read from ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    /// Network this explorer instance points at.
    pub network: String,
    /// Minimum full-node API version the explorer will talk to.
    pub min_api_version: String,
    /// Fixed-point decimal places used when rendering token amounts.
    pub decimal_places: u32,
    /// Hashes of the genesis block.
    pub genesis_block: Vec<TxHash>,
    /// Hashes of the genesis transactions.
    pub genesis_tx: Vec<TxHash>,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            network: "mainnet".to_string(),
            min_api_version: "0.31.0".to_string(),
            decimal_places: 2,
            genesis_block: vec![
                "000006cb93385b8b87a545a1cbb6197e6caff600c12cc12fc54250d39c8088fc"
                    .parse()
                    .expect("mainnet genesis block hash"),
            ],
            genesis_tx: vec![
                "0002d4d2a15def7604688e1878ab681142a7b155cbe52a6b4e031250ae96db0a"
                    .parse()
                    .expect("mainnet genesis tx hash"),
                "0002ad8d1519daaddc8e1a37b14aac0b045129c01832281fb1c02d873c7abbf9"
                    .parse()
                    .expect("mainnet genesis tx hash"),
            ],
        }
    }
}

impl ExplorerSettings {
    /// Kind of a record under this network's genesis lists.
    pub fn tx_type(&self, tx: &Transaction) -> TxType {
        tx.kind(&self.genesis_block, &self.genesis_tx)
    }

    /// Whether a node reporting `version` is compatible with this explorer.
    pub fn is_version_allowed(&self, reported: &str) -> bool {
        version::is_version_allowed(reported, &self.min_api_version)
    }

    /// Render a token amount with this network's decimal places.
    pub fn pretty_value(&self, amount: u64) -> String {
        format::pretty_value(amount, self.decimal_places)
    }
}
