use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// Size of a transaction or block hash in bytes.
pub const TX_HASH_SIZE: usize = 32;

/// A transaction or block hash.
///
/// The API transports hashes as lowercase hex strings; internally they are
/// fixed 32-byte values so that equality and set membership never depend on
/// string casing or length quirks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TxHash([u8; TX_HASH_SIZE]);

#[derive(Debug, thiserror::Error)]
pub enum HashParseError {
    #[error("Invalid hash length: got {got} bytes, expected {expected}")]
    InvalidLength { got: usize, expected: usize },

    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl TxHash {
    pub fn from_bytes(bytes: [u8; TX_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TX_HASH_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Shortened form for constrained UI columns: the first and last 12 hex
    /// characters joined by an ellipsis.
    pub fn short(&self) -> String {
        let full = self.to_hex();
        format!("{}...{}", &full[..12], &full[full.len() - 12..])
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for TxHash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let bytes: [u8; TX_HASH_SIZE] = bytes.try_into().map_err(|b: Vec<u8>| HashParseError::InvalidLength {
            got: b.len(),
            expected: TX_HASH_SIZE,
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for TxHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TxHash::from_str(&s).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Block,
    Tx,
}

impl TxType {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Tx => "Tx",
        }
    }
}

/// A transaction (or block) record as returned by the full-node API.
///
/// `voided_by`, `conflict_with` and `twins` are the annotations consumed by
/// the validity classifier; everything else is pass-through data for
/// display. The annotation fields are frequently absent from API responses
/// and default to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub hash: TxHash,
    /// Unix timestamp (seconds) of the transaction.
    pub timestamp: i64,
    #[serde(default)]
    pub nonce: Option<u64>,
    pub weight: f64,
    pub accumulated_weight: f64,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
    #[serde(default)]
    pub parents: Vec<TxHash>,
    /// Hashes of the transactions that caused this one to be voided.
    #[serde(default)]
    pub voided_by: Vec<TxHash>,
    /// Hashes of transactions double-spending the same outputs.
    #[serde(default)]
    pub conflict_with: Vec<TxHash>,
    /// Hashes of byte-identical twin transactions.
    #[serde(default)]
    pub twins: Vec<TxHash>,
    /// Raw serialized transaction, when the caller requested it.
    #[serde(default)]
    pub raw: Option<String>,
}

impl Transaction {
    /// Whether this record is a block or a regular transaction.
    ///
    /// Genesis vertices have no inputs, so their kind cannot be derived from
    /// the record itself; the configured genesis hash lists take precedence
    /// over the input heuristic.
    pub fn kind(&self, genesis_block: &[TxHash], genesis_tx: &[TxHash]) -> TxType {
        if genesis_tx.contains(&self.hash) {
            TxType::Tx
        } else if genesis_block.contains(&self.hash) {
            TxType::Block
        } else if self.inputs.is_empty() {
            TxType::Block
        } else {
            TxType::Tx
        }
    }

    pub fn is_block(&self, genesis_block: &[TxHash], genesis_tx: &[TxHash]) -> bool {
        self.kind(genesis_block, genesis_tx) == TxType::Block
    }
}

/// A transaction input: a reference to a previous output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TxInput {
    pub tx_id: TxHash,
    pub index: u32,
}

/// A transaction output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TxOutput {
    pub value: u64,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub decoded: Option<DecodedScript>,
}

/// Result of the node's attempt to decode an output script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DecodedScript {
    P2PKH { address: String },
    #[serde(other)]
    Unknown,
}

impl DecodedScript {
    pub fn summary(&self) -> String {
        match self {
            Self::P2PKH { address } => format!("{address} [P2PKH]"),
            Self::Unknown => "Unable to decode".to_string(),
        }
    }
}
