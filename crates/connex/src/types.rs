use serde::{Deserialize, Serialize};

/// A single operation bundled into a Thor transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub to: Option<String>,
    /// Amount of VET (in wei, hex encoded) sent with the clause.
    pub value: String,
    /// ABI encoded call data, `0x` prefixed.
    pub data: String,
}

impl Clause {
    /// A contract call that transfers no VET.
    pub fn call(to: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            value: "0x0".to_string(),
            data: data.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VmOutput {
    pub data: String,
    pub reverted: bool,
    #[serde(default)]
    pub vm_error: String,
    #[serde(default)]
    pub revert_reason: Option<String>,
    #[serde(default)]
    pub gas_used: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TxResponse {
    pub txid: String,
    pub signer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CertAnnex {
    pub domain: String,
    pub timestamp: u64,
    pub signer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CertResponse {
    pub annex: CertAnnex,
    pub signature: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptMeta {
    #[serde(rename = "blockID")]
    pub block_id: String,
    pub block_number: u64,
    pub block_timestamp: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reverted: bool,
    pub meta: ReceiptMeta,
}
