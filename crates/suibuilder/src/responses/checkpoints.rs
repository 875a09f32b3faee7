use crate::prelude::*;

/// A checkpoint with the digests of the transactions it contains.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct Checkpoint {
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    epoch: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    sequence_number: u64,
    digest: String,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    network_total_transactions: u64,
    #[serde(default)]
    previous_digest: Option<String>,
    #[serde(default)]
    epoch_rolling_gas_cost_summary: Value,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    timestamp_ms: u64,
    #[serde(default)]
    transactions: Vec<String>,
    #[serde(default)]
    checkpoint_commitments: Vec<Value>,
    #[serde(default)]
    validator_signature: Option<String>,
    #[serde(default)]
    end_of_epoch_data: Option<Value>,
}

impl FromDict for Checkpoint {}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct CheckpointSummary {
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    epoch: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    sequence_number: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    network_total_transactions: u64,
    content_digest: String,
    #[serde(default)]
    previous_digest: Option<String>,
    #[serde(default)]
    epoch_rolling_gas_cost_summary: Value,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    timestamp_ms: u64,
    #[serde(default)]
    end_of_epoch_data: Option<Value>,
}

impl FromDict for CheckpointSummary {}

/// Transaction and effects digest pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ExecutionDigests {
    transaction: String,
    effects: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct CheckpointContents {
    transactions: Vec<ExecutionDigests>,
    #[serde(default)]
    user_signatures: Vec<Value>,
}

impl FromDict for CheckpointContents {}
