use crate::prelude::*;

/// Identifies one event, used as the paging cursor of `sui_queryEvents`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct EventId {
    /// Digest of the transaction which emitted the event.
    #[getset(get = "pub")]
    tx_digest: String,

    /// Index of the event within that transaction, sent as a decimal string.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[getset(get_copy = "pub")]
    event_seq: u64,
}

impl EventId {
    pub fn new(tx_digest: impl Into<String>, event_seq: u64) -> Self {
        Self {
            tx_digest: tx_digest.into(),
            event_seq,
        }
    }

    /// Wire form, a two key map.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "txDigest": self.tx_digest,
            "eventSeq": self.event_seq.to_string(),
        })
    }
}
