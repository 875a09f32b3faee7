use crate::prelude::*;

/// A transaction block with the parts requested by [`TransactionReadOptions`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct TxResponse {
    digest: String,
    #[serde(default)]
    transaction: Option<Value>,
    #[serde(default)]
    raw_transaction: Option<String>,
    #[serde(default)]
    effects: Option<Value>,
    #[serde(default)]
    events: Option<Vec<SuiEvent>>,
    #[serde(default)]
    object_changes: Option<Vec<Value>>,
    #[serde(default)]
    balance_changes: Option<Vec<Value>>,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    timestamp_ms: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    checkpoint: Option<u64>,
    #[serde(default)]
    confirmed_local_execution: Option<bool>,
    #[serde(default)]
    errors: Vec<String>,
}

impl FromDict for TxResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct TxResponseArray(Vec<TxResponse>);

impl Factory for TxResponseArray {
    fn factory(json: &Value) -> Result<Self> {
        decode_each::<Self, _>(json, TxResponse::from_dict).map(Self)
    }
}

/// An element of a transaction query page, older nodes send bare digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IsVariant)]
#[serde(untagged)]
pub enum TransactionQueryItem {
    Digest(String),
    Response(Box<TxResponse>),
}

impl TransactionQueryItem {
    pub fn digest(&self) -> &str {
        match self {
            Self::Digest(digest) => digest,
            Self::Response(response) => response.digest(),
        }
    }
}

/// A page of transactions matching a [`TransactionQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct TransactionQueryEnvelope {
    data: Vec<TransactionQueryItem>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default)]
    has_next_page: bool,
}

impl FromDict for TransactionQueryEnvelope {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tx(digest: &str) -> Value {
        json!({
            "digest": digest,
            "effects": {"status": {"status": "success"}},
            "events": [],
            "timestampMs": "1680000000000",
            "checkpoint": "42"
        })
    }

    #[test]
    fn single() {
        let sut = TxResponse::from_dict(&tx("Dg1")).unwrap();
        assert_eq!(sut.digest(), "Dg1");
        assert_eq!(*sut.checkpoint(), Some(42));
        assert_eq!(sut.events().as_ref().map(Vec::len), Some(0));
        assert_eq!(sut.transaction(), &None);
    }

    #[test]
    fn many() {
        let sut = TxResponseArray::factory(&json!([tx("A"), tx("B")])).unwrap();
        assert_eq!(
            sut.iter().map(|t| t.digest().as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert!(TxResponseArray::factory(&json!([{}])).unwrap_err().is_decode_error());
    }

    #[test]
    fn query_page_of_digests_or_responses() {
        let sut = TransactionQueryEnvelope::from_dict(&json!({
            "data": ["A", tx("B")],
            "nextCursor": "B",
            "hasNextPage": true
        }))
        .unwrap();
        assert!(sut.data()[0].is_digest());
        assert!(sut.data()[1].is_response());
        assert_eq!(sut.data()[1].digest(), "B");
        assert_eq!(sut.next_cursor().as_deref(), Some("B"));
    }
}
