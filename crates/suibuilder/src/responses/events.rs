use crate::prelude::*;

/// One event emitted by a transaction.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiEvent {
    id: EventId,
    package_id: ObjectId,
    transaction_module: String,
    sender: SuiAddress,
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    parsed_json: Option<Value>,
    #[serde(default)]
    bcs: Option<String>,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    timestamp_ms: Option<u64>,
}

/// A page of events matching an [`EventQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct EventQueryEnvelope {
    data: Vec<SuiEvent>,
    #[serde(default)]
    next_cursor: Option<EventId>,
    #[serde(default)]
    has_next_page: bool,
}

impl FromDict for EventQueryEnvelope {}

/// Events of one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct EventBlock(Vec<SuiEvent>);

impl Factory for EventBlock {
    /// Accepts a bare array of events or a page `{"data": [...]}`.
    fn factory(json: &Value) -> Result<Self> {
        let events = match json.get("data") {
            Some(data) if json.is_object() => data,
            _ => json,
        };
        decode_each::<Self, _>(events, decode_value::<SuiEvent>).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn event(seq: &str) -> Value {
        json!({
            "id": {"txDigest": "FHk2", "eventSeq": seq},
            "packageId": "0x2",
            "transactionModule": "pay",
            "sender": "0x7c",
            "type": "0x2::coin::CoinCreated",
            "parsedJson": {"amount": "5"},
            "timestampMs": "1680000000000"
        })
    }

    #[test]
    fn page() {
        let sut = EventQueryEnvelope::from_dict(&json!({
            "data": [event("0"), event("1")],
            "nextCursor": {"txDigest": "FHk2", "eventSeq": "1"},
            "hasNextPage": true
        }))
        .unwrap();
        assert_eq!(sut.data().len(), 2);
        assert_eq!(sut.next_cursor(), &Some(EventId::new("FHk2", 1)));
        assert_eq!(*sut.data()[0].timestamp_ms(), Some(1_680_000_000_000));
    }

    #[test]
    fn block_from_array_or_page() {
        let from_array = EventBlock::factory(&json!([event("0")])).unwrap();
        let from_page = EventBlock::factory(&json!({"data": [event("0")]})).unwrap();
        assert_eq!(from_array, from_page);
        assert_eq!(from_array[0].sender().as_str(), "0x7c");
    }

    #[test]
    fn block_rejects_scalars() {
        assert!(EventBlock::factory(&json!(42)).unwrap_err().is_decode_error());
    }
}
