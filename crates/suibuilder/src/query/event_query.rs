use crate::prelude::*;

/// Filter for `sui_queryEvents`, sent as a single key map `{tag: payload}`.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum EventQuery {
    /// Events emitted by transactions sent from an address.
    Sender(SuiAddress),
    /// Events emitted by one transaction, by digest.
    Transaction(String),
    /// Events emitted from any module of a package.
    Package(ObjectId),
    MoveModule { package: ObjectId, module: String },
    /// Events of one Move struct type, e.g. `0x2::coin::CoinCreated`.
    MoveEventType(String),
    /// Events whose JSON field at `path` equals `value`.
    MoveEventField { path: String, value: CoercedValue },
    /// Events emitted within `[start_time, end_time)`, epoch milliseconds.
    TimeRange {
        start_time: SuiInteger,
        end_time: SuiInteger,
    },
}

impl EventQuery {
    pub fn sender(address: &str) -> Result<Self> {
        address.parse().map(Self::Sender)
    }

    pub fn transaction(digest: impl Into<String>) -> Self {
        Self::Transaction(digest.into())
    }

    pub fn package(package: &str) -> Result<Self> {
        package.parse().map(Self::Package)
    }

    pub fn move_module(package: &str, module: impl Into<String>) -> Result<Self> {
        Ok(Self::MoveModule {
            package: package.parse()?,
            module: module.into(),
        })
    }

    pub fn move_event_type(event_type: impl Into<String>) -> Self {
        Self::MoveEventType(event_type.into())
    }

    pub fn move_event_field(path: impl Into<String>, value: &Value) -> Result<Self> {
        let value = CoercedValue::infer(value)
            .map_err(|e| Error::invalid_value("value", ValueKind::Map, e))?;
        Ok(Self::MoveEventField {
            path: path.into(),
            value,
        })
    }

    pub fn time_range(start_time: impl Into<SuiInteger>, end_time: impl Into<SuiInteger>) -> Self {
        Self::TimeRange {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Sender(_) => "Sender",
            Self::Transaction(_) => "Transaction",
            Self::Package(_) => "Package",
            Self::MoveModule { .. } => "MoveModule",
            Self::MoveEventType(_) => "MoveEventType",
            Self::MoveEventField { .. } => "MoveEventField",
            Self::TimeRange { .. } => "TimeRange",
        }
    }

    /// The single key wire map.
    pub fn to_coerced(&self) -> CoercedValue {
        let payload = match self {
            Self::Sender(address) => address.clone().into(),
            Self::Transaction(digest) => digest.as_str().into(),
            Self::Package(package) => package.clone().into(),
            Self::MoveModule { package, module } => CoercedValue::map([
                ("package", package.clone().into()),
                ("module", module.as_str().into()),
            ]),
            Self::MoveEventType(event_type) => event_type.as_str().into(),
            Self::MoveEventField { path, value } => CoercedValue::map([
                ("path", path.as_str().into()),
                ("value", value.clone()),
            ]),
            Self::TimeRange {
                start_time,
                end_time,
            } => CoercedValue::map([
                ("startTime", (*start_time).into()),
                ("endTime", (*end_time).into()),
            ]),
        };
        CoercedValue::tagged(self.tag(), payload)
    }
}

impl Serialize for EventQuery {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_coerced().serialize(serializer)
    }
}

impl From<EventQuery> for Argument {
    fn from(value: EventQuery) -> Self {
        Self::Typed(value.to_coerced())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn sender_verbatim() {
        let sut = EventQuery::sender("0x7c4e").unwrap();
        assert_eq!(serde_json::to_value(&sut).unwrap(), json!({"Sender": "0x7c4e"}));
    }

    #[test]
    fn malformed_sender_fails() {
        assert!(EventQuery::sender("7c4e").unwrap_err().is_validation_error());
        assert!(EventQuery::sender("0xnothex").unwrap_err().is_validation_error());
    }

    #[test]
    fn payload_shapes() {
        assert_eq!(
            EventQuery::move_module("0x2", "coin").unwrap().to_coerced().to_json(),
            json!({"MoveModule": {"package": "0x2", "module": "coin"}})
        );
        assert_eq!(
            EventQuery::time_range(1_680_000_000_000_u64, 1_690_000_000_000_u64)
                .to_coerced()
                .to_json(),
            json!({"TimeRange": {"startTime": 1_680_000_000_000_u64, "endTime": 1_690_000_000_000_u64}})
        );
        assert_eq!(
            EventQuery::move_event_field("/amount", &json!(5))
                .unwrap()
                .to_coerced()
                .to_json(),
            json!({"MoveEventField": {"path": "/amount", "value": 5}})
        );
        assert_eq!(
            EventQuery::transaction("FHk2").to_coerced().to_json(),
            json!({"Transaction": "FHk2"})
        );
    }

    #[test]
    fn event_field_rejects_floats() {
        let sut = EventQuery::move_event_field("/amount", &json!(1.5));
        assert!(sut.unwrap_err().is_invalid_value_for_kind());
    }
}
