use crate::prelude::*;

/// A parameter value after coercion, the canonical typed representation
/// used for bound fields and on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, IsVariant)]
pub enum CoercedValue {
    /// Absent, distinct from an empty string, array or map.
    #[default]
    Null,
    Integer(SuiInteger),
    String(String),
    Boolean(bool),
    Address(SuiAddress),
    ObjectId(ObjectId),
    EventId(EventId),
    Array(Vec<CoercedValue>),
    Map(IndexMap<String, CoercedValue>),
}

impl CoercedValue {
    /// Builds a map value keeping the order of `entries`.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, CoercedValue)>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Single entry map `{tag: payload}`, the shape of every query criterion.
    pub fn tagged(tag: &str, payload: CoercedValue) -> Self {
        Self::map([(tag, payload)])
    }

    /// Coerces arbitrary JSON by inspecting its type: strings stay strings,
    /// integers become [`SuiInteger`]. Non integral numbers are rejected.
    pub fn infer(json: &Value) -> Result<Self> {
        match json {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Boolean(*b)),
            Value::Number(n) => SuiInteger::try_from(n).map(Self::Integer),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::infer)
                .collect::<Result<Vec<_>>>()
                .map(Self::Array),
            Value::Object(entries) => entries
                .iter()
                .map(|(k, v)| Self::infer(v).map(|v| (k.clone(), v)))
                .collect::<Result<IndexMap<_, _>>>()
                .map(Self::Map),
        }
    }

    /// The wire representation.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Integer(i) => i.to_json(),
            Self::String(s) => Value::String(s.clone()),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Address(a) => Value::String(a.to_string()),
            Self::ObjectId(o) => Value::String(o.to_string()),
            Self::EventId(e) => e.to_json(),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Integer(_) => "Integer",
            Self::String(_) => "String",
            Self::Boolean(_) => "Boolean",
            Self::Address(_) => "Address",
            Self::ObjectId(_) => "ObjectId",
            Self::EventId(_) => "EventId",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
        }
    }
}

impl Serialize for CoercedValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Integer(i) => i.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Address(a) => a.serialize(serializer),
            Self::ObjectId(o) => o.serialize(serializer),
            Self::EventId(e) => e.serialize(serializer),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Map(entries) => serializer.collect_map(entries),
        }
    }
}

impl From<SuiInteger> for CoercedValue {
    fn from(value: SuiInteger) -> Self {
        Self::Integer(value)
    }
}

impl From<SuiAddress> for CoercedValue {
    fn from(value: SuiAddress) -> Self {
        Self::Address(value)
    }
}

impl From<ObjectId> for CoercedValue {
    fn from(value: ObjectId) -> Self {
        Self::ObjectId(value)
    }
}

impl From<EventId> for CoercedValue {
    fn from(value: EventId) -> Self {
        Self::EventId(value)
    }
}

impl From<bool> for CoercedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for CoercedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for CoercedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn infer_keeps_insertion_order() {
        let sut = CoercedValue::infer(&json!({"z": 1, "a": [true, null], "m": "x"})).unwrap();
        let CoercedValue::Map(entries) = &sut else {
            panic!("expected a map, got {}", sut.kind_name());
        };
        assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(
            entries["a"],
            CoercedValue::Array(vec![CoercedValue::Boolean(true), CoercedValue::Null])
        );
    }

    #[test]
    fn infer_rejects_floats() {
        assert!(CoercedValue::infer(&json!({"ratio": 0.5})).is_err());
    }

    #[test]
    fn serialize_matches_to_json() {
        let sut = CoercedValue::map([
            ("id", CoercedValue::from("0x5".parse::<ObjectId>().unwrap())),
            ("big", CoercedValue::from(SuiInteger::from(u64::MAX))),
            ("cursor", CoercedValue::from(EventId::new("d", 1))),
            ("flags", CoercedValue::Array(vec![true.into(), false.into()])),
        ]);
        let expected = json!({
            "id": "0x5",
            "big": "18446744073709551615",
            "cursor": {"txDigest": "d", "eventSeq": "1"},
            "flags": [true, false],
        });
        assert_eq!(sut.to_json(), expected);
        assert_eq!(serde_json::to_value(&sut).unwrap(), expected);
    }
}
