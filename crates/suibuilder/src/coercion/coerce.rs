use crate::prelude::*;

/// Coerces `argument` into `kind`, `parameter` names the value in errors.
///
/// Callers resolve absence first: a null reaching this function is
/// rejected like any other mismatch.
pub fn coerce(parameter: &str, kind: ValueKind, argument: Argument) -> Result<CoercedValue> {
    let mismatch = |found: &str| {
        Error::invalid_value(parameter, kind, format!("found {}", found))
    };
    match (kind, argument) {
        (ValueKind::Array(inner), Argument::List(items)) => coerce_elements(parameter, inner, items),
        (ValueKind::Array(inner), Argument::Raw(Value::Array(items))) => coerce_elements(
            parameter,
            inner,
            items.into_iter().map(Argument::Raw).collect(),
        ),
        (ValueKind::Array(inner), Argument::Typed(CoercedValue::Array(items))) => coerce_elements(
            parameter,
            inner,
            items.into_iter().map(Argument::Typed).collect(),
        ),
        (_, Argument::List(_)) => Err(mismatch("a list")),
        (kind, Argument::Typed(value)) => coerce_typed(parameter, kind, value),
        (kind, Argument::Raw(json)) => coerce_raw(parameter, kind, json),
    }
}

fn coerce_elements(
    parameter: &str,
    kind: &'static ValueKind,
    items: Vec<Argument>,
) -> Result<CoercedValue> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let element = format!("{}[{}]", parameter, index);
            if item.is_absent() {
                return Err(Error::invalid_value(&element, *kind, "found null"));
            }
            coerce(&element, *kind, item)
        })
        .collect::<Result<Vec<_>>>()
        .map(CoercedValue::Array)
}

fn coerce_typed(parameter: &str, kind: ValueKind, value: CoercedValue) -> Result<CoercedValue> {
    let invalid = |e: Error| Error::invalid_value(parameter, kind, e);
    match (kind, value) {
        (ValueKind::Integer, v @ CoercedValue::Integer(_))
        | (ValueKind::String, v @ CoercedValue::String(_))
        | (ValueKind::Boolean, v @ CoercedValue::Boolean(_))
        | (ValueKind::Address, v @ CoercedValue::Address(_))
        | (ValueKind::ObjectId, v @ CoercedValue::ObjectId(_))
        | (ValueKind::EventId, v @ CoercedValue::EventId(_))
        | (ValueKind::Map, v @ CoercedValue::Map(_)) => Ok(v),
        (ValueKind::Integer, CoercedValue::String(s)) => s
            .parse::<SuiInteger>()
            .map(CoercedValue::Integer)
            .map_err(invalid),
        (ValueKind::Address, CoercedValue::String(s)) => s
            .parse::<SuiAddress>()
            .map(CoercedValue::Address)
            .map_err(invalid),
        (ValueKind::ObjectId, CoercedValue::String(s)) => s
            .parse::<ObjectId>()
            .map(CoercedValue::ObjectId)
            .map_err(invalid),
        (ValueKind::EventId, map @ CoercedValue::Map(_)) => coerce_raw(parameter, kind, map.to_json()),
        (kind, other) => Err(Error::invalid_value(
            parameter,
            kind,
            format!("found {}", other.kind_name()),
        )),
    }
}

fn coerce_raw(parameter: &str, kind: ValueKind, json: Value) -> Result<CoercedValue> {
    let invalid = |e: Error| Error::invalid_value(parameter, kind, e);
    match (kind, json) {
        (ValueKind::Integer, Value::Number(n)) => SuiInteger::try_from(&n)
            .map(CoercedValue::Integer)
            .map_err(invalid),
        (ValueKind::Integer, Value::String(s)) => s
            .parse::<SuiInteger>()
            .map(CoercedValue::Integer)
            .map_err(invalid),
        (ValueKind::String, Value::String(s)) => Ok(CoercedValue::String(s)),
        (ValueKind::Boolean, Value::Bool(b)) => Ok(CoercedValue::Boolean(b)),
        (ValueKind::Address, Value::String(s)) => s
            .parse::<SuiAddress>()
            .map(CoercedValue::Address)
            .map_err(invalid),
        (ValueKind::ObjectId, Value::String(s)) => s
            .parse::<ObjectId>()
            .map(CoercedValue::ObjectId)
            .map_err(invalid),
        (ValueKind::EventId, json @ Value::Object(_)) => serde_json::from_value::<EventId>(json)
            .map(CoercedValue::EventId)
            .map_err(|e| Error::invalid_value(parameter, kind, e)),
        (ValueKind::Map, json @ Value::Object(_)) => {
            CoercedValue::infer(&json).map_err(invalid)
        }
        (kind, other) => Err(Error::invalid_value(
            parameter,
            kind,
            format!("found {}", json_type_name(&other)),
        )),
    }
}

fn json_type_name(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static OBJECT_IDS: ValueKind = ValueKind::Array(&ValueKind::ObjectId);

    #[test]
    fn integer_from_number_or_string() {
        assert_eq!(
            coerce("limit", ValueKind::Integer, json!(50).into()).unwrap(),
            CoercedValue::Integer(50.into())
        );
        assert_eq!(
            coerce("limit", ValueKind::Integer, json!("50").into()).unwrap(),
            CoercedValue::Integer(50.into())
        );
    }

    #[test]
    fn two_pow_63_keeps_precision() {
        let sut = coerce("version", ValueKind::Integer, json!(9_223_372_036_854_775_808u64).into())
            .unwrap();
        assert_eq!(sut.to_json(), json!("9223372036854775808"));
    }

    #[test]
    fn float_is_not_an_integer() {
        let err = coerce("limit", ValueKind::Integer, json!(1.5).into()).unwrap_err();
        assert!(err.is_invalid_value_for_kind());
    }

    #[test]
    fn address_from_string() {
        assert_eq!(
            coerce("owner", ValueKind::Address, "0xA1".into()).unwrap(),
            CoercedValue::Address("0xa1".parse().unwrap())
        );
    }

    #[test]
    fn malformed_address_names_parameter() {
        let err = coerce("owner", ValueKind::Address, json!("alice").into()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidValueForKind {
                parameter: "owner".to_owned(),
                kind: "Address".to_owned(),
                underlying: "Malformed address: `alice`".to_owned(),
            }
        );
    }

    #[test]
    fn strings_are_not_numbers() {
        let err = coerce("digest", ValueKind::String, json!(5).into()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidValueForKind {
                parameter: "digest".to_owned(),
                kind: "String".to_owned(),
                underlying: "found a number".to_owned(),
            }
        );
    }

    #[test]
    fn array_elements_are_coerced_in_order() {
        let sut = coerce("object_ids", OBJECT_IDS, vec!["0x2", "0x1"].into()).unwrap();
        assert_eq!(
            sut,
            CoercedValue::Array(vec![
                CoercedValue::ObjectId("0x2".parse().unwrap()),
                CoercedValue::ObjectId("0x1".parse().unwrap()),
            ])
        );
    }

    #[test]
    fn array_element_error_has_index() {
        let err = coerce("object_ids", OBJECT_IDS, json!(["0x2", "nope"]).into()).unwrap_err();
        let Error::InvalidValueForKind { parameter, kind, .. } = err else {
            panic!("expected InvalidValueForKind");
        };
        assert_eq!(parameter, "object_ids[1]");
        assert_eq!(kind, "ObjectId");
    }

    #[test]
    fn array_rejects_null_elements() {
        assert!(coerce("object_ids", OBJECT_IDS, json!(["0x2", null]).into()).is_err());
    }

    #[test]
    fn event_id_from_map() {
        let sut = coerce(
            "cursor",
            ValueKind::EventId,
            json!({"txDigest": "abc", "eventSeq": "0"}).into(),
        )
        .unwrap();
        assert_eq!(sut, CoercedValue::EventId(EventId::new("abc", 0)));
    }

    #[test]
    fn map_is_not_an_array() {
        assert!(coerce("options", ValueKind::Map, json!([1]).into()).is_err());
        assert!(coerce("options", ValueKind::Map, vec![1u64].into()).is_err());
    }
}
