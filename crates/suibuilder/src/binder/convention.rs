use crate::prelude::*;

/// How bound fields are laid out in the JSON-RPC `params` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant)]
pub enum ParamConvention {
    /// One array element per parameter, in declaration order. Trailing
    /// absent parameters are left out, absent ones followed by a present
    /// parameter are sent as `null`.
    #[default]
    Positional,
    /// A single array element: a map of parameter name to value, absent
    /// parameters left out.
    Keyed,
}

impl ParamConvention {
    pub fn payload(&self, fields: &BoundFields) -> Value {
        match self {
            Self::Positional => {
                let present = fields
                    .values()
                    .rposition(|value| !value.is_null())
                    .map_or(0, |last| last + 1);
                Value::Array(
                    fields
                        .values()
                        .take(present)
                        .map(CoercedValue::to_json)
                        .collect(),
                )
            }
            Self::Keyed => {
                let keyed = fields
                    .iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(name, value)| ((*name).to_owned(), value.to_json()))
                    .collect::<serde_json::Map<_, _>>();
                Value::Array(vec![Value::Object(keyed)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(values: [(&'static str, CoercedValue); 4]) -> BoundFields {
        values.into_iter().fold(BoundFields::default(), |mut acc, (k, v)| {
            acc.insert(k, v);
            acc
        })
    }

    #[test]
    fn positional_trims_trailing_absent() {
        let sut = fields([
            ("owner", CoercedValue::String("0x1".to_owned())),
            ("coin_type", CoercedValue::String("0x2::sui::SUI".to_owned())),
            ("cursor", CoercedValue::Null),
            ("limit", CoercedValue::Null),
        ]);
        assert_eq!(
            ParamConvention::Positional.payload(&sut),
            json!(["0x1", "0x2::sui::SUI"])
        );
    }

    #[test]
    fn positional_keeps_interior_null() {
        let sut = fields([
            ("owner", CoercedValue::String("0x1".to_owned())),
            ("coin_type", CoercedValue::String("0x2::sui::SUI".to_owned())),
            ("cursor", CoercedValue::Null),
            ("limit", CoercedValue::Integer(5.into())),
        ]);
        assert_eq!(
            ParamConvention::Positional.payload(&sut),
            json!(["0x1", "0x2::sui::SUI", null, 5])
        );
    }

    #[test]
    fn positional_all_absent_is_empty() {
        let sut = BoundFields::default();
        assert_eq!(ParamConvention::Positional.payload(&sut), json!([]));
    }

    #[test]
    fn keyed_omits_absent() {
        let sut = fields([
            ("query", CoercedValue::tagged("Transaction", "abc".into())),
            ("cursor", CoercedValue::Null),
            ("limit", CoercedValue::Integer(10.into())),
            ("descending_order", CoercedValue::Null),
        ]);
        assert_eq!(
            ParamConvention::Keyed.payload(&sut),
            json!([{"query": {"Transaction": "abc"}, "limit": 10}])
        );
    }
}
