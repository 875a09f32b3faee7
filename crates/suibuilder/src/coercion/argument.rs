use crate::prelude::*;

/// A caller supplied argument, before coercion.
///
/// Either raw JSON (e.g. parsed from the command line), an already typed
/// value, or a list mixing both. JSON `null` and [`CoercedValue::Null`]
/// both mean "not supplied".
#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum Argument {
    Raw(Value),
    Typed(CoercedValue),
    List(Vec<Argument>),
}

impl Argument {
    pub fn absent() -> Self {
        Self::Typed(CoercedValue::Null)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Raw(Value::Null) | Self::Typed(CoercedValue::Null))
    }
}

impl Default for Argument {
    fn default() -> Self {
        Self::absent()
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<CoercedValue> for Argument {
    fn from(value: CoercedValue) -> Self {
        Self::Typed(value)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

macro_rules! argument_from_typed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Argument {
                fn from(value: $t) -> Self {
                    Self::Typed(CoercedValue::from(value))
                }
            }
        )*
    };
}
argument_from_typed!(SuiInteger, SuiAddress, ObjectId, EventId, bool, String, &str);

macro_rules! argument_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Argument {
                fn from(value: $t) -> Self {
                    Self::Typed(CoercedValue::Integer(SuiInteger::from(value)))
                }
            }
        )*
    };
}
argument_from_integer!(u8, u16, u32, u64, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn none_and_null_are_absent() {
        assert!(Argument::from(None::<u64>).is_absent());
        assert!(Argument::from(json!(null)).is_absent());
        assert!(!Argument::from("").is_absent());
        assert!(!Argument::from(json!({})).is_absent());
    }

    #[test]
    fn vec_becomes_list() {
        let sut = Argument::from(vec!["0x1", "0x2"]);
        assert_eq!(
            sut,
            Argument::List(vec![
                Argument::Typed(CoercedValue::String("0x1".to_owned())),
                Argument::Typed(CoercedValue::String("0x2".to_owned())),
            ])
        );
    }
}
