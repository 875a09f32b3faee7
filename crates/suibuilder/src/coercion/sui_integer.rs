use crate::prelude::*;

/// Largest integer a JSON consumer using IEEE-754 doubles can represent
/// exactly (2^53 - 1).
const MAX_SAFE_JSON_INTEGER: u128 = (1 << 53) - 1;

/// An integer parameter or response value.
///
/// Serialized as a JSON number while it fits in the safe integer range,
/// as a decimal string otherwise. Deserializes from either.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    derive_more::From,
    derive_more::Display,
)]
pub struct SuiInteger(i128);

// ========================================
// Public Implementation
// ========================================
impl SuiInteger {
    pub fn new(value: i128) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i128 {
        self.0
    }

    /// Whether JSON consumers can read this value as a number without loss.
    pub fn is_json_safe(&self) -> bool {
        self.0.unsigned_abs() <= MAX_SAFE_JSON_INTEGER
    }

    /// The wire representation.
    pub fn to_json(&self) -> Value {
        if self.is_json_safe() {
            // fits in i64 since |value| <= 2^53 - 1
            Value::from(self.0 as i64)
        } else {
            Value::String(self.0.to_string())
        }
    }

    /// Narrows to `u64`, e.g. for epochs and sequence numbers.
    pub fn as_u64(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

macro_rules! sui_integer_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SuiInteger {
                fn from(value: $t) -> Self {
                    Self(i128::from(value))
                }
            }
        )*
    };
}
sui_integer_from!(u8, u16, u32, u64, i8, i16, i32, i64);

impl From<usize> for SuiInteger {
    fn from(value: usize) -> Self {
        Self(value as i128)
    }
}

impl FromStr for SuiInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i128>()
            .map(Self)
            .map_err(|_| Error::InvalidInteger {
                bad_value: s.to_owned(),
            })
    }
}

impl TryFrom<&serde_json::Number> for SuiInteger {
    type Error = Error;

    fn try_from(number: &serde_json::Number) -> Result<Self> {
        if let Some(unsigned) = number.as_u64() {
            Ok(unsigned.into())
        } else if let Some(signed) = number.as_i64() {
            Ok(signed.into())
        } else {
            Err(Error::InvalidInteger {
                bad_value: number.to_string(),
            })
        }
    }
}

impl Serialize for SuiInteger {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_json_safe() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SuiIntegerRepr {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for SuiInteger {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SuiIntegerRepr::deserialize(deserializer)? {
            SuiIntegerRepr::Unsigned(value) => Ok(value.into()),
            SuiIntegerRepr::Signed(value) => Ok(value.into()),
            SuiIntegerRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
