use crate::prelude::*;

/// Deserializes `json` into `T`, reporting failures as [`Error::DecodeFailed`].
pub(crate) fn decode_value<T: DeserializeOwned>(json: &Value) -> Result<T> {
    serde_json::from_value(json.clone()).map_err(Error::decode_failed::<T>)
}

/// The elements of `json`, failing unless it is an array.
pub(crate) fn expect_array<T>(json: &Value) -> Result<&Vec<Value>> {
    json.as_array().ok_or_else(|| {
        Error::decode_failed::<T>(format!("expected a JSON array, found `{}`", json))
    })
}

/// The members of `json`, failing unless it is an object.
pub(crate) fn expect_object<T>(json: &Value) -> Result<&serde_json::Map<String, Value>> {
    json.as_object().ok_or_else(|| {
        Error::decode_failed::<T>(format!("expected a JSON object, found `{}`", json))
    })
}

/// Decodes every element of the array `json` with `decode`.
pub(crate) fn decode_each<T, E>(
    json: &Value,
    decode: impl Fn(&Value) -> Result<E>,
) -> Result<Vec<E>> {
    expect_array::<T>(json)?.iter().map(decode).collect()
}
