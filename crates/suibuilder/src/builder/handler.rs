use crate::prelude::*;

/// Name of the reconstruction routine a decoding type exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant, derive_more::Display)]
pub enum EntryPoint {
    #[display("from_dict")]
    FromDict,
    #[display("factory")]
    Factory,
    #[display("ingest_data")]
    IngestData,
    /// Bare scalar result, returned as is.
    #[display("none")]
    Passthrough,
}

/// Decoding types built straight from a JSON object, field by field.
pub trait FromDict: DeserializeOwned {
    fn from_dict(json: &Value) -> Result<Self> {
        if !json.is_object() {
            return Err(Error::decode_failed::<Self>(format!(
                "expected a JSON object, found `{}`",
                json
            )));
        }
        serde_json::from_value(json.clone()).map_err(Error::decode_failed::<Self>)
    }
}

/// Decoding types which pick their shape by inspecting the JSON, e.g.
/// a found object vs an error record.
pub trait Factory: Sized {
    fn factory(json: &Value) -> Result<Self>;
}

/// Decoding types aggregated from a collection, e.g. a list of balances or
/// a map of modules.
pub trait IngestData: Sized {
    fn ingest_data(json: &Value) -> Result<Self>;
}

/// Pairs a decoding type with its entry point.
pub struct HandlerDescriptor<T> {
    type_name: &'static str,
    entry_point: EntryPoint,
    decode: fn(&Value) -> Result<T>,
}

impl<T> HandlerDescriptor<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn entry_point(&self) -> EntryPoint {
        self.entry_point
    }

    /// Runs the entry point on `raw`.
    pub fn decode(&self, raw: &Value) -> Result<T> {
        (self.decode)(raw)
    }
}

impl<T: FromDict> HandlerDescriptor<T> {
    pub fn from_dict() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            entry_point: EntryPoint::FromDict,
            decode: T::from_dict,
        }
    }
}

impl<T: Factory> HandlerDescriptor<T> {
    pub fn factory() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            entry_point: EntryPoint::Factory,
            decode: T::factory,
        }
    }
}

impl<T: IngestData> HandlerDescriptor<T> {
    pub fn ingest_data() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            entry_point: EntryPoint::IngestData,
            decode: T::ingest_data,
        }
    }
}

impl HandlerDescriptor<Value> {
    pub fn passthrough() -> Self {
        Self {
            type_name: std::any::type_name::<Value>(),
            entry_point: EntryPoint::Passthrough,
            decode: |raw| Ok(raw.clone()),
        }
    }
}

impl<T> Clone for HandlerDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HandlerDescriptor<T> {}

impl<T> std::fmt::Debug for HandlerDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerDescriptor")
            .field("type_name", &self.type_name)
            .field("entry_point", &self.entry_point)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn passthrough_returns_raw() {
        let sut = HandlerDescriptor::passthrough();
        assert_eq!(sut.entry_point().to_string(), "none");
        assert_eq!(sut.decode(&json!("1000")).unwrap(), json!("1000"));
    }

    #[test]
    fn from_dict_rejects_non_objects() {
        let sut = HandlerDescriptor::<SuiCoinBalance>::from_dict();
        assert_eq!(sut.entry_point(), EntryPoint::FromDict);
        assert!(sut.type_name().ends_with("SuiCoinBalance"));
        assert!(sut.decode(&json!([1, 2])).unwrap_err().is_decode_error());
    }
}
