use crate::prelude::*;

/// Filter for `sui_queryTransactions`, sent as a single key map.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum TransactionQuery {
    /// Calls into a package, optionally narrowed to a module and function.
    /// `function` without `module` is not accepted by nodes.
    MoveFunction {
        package: ObjectId,
        module: Option<String>,
        function: Option<String>,
    },
    InputObject(ObjectId),
    MutatedObject(ObjectId),
    FromAddress(SuiAddress),
    ToAddress(SuiAddress),
}

impl TransactionQuery {
    pub fn move_function(
        package: &str,
        module: Option<&str>,
        function: Option<&str>,
    ) -> Result<Self> {
        Ok(Self::MoveFunction {
            package: package.parse()?,
            module: module.map(str::to_owned),
            function: function.map(str::to_owned),
        })
    }

    pub fn input_object(object_id: &str) -> Result<Self> {
        object_id.parse().map(Self::InputObject)
    }

    pub fn mutated_object(object_id: &str) -> Result<Self> {
        object_id.parse().map(Self::MutatedObject)
    }

    pub fn from_address(address: &str) -> Result<Self> {
        address.parse().map(Self::FromAddress)
    }

    pub fn to_address(address: &str) -> Result<Self> {
        address.parse().map(Self::ToAddress)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::MoveFunction { .. } => "MoveFunction",
            Self::InputObject(_) => "InputObject",
            Self::MutatedObject(_) => "MutatedObject",
            Self::FromAddress(_) => "FromAddress",
            Self::ToAddress(_) => "ToAddress",
        }
    }

    /// The single key wire map, unset `module` and `function` are left out.
    pub fn to_coerced(&self) -> CoercedValue {
        let payload = match self {
            Self::MoveFunction {
                package,
                module,
                function,
            } => {
                let mut entries = vec![("package", CoercedValue::from(package.clone()))];
                if let Some(module) = module {
                    entries.push(("module", module.as_str().into()));
                }
                if let Some(function) = function {
                    entries.push(("function", function.as_str().into()));
                }
                CoercedValue::map(entries)
            }
            Self::InputObject(object_id) | Self::MutatedObject(object_id) => {
                object_id.clone().into()
            }
            Self::FromAddress(address) | Self::ToAddress(address) => address.clone().into(),
        };
        CoercedValue::tagged(self.tag(), payload)
    }
}

impl Serialize for TransactionQuery {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_coerced().serialize(serializer)
    }
}

impl From<TransactionQuery> for Argument {
    fn from(value: TransactionQuery) -> Self {
        Self::Typed(value.to_coerced())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn move_function_omits_unset() {
        let sut = TransactionQuery::move_function("0x2", Some("pay"), None).unwrap();
        assert_eq!(
            serde_json::to_value(&sut).unwrap(),
            json!({"MoveFunction": {"package": "0x2", "module": "pay"}})
        );
    }

    #[test]
    fn single_identifier_payloads() {
        assert_eq!(
            TransactionQuery::mutated_object("0xA").unwrap().to_coerced().to_json(),
            json!({"MutatedObject": "0xa"})
        );
        assert_eq!(
            TransactionQuery::to_address("0x7").unwrap().to_coerced().to_json(),
            json!({"ToAddress": "0x7"})
        );
    }

    #[test]
    fn malformed_identifier_fails() {
        assert!(TransactionQuery::from_address("alice")
            .unwrap_err()
            .is_malformed_hex_identifier());
    }
}
