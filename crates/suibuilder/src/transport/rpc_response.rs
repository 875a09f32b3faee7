use crate::prelude::*;

/// Error member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,

    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// The `result` member, or the node's error for `method`.
    pub fn into_result(self, method: &str) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(Error::NodeRejectedRequest {
                method: method.to_owned(),
                code: error.code,
                message: error.message,
            });
        }
        self.result.ok_or_else(|| Error::ResponseMissingResult {
            method: method.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(json: Value) -> RpcResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn result() {
        let sut = parse(json!({"jsonrpc": "2.0", "id": 1, "result": "1000"}));
        assert_eq!(sut.into_result("sui_getTotalSupply").unwrap(), json!("1000"));
    }

    #[test]
    fn error() {
        let sut = parse(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid params"}
        }));
        assert_eq!(
            sut.into_result("sui_getObject").unwrap_err(),
            Error::NodeRejectedRequest {
                method: "sui_getObject".to_owned(),
                code: -32602,
                message: "Invalid params".to_owned()
            }
        );
    }

    #[test]
    fn missing_result() {
        let sut = parse(json!({"jsonrpc": "2.0", "id": 1}));
        assert!(sut
            .into_result("sui_getObject")
            .unwrap_err()
            .is_response_missing_result());
    }
}
