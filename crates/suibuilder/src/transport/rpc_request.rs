use crate::prelude::*;

/// The JSON-RPC 2.0 envelope posted to a Sui full node.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct RpcRequest {
    #[builder(default = "2.0".to_string())]
    #[getset(get = "pub")]
    jsonrpc: String,

    #[getset(get = "pub")]
    method: String,

    #[getset(get = "pub")]
    params: Value,

    #[getset(get = "pub")]
    id: u64,
}

impl RpcRequest {
    pub fn new(call: &RpcCall, id: u64) -> Result<Self> {
        RpcRequestBuilder::default()
            .method(call.method().clone())
            .params(call.params().clone())
            .id(id)
            .build()
            .map_err(Error::invalid_rpc_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn envelope() {
        let call = RpcCall::new("sui_getObject", serde_json::json!(["0x5"]));
        let sut = RpcRequest::new(&call, 7).unwrap();
        assert_json_snapshot!(sut, @r#"
        {
          "jsonrpc": "2.0",
          "method": "sui_getObject",
          "params": [
            "0x5"
          ],
          "id": 7
        }
        "#);
    }
}
