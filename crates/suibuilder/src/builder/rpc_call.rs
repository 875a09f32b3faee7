use crate::prelude::*;

/// A method name with its laid out parameters, what a transport sends.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct RpcCall {
    #[getset(get = "pub")]
    method: String,

    #[getset(get = "pub")]
    params: Value,
}

impl RpcCall {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}
