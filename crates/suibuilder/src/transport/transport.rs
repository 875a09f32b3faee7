use crate::prelude::*;

/// Sends a method with its laid out parameters to a node and returns the raw
/// `result` JSON, blocking the caller.
pub trait Transport {
    fn send(&self, method: &str, params: &Value) -> Result<Value>;
}

impl<F> Transport for F
where
    F: Fn(&str, &Value) -> Result<Value>,
{
    fn send(&self, method: &str, params: &Value) -> Result<Value> {
        self(method, params)
    }
}

/// Async counterpart of [`Transport`].
#[async_trait::async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn send(&self, method: &str, params: &Value) -> Result<Value>;
}
