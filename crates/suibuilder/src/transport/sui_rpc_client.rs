use crate::prelude::*;

/// An [`AsyncTransport`] posting JSON-RPC requests to a Sui full node.
pub struct SuiRpcClient {
    config: ClientConfig,
    client: reqwest::Client,
    id_stepper: IdStepper,
}

impl SuiRpcClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::default(),
            id_stepper: IdStepper::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The envelope [`Self::call`] would post for `call`, consuming an id.
    pub fn envelope(&self, call: &RpcCall) -> Result<RpcRequest> {
        RpcRequest::new(call, self.id_stepper.next())
    }

    /// Posts `call` and returns the raw `result`.
    pub async fn call(&self, call: &RpcCall) -> Result<Value> {
        let request = self.envelope(call)?;

        #[cfg(debug_assertions)]
        if let Ok(json) = serde_json::to_string_pretty(&request) {
            debug!("👻 Sui request JSON: {}", json);
        }

        let response = self
            .client
            .post(self.config.rpc_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::send_request(call.method(), e))?;

        let status = response.status();
        if status.is_success() {
            info!("Sui response status: {:?}", status);
        } else {
            warn!("Sui response status: {:?}", status);
        }
        let body_bytes = response
            .bytes()
            .await
            .map_err(Error::read_bytes_of_response)?;

        #[cfg(debug_assertions)]
        debug!(
            "🔮 Sui RAW response: Status = {}, Body = {:?}",
            status,
            String::from_utf8_lossy(&body_bytes)
        );

        if !status.is_success() {
            return Err(Error::UnexpectedHttpStatus {
                method: call.method().to_owned(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body_bytes).into_owned(),
            });
        }

        let response: RpcResponse = serde_json::from_slice(&body_bytes)
            .map_err(|e| Error::malformed_envelope(call.method(), e))?;
        response.into_result(call.method())
    }
}

#[async_trait::async_trait]
impl AsyncTransport for SuiRpcClient {
    async fn send(&self, method: &str, params: &Value) -> Result<Value> {
        self.call(&RpcCall::new(method, params.clone())).await
    }
}
