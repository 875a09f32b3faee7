use crate::prelude::*;

/// A fully described call of the RPC method `M`: parameters bound,
/// coerced and laid out, plus the decoder for its result.
///
/// Construct through [`RpcMethod::bind`] or the typed constructors of the
/// catalog builders, e.g. `GetObject::new("0x5")`.
pub struct SuiBuilder<M: RpcMethod> {
    fields: BoundFields,
    parameters: Value,
    handler: HandlerDescriptor<M::Output>,
    method: PhantomData<M>,
}

impl<M: RpcMethod> SuiBuilder<M> {
    /// Binds `arguments` against `M::PARAMS`, runs `M::finalize` and lays
    /// out the parameters.
    pub fn bind(arguments: Arguments) -> Result<Self> {
        let provisional = bind_parameters(M::METHOD, M::PARAMS, arguments)?;
        let fields = M::finalize(provisional);
        let parameters = M::CONVENTION.payload(&fields);
        debug!("Built `{}` with params: {}", M::METHOD, parameters);
        Ok(Self {
            fields,
            parameters,
            handler: M::handler(),
            method: PhantomData,
        })
    }

    pub fn method_name(&self) -> &'static str {
        M::METHOD
    }

    /// The JSON-RPC `params` array.
    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    pub fn fields(&self) -> &BoundFields {
        &self.fields
    }

    /// Bound value of parameter `name`, `None` if not declared.
    pub fn field(&self, name: &str) -> Option<&CoercedValue> {
        self.fields.field(name)
    }

    pub fn handler(&self) -> &HandlerDescriptor<M::Output> {
        &self.handler
    }

    /// Reconstructs the typed result from the raw `result` JSON.
    pub fn decode(&self, raw: &Value) -> Result<M::Output> {
        self.handler.decode(raw)
    }

    pub fn to_call(&self) -> RpcCall {
        RpcCall::new(M::METHOD, self.parameters.clone())
    }

    /// Sends through a blocking transport and decodes the result.
    pub fn execute<T: Transport + ?Sized>(&self, transport: &T) -> Result<M::Output> {
        let raw = Transport::send(transport, M::METHOD, &self.parameters)?;
        self.decode(&raw)
    }

    /// Sends through an async transport and decodes the result.
    pub async fn execute_async<T: AsyncTransport + ?Sized>(
        &self,
        transport: &T,
    ) -> Result<M::Output> {
        let raw = AsyncTransport::send(transport, M::METHOD, &self.parameters).await?;
        self.decode(&raw)
    }
}

impl<M: RpcMethod> Clone for SuiBuilder<M> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            parameters: self.parameters.clone(),
            handler: self.handler,
            method: PhantomData,
        }
    }
}

impl<M: RpcMethod> std::fmt::Debug for SuiBuilder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiBuilder")
            .field("method", &M::METHOD)
            .field("parameters", &self.parameters)
            .field("handler", &self.handler)
            .finish()
    }
}
