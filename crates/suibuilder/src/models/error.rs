use crate::prelude::*;

/// All errors which can occur while building a Sui JSON-RPC request,
/// sending it, or decoding its response.
#[derive(Debug, ThisError, IsVariant, PartialEq, Eq, Clone)]
pub enum Error {
    // ========================================
    // Validation (construction time)
    // ========================================
    /// A required parameter was neither supplied nor has a default.
    #[error("Missing required parameter `{parameter}` for method `{method}`")]
    MissingRequiredParameter { method: String, parameter: String },

    /// A supplied value could not be coerced into the declared kind.
    #[error("Invalid value for parameter `{parameter}`, expected {kind}: {underlying}")]
    InvalidValueForKind {
        parameter: String,
        kind: String,
        underlying: String,
    },

    /// More positional arguments than positional parameters.
    #[error("Too many arguments for method `{method}`, expected at most {expected}, got {received}")]
    TooManyArguments {
        method: String,
        expected: usize,
        received: usize,
    },

    /// A named argument does not match any declared parameter.
    #[error("Unexpected parameter `{parameter}` for method `{method}`")]
    UnexpectedParameter { method: String, parameter: String },

    /// Same parameter supplied both by position and by name.
    #[error("Parameter `{parameter}` of method `{method}` supplied more than once")]
    DuplicateArgument { method: String, parameter: String },

    /// String is not a `0x` prefixed hex identifier of at most 32 bytes.
    #[error("Malformed {kind}: `{bad_value}`")]
    MalformedHexIdentifier { kind: String, bad_value: String },

    /// String is not a base 10 integer.
    #[error("Not an integer: `{bad_value}`")]
    InvalidInteger { bad_value: String },

    // ========================================
    // Decode (post response)
    // ========================================
    /// Failed to reconstruct a response model from raw JSON.
    #[error("Failed to decode response to type `{kind}`, underlying error: `{underlying}`")]
    DecodeFailed { kind: String, underlying: String },

    // ========================================
    // Transport
    // ========================================
    /// Failed to assemble the JSON-RPC envelope.
    #[error("Invalid JSON-RPC request: {underlying}")]
    InvalidRpcRequest { underlying: String },

    /// Failed to send the JSON-RPC request.
    #[error("Failed to send request, method: `{method}`, underlying error: `{underlying}`")]
    SendRequest { method: String, underlying: String },

    /// Failed to read the response body.
    #[error("Failed to read response Bytes, underlying error: `{underlying}`")]
    ReadBytesOfResponse { underlying: String },

    /// Node answered with a non 2xx HTTP status.
    #[error("Unexpected HTTP status {status} for `{method}`, body: `{body}`")]
    UnexpectedHttpStatus {
        method: String,
        status: u16,
        body: String,
    },

    /// Response body is not a JSON-RPC envelope.
    #[error("Malformed JSON-RPC envelope for `{method}`, underlying error: `{underlying}`")]
    MalformedEnvelope { method: String, underlying: String },

    /// Node answered with a JSON-RPC error object.
    #[error("Node rejected `{method}`, code: {code}, message: `{message}`")]
    NodeRejectedRequest {
        method: String,
        code: i64,
        message: String,
    },

    /// Node answered with neither `result` nor `error`.
    #[error("Response to `{method}` has no `result`")]
    ResponseMissingResult { method: String },

    /// Opaque failure reported by a custom transport.
    #[error("Transport failed: {0}")]
    Transport(String),

    // ========================================
    // Configuration
    // ========================================
    /// Unknown network name.
    #[error("Unknown network `{bad_value}`, expected one of mainnet, testnet, devnet, localnet")]
    UnknownNetwork { bad_value: String },

    /// No builder with that name in the catalog.
    #[error("Unknown builder `{name}`, run with `--list` to see all builders")]
    UnknownBuilder { name: String },

    /// RPC url is not http(s).
    #[error("Invalid RPC url `{bad_value}`, expected http:// or https://")]
    InvalidRpcUrl { bad_value: String },
}

// ========================================
// Public Implementation
// ========================================
impl Error {
    pub fn decode_failed<T>(e: impl std::fmt::Display) -> Self {
        Error::DecodeFailed {
            kind: std::any::type_name::<T>().to_owned(),
            underlying: e.to_string(),
        }
    }

    pub fn invalid_value(
        parameter: impl Into<String>,
        kind: ValueKind,
        e: impl std::fmt::Display,
    ) -> Self {
        Error::InvalidValueForKind {
            parameter: parameter.into(),
            kind: kind.to_string(),
            underlying: e.to_string(),
        }
    }

    pub fn send_request(method: impl Into<String>, e: impl std::fmt::Display) -> Self {
        Error::SendRequest {
            method: method.into(),
            underlying: e.to_string(),
        }
    }

    pub fn read_bytes_of_response(e: impl std::fmt::Display) -> Self {
        Error::ReadBytesOfResponse {
            underlying: e.to_string(),
        }
    }

    pub fn malformed_envelope(method: impl Into<String>, e: impl std::fmt::Display) -> Self {
        Error::MalformedEnvelope {
            method: method.into(),
            underlying: e.to_string(),
        }
    }

    pub fn invalid_rpc_request(e: impl std::fmt::Display) -> Self {
        Error::InvalidRpcRequest {
            underlying: e.to_string(),
        }
    }

    /// Raised while constructing a builder, before any network activity.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredParameter { .. }
                | Error::InvalidValueForKind { .. }
                | Error::TooManyArguments { .. }
                | Error::UnexpectedParameter { .. }
                | Error::DuplicateArgument { .. }
                | Error::MalformedHexIdentifier { .. }
                | Error::InvalidInteger { .. }
        )
    }

    /// Raised when a node response does not match the expected shape.
    pub fn is_decode_error(&self) -> bool {
        self.is_decode_failed()
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidRpcRequest { .. }
                | Error::SendRequest { .. }
                | Error::ReadBytesOfResponse { .. }
                | Error::UnexpectedHttpStatus { .. }
                | Error::MalformedEnvelope { .. }
                | Error::NodeRejectedRequest { .. }
                | Error::ResponseMissingResult { .. }
                | Error::Transport(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failed_names_type() {
        let sut = Error::decode_failed::<SuiCoinBalance>("missing field `coinType`");
        assert!(sut.is_decode_error());
        assert!(!sut.is_validation_error());
        assert!(sut.to_string().contains("SuiCoinBalance"));
    }

    #[test]
    fn taxonomy_is_disjoint() {
        let validation = Error::MissingRequiredParameter {
            method: "sui_getBalance".to_owned(),
            parameter: "owner".to_owned(),
        };
        let transport = Error::Transport("connection reset".to_owned());
        assert!(validation.is_validation_error());
        assert!(!validation.is_transport_error());
        assert!(transport.is_transport_error());
        assert!(!transport.is_decode_error());
    }

    #[test]
    fn bad_envelopes_are_transport_errors() {
        let status = Error::UnexpectedHttpStatus {
            method: "sui_getObject".to_owned(),
            status: 502,
            body: "<html>Bad Gateway</html>".to_owned(),
        };
        let envelope = Error::malformed_envelope("sui_getObject", "expected value at line 1");
        for sut in [status, envelope] {
            assert!(sut.is_transport_error());
            assert!(!sut.is_decode_error());
        }
    }
}
