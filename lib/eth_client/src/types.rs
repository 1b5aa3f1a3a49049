use jsonrpsee::core::ClientError;

/// Common error type exposed by the crate.
///
/// Every failure of a node query maps to this type; a successful response with a zero value
/// is never represented as an error, and vice versa.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Problem on the Ethereum client side (e.g. bad RPC call, network issues, node-side errors).
    #[error("Request `{method}` to Ethereum node failed: {source}")]
    EthereumGateway {
        method: &'static str,
        #[source]
        source: ClientError,
    },
    /// The node responded, but the response cannot be interpreted.
    #[error("Ethereum node returned invalid response to `{method}`: {reason}")]
    InvalidResponse {
        method: &'static str,
        reason: String,
    },
    /// The client cannot be created for the provided node URL. No request has been sent.
    #[error("Invalid Ethereum node URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: ClientError,
    },
}

impl Error {
    /// Returns the name of the RPC method that failed, or `None` if the failure
    /// happened before any request was sent.
    pub fn method(&self) -> Option<&'static str> {
        match self {
            Self::EthereumGateway { method, .. } | Self::InvalidResponse { method, .. } => {
                Some(*method)
            }
            Self::InvalidUrl { .. } => None,
        }
    }
}

pub type EthClientResult<T> = Result<T, Error>;

/// Adds the failing RPC method name to raw client errors.
pub(crate) trait RpcContext<T> {
    fn rpc_context(self, method: &'static str) -> EthClientResult<T>;
}

impl<T> RpcContext<T> for Result<T, ClientError> {
    fn rpc_context(self, method: &'static str) -> EthClientResult<T> {
        self.map_err(|source| Error::EthereumGateway { method, source })
    }
}
