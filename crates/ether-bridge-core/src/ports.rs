use std::future::Future;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider rejected request: {0}")]
    Rejected(Value),
    #[error("transport error: {0}")]
    Transport(String),
}

impl PortError {
    /// The envelope-facing error value. Provider rejections pass through
    /// verbatim; other failures surface as a `{"message": ...}` object.
    pub fn into_value(self) -> Value {
        match self {
            PortError::Rejected(value) => value,
            other => serde_json::json!({ "message": other.to_string() }),
        }
    }
}

/// The injected wallet-provider dependency: one asynchronous capability,
/// submit a method name plus parameters and settle with a result or a
/// provider-defined error. The bridge never constructs or tears down the
/// underlying provider.
pub trait ProviderPort {
    fn request(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<Value, PortError>>;
}
