use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Wire names of the provider operations the bridge exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    Accounts,
    RequestAccounts,
    GasPrice,
    BlockNumber,
    ChainId,
    GetBalance,
    Call,
    GetTransactionReceipt,
    SendTransaction,
    PersonalSign,
    SwitchChain,
}

impl RpcMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            RpcMethod::Accounts => "eth_accounts",
            RpcMethod::RequestAccounts => "eth_requestAccounts",
            RpcMethod::GasPrice => "eth_gasPrice",
            RpcMethod::BlockNumber => "eth_blockNumber",
            RpcMethod::ChainId => "eth_chainId",
            RpcMethod::GetBalance => "eth_getBalance",
            RpcMethod::Call => "eth_call",
            RpcMethod::GetTransactionReceipt => "eth_getTransactionReceipt",
            RpcMethod::SendTransaction => "eth_sendTransaction",
            RpcMethod::PersonalSign => "personal_sign",
            RpcMethod::SwitchChain => "wallet_switchEthereumChain",
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized result of one provider operation.
///
/// Exactly one of `data`/`error` is present for success/failure, except that
/// both are absent when an operation has no success payload (chain switch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub method: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl Envelope {
    /// An empty method name becomes `"unknown"`; an error value that is an
    /// object with zero keys is treated as absent.
    pub fn wrap(method: &str, success: bool, data: Option<Value>, error: Option<Value>) -> Self {
        let method = if method.is_empty() { "unknown" } else { method };
        let error = error.filter(|e| !matches!(e, Value::Object(map) if map.is_empty()));
        Self {
            method: method.to_owned(),
            success,
            data,
            error,
        }
    }

    /// Collapses the envelope into a `Result`. Success with no payload yields
    /// `Value::Null`.
    pub fn into_result(self) -> Result<Value, EnvelopeError> {
        if !self.success {
            return Err(self.failure());
        }
        Ok(self.data.unwrap_or(Value::Null))
    }

    /// Typed access to the success payload.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(self.failure());
        }
        serde_json::from_value(self.data.clone().unwrap_or(Value::Null)).map_err(|e| {
            EnvelopeError {
                method: self.method.clone(),
                message: format!("payload decode failed: {e}"),
            }
        })
    }

    fn failure(&self) -> EnvelopeError {
        EnvelopeError {
            method: self.method.clone(),
            message: error_message(self.error.as_ref()),
        }
    }
}

fn error_message(error: Option<&Value>) -> String {
    match error {
        Some(Value::String(message)) => message.clone(),
        Some(value) => match value.get("message").and_then(|m| m.as_str()) {
            Some(message) => message.to_owned(),
            None => "Something went wrong".to_owned(),
        },
        None => "Something went wrong".to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{method}]: {message}")]
pub struct EnvelopeError {
    pub method: String,
    pub message: String,
}

/// Query for `eth_getBalance`. Defaults: empty address, `"latest"` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceQuery {
    pub address: String,
    pub block: String,
}

impl Default for BalanceQuery {
    fn default() -> Self {
        Self {
            address: String::new(),
            block: "latest".to_owned(),
        }
    }
}

/// Read-only contract call for `eth_call`. Defaults: empty `to`/`data`,
/// `"latest"` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallQuery {
    pub to: String,
    pub data: String,
    pub block: String,
}

impl Default for CallQuery {
    fn default() -> Self {
        Self {
            to: String::new(),
            data: String::new(),
            block: "latest".to_owned(),
        }
    }
}

/// Transaction fields for `eth_sendTransaction`. All fields default to empty
/// strings.
///
/// `from` and `to` are always sent. The optional fields are omitted from the
/// outgoing object entirely when empty rather than sent as empty strings:
/// providers treat an absent field differently from an empty-string field.
/// `calldata` goes out under the `data` key; the gas price key is the literal
/// `gas_price`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub from: String,
    pub to: String,
    pub value: String,
    pub calldata: String,
    pub gas: String,
    pub gas_price: String,
}

impl TransactionDraft {
    /// The provider-facing transaction object.
    pub fn params(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("from".to_owned(), Value::String(self.from.clone()));
        object.insert("to".to_owned(), Value::String(self.to.clone()));
        if !self.value.is_empty() {
            object.insert("value".to_owned(), Value::String(self.value.clone()));
        }
        if !self.calldata.is_empty() {
            object.insert("data".to_owned(), Value::String(self.calldata.clone()));
        }
        if !self.gas.is_empty() {
            object.insert("gas".to_owned(), Value::String(self.gas.clone()));
        }
        if !self.gas_price.is_empty() {
            object.insert("gas_price".to_owned(), Value::String(self.gas_price.clone()));
        }
        Value::Object(object)
    }
}

/// Message-signing request for `personal_sign`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignRequest {
    pub message: String,
    pub address: String,
}

/// Receipt payload of `eth_getTransactionReceipt`, decodable via
/// [`Envelope::decode_data`]. Quantities stay hex strings as the provider
/// returns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub block_hash: String,
    pub block_number: String,
    pub contract_address: Option<String>,
    pub cumulative_gas_used: String,
    pub from: String,
    pub gas_used: String,
    pub blob_gas_used: Option<String>,
    pub effective_gas_price: String,
    pub blob_gas_price: Option<String>,
    pub logs_bloom: String,
    pub status: String,
    pub to: String,
    pub transaction_hash: String,
    pub transaction_index: String,
}
