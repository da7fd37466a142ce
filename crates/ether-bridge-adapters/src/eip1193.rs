//! EIP-1193 provider adapter.
//!
//! Resolves the externally owned wallet provider at request time and forwards
//! `request(method, params)` calls to it. Outside the browser the provider is
//! reached through a configured HTTP JSON-RPC endpoint; without one, a
//! deterministic fallback serves fixed values so consumers run without a live
//! wallet.

use alloy::primitives::{hex, keccak256};
use serde_json::Value;

use ether_bridge_core::{PortError, ProviderPort};

use crate::config::BridgeConfig;

const DETERMINISTIC_ACCOUNT: &str = "0x1000000000000000000000000000000000000001";

#[derive(Debug, Clone)]
pub struct Eip1193Adapter {
    mode: ProviderMode,
}

#[derive(Debug, Clone)]
enum ProviderMode {
    Disabled(String),
    Deterministic,
    #[cfg(not(target_arch = "wasm32"))]
    Proxy(ProxyRuntime),
    #[cfg(target_arch = "wasm32")]
    Browser,
}

#[derive(Debug, Clone)]
#[cfg(not(target_arch = "wasm32"))]
struct ProxyRuntime {
    base_url: String,
    client: reqwest::Client,
}

impl Default for Eip1193Adapter {
    fn default() -> Self {
        Self::with_config(BridgeConfig::from_env())
    }
}

impl Eip1193Adapter {
    pub fn with_config(config: BridgeConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        let mode = if config.strict_runtime_required() || browser_provider_available() {
            // The binding is dereferenced per call; in the production profile
            // its absence must surface as a per-request failure, not as a
            // silent deterministic fallback.
            ProviderMode::Browser
        } else {
            ProviderMode::Deterministic
        };

        #[cfg(not(target_arch = "wasm32"))]
        let mode = if let Some(ref base_url) = config.proxy_url {
            let timeout = std::time::Duration::from_millis(config.request_timeout_ms);
            match reqwest::Client::builder().timeout(timeout).build() {
                Ok(client) => ProviderMode::Proxy(ProxyRuntime {
                    base_url: base_url.clone(),
                    client,
                }),
                Err(e) => {
                    if config.strict_runtime_required() {
                        ProviderMode::Disabled(format!(
                            "failed to initialize provider endpoint client in production profile: {e}"
                        ))
                    } else {
                        ProviderMode::Deterministic
                    }
                }
            }
        } else if config.strict_runtime_required() {
            ProviderMode::Disabled(
                "EIP-1193 provider endpoint not configured in production runtime profile"
                    .to_owned(),
            )
        } else {
            ProviderMode::Deterministic
        };

        Self { mode }
    }
}

impl ProviderPort for Eip1193Adapter {
    async fn request(&self, method: &str, params: Value) -> Result<Value, PortError> {
        tracing::debug!(method, "dispatching provider request");
        let result = match &self.mode {
            ProviderMode::Disabled(reason) => Err(PortError::Unavailable(reason.clone())),
            ProviderMode::Deterministic => deterministic_response(method, &params),
            #[cfg(not(target_arch = "wasm32"))]
            ProviderMode::Proxy(proxy) => proxy_call(proxy, method, &params).await,
            #[cfg(target_arch = "wasm32")]
            ProviderMode::Browser => browser_request(method, &params).await,
        };
        if let Err(ref e) = result {
            tracing::warn!(method, error = %e, "provider request failed");
        }
        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn proxy_call(
    proxy: &ProxyRuntime,
    method: &str,
    params: &Value,
) -> Result<Value, PortError> {
    let payload = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    });
    let response = proxy
        .client
        .post(&proxy.base_url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| PortError::Transport(format!("provider endpoint request failed: {e}")))?;
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| PortError::Transport(format!("provider endpoint json decode failed: {e}")))?;
    if !status.is_success() {
        return Err(PortError::Transport(format!(
            "provider endpoint status {status}: {body}"
        )));
    }
    if let Some(err) = body.get("error") {
        return Err(PortError::Rejected(err.clone()));
    }
    body.get("result")
        .cloned()
        .ok_or_else(|| PortError::Transport("provider endpoint missing result".to_owned()))
}

fn deterministic_response(method: &str, params: &Value) -> Result<Value, PortError> {
    match method {
        "eth_accounts" | "eth_requestAccounts" => {
            Ok(serde_json::json!([DETERMINISTIC_ACCOUNT]))
        }
        "eth_chainId" => Ok(Value::String("0x1".to_owned())),
        "eth_gasPrice" => Ok(Value::String("0x3b9aca00".to_owned())),
        "eth_blockNumber" => Ok(Value::String("0x1".to_owned())),
        "eth_getBalance" => Ok(Value::String("0x0".to_owned())),
        "eth_call" => Ok(Value::String("0x".to_owned())),
        "eth_getTransactionReceipt" => Ok(Value::Null),
        "eth_sendTransaction" => deterministic_digest(params, false),
        "personal_sign" => deterministic_digest(params, true),
        "wallet_switchEthereumChain" => Ok(Value::Null),
        other => Err(PortError::Rejected(serde_json::json!({
            "code": -32601,
            "message": format!("the method {other} does not exist/is not available"),
        }))),
    }
}

// Keccak of the canonical params keeps the fallback stable across runs: the
// same request always yields the same pseudo hash or signature.
fn deterministic_digest(params: &Value, as_signature: bool) -> Result<Value, PortError> {
    let canonical = serde_json::to_vec(params)
        .map_err(|e| PortError::Transport(format!("params serialization failed: {e}")))?;
    let hash = keccak256(canonical);
    if !as_signature {
        return Ok(Value::String(format!("0x{}", hex::encode(hash))));
    }
    let mut sig = Vec::with_capacity(65);
    sig.extend_from_slice(hash.as_slice());
    sig.extend_from_slice(hash.as_slice());
    sig.push(27);
    Ok(Value::String(format!("0x{}", hex::encode(sig))))
}

#[cfg(target_arch = "wasm32")]
async fn browser_request(method: &str, params: &Value) -> Result<Value, PortError> {
    use wasm_bindgen::JsCast;

    let provider = browser_provider()?;
    let request_fn = get_prop(&provider, "request")
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| {
            PortError::Unavailable("window.ethereum.request is unavailable".to_owned())
        })?;

    let request = serde_json::json!({
        "method": method,
        "params": params,
    });
    let request_js = serde_wasm_bindgen::to_value(&request)
        .map_err(|e| PortError::Transport(format!("failed to encode provider request: {e}")))?;
    let promise_js = request_fn
        .call1(&provider, &request_js)
        .map_err(|e| PortError::Transport(format!("provider request dispatch failed: {e:?}")))?;
    let promise = promise_js
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| PortError::Transport("provider request did not return a Promise".to_owned()))?;
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(result_js) => serde_wasm_bindgen::from_value(result_js)
            .map_err(|e| PortError::Transport(format!("failed to decode provider response: {e}"))),
        // A rejection value that decodes to JSON travels verbatim; anything
        // else degrades to a transport error.
        Err(rejection) => Err(
            match serde_wasm_bindgen::from_value::<Value>(rejection.clone()) {
                Ok(value) => PortError::Rejected(value),
                Err(_) => {
                    PortError::Transport(format!("provider request rejected: {rejection:?}"))
                }
            },
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_provider_available() -> bool {
    browser_provider().is_ok()
}

#[cfg(target_arch = "wasm32")]
fn browser_provider() -> Result<wasm_bindgen::JsValue, PortError> {
    let window =
        web_sys::window().ok_or_else(|| PortError::Unavailable("missing window".to_owned()))?;
    let provider = get_prop(&window.into(), "ethereum")?;
    if provider.is_null() || provider.is_undefined() {
        return Err(PortError::Unavailable("window.ethereum missing".to_owned()));
    }
    Ok(provider)
}

#[cfg(target_arch = "wasm32")]
fn get_prop(target: &wasm_bindgen::JsValue, key: &str) -> Result<wasm_bindgen::JsValue, PortError> {
    js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(key))
        .map_err(|e| PortError::Transport(format!("read provider property {key} failed: {e:?}")))
}
