use serde_json::{json, Value};

use crate::domain::{BalanceQuery, CallQuery, Envelope, RpcMethod, SignRequest, TransactionDraft};
use crate::ports::ProviderPort;

/// The fixed catalog of provider operations over an injected [`ProviderPort`].
///
/// Every operation performs exactly one provider request and always resolves
/// with an [`Envelope`]; failures are folded into the envelope rather than
/// returned as errors. Inputs pass through verbatim, so malformed values
/// surface only as provider-reported errors.
pub struct EtherBridge<P> {
    provider: P,
}

impl<P: ProviderPort> EtherBridge<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn eth_accounts(&self) -> Envelope {
        self.dispatch(RpcMethod::Accounts, json!([])).await
    }

    pub async fn eth_request_accounts(&self) -> Envelope {
        self.dispatch(RpcMethod::RequestAccounts, json!([])).await
    }

    pub async fn eth_gas_price(&self) -> Envelope {
        self.dispatch(RpcMethod::GasPrice, json!([])).await
    }

    pub async fn eth_block_number(&self) -> Envelope {
        self.dispatch(RpcMethod::BlockNumber, json!([])).await
    }

    pub async fn eth_chain_id(&self) -> Envelope {
        self.dispatch(RpcMethod::ChainId, json!([])).await
    }

    pub async fn eth_get_balance(&self, query: BalanceQuery) -> Envelope {
        self.dispatch(RpcMethod::GetBalance, json!([query.address, query.block]))
            .await
    }

    pub async fn eth_call(&self, query: CallQuery) -> Envelope {
        self.dispatch(
            RpcMethod::Call,
            json!([{ "to": query.to, "data": query.data }, query.block]),
        )
        .await
    }

    pub async fn eth_get_transaction_receipt(&self, transaction_hash: &str) -> Envelope {
        self.dispatch(RpcMethod::GetTransactionReceipt, json!([transaction_hash]))
            .await
    }

    pub async fn eth_send_transaction(&self, draft: TransactionDraft) -> Envelope {
        self.dispatch(RpcMethod::SendTransaction, Value::Array(vec![draft.params()]))
            .await
    }

    pub async fn personal_sign(&self, request: SignRequest) -> Envelope {
        self.dispatch(
            RpcMethod::PersonalSign,
            json!([request.message, request.address]),
        )
        .await
    }

    /// Chain switches carry no payload on success.
    pub async fn wallet_switch_ethereum_chain(&self, chain_id: &str) -> Envelope {
        let method = RpcMethod::SwitchChain;
        match self
            .provider
            .request(method.as_str(), json!([{ "chainId": chain_id }]))
            .await
        {
            Ok(_) => Envelope::wrap(method.as_str(), true, None, None),
            Err(e) => Envelope::wrap(method.as_str(), false, None, Some(e.into_value())),
        }
    }

    async fn dispatch(&self, method: RpcMethod, params: Value) -> Envelope {
        match self.provider.request(method.as_str(), params).await {
            Ok(data) => Envelope::wrap(method.as_str(), true, Some(data), None),
            Err(e) => Envelope::wrap(method.as_str(), false, None, Some(e.into_value())),
        }
    }
}
