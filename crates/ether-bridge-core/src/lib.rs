pub mod bridge;
pub mod domain;
pub mod ports;
pub mod quantity;

pub use bridge::EtherBridge;
pub use domain::{
    BalanceQuery, CallQuery, Envelope, EnvelopeError, RpcMethod, SignRequest, TransactionDraft,
    TransactionReceipt,
};
pub use ports::{PortError, ProviderPort};
