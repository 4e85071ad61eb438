//! defines the interfaces between the dashboard, the view layer, and the contract gateway

mod action;
mod contract_gateway;
pub mod model;

pub use action::{Action, ActionKind};
pub use contract_gateway::{Contract, ContractCall, ContractGateway, TransactionReceipt};
