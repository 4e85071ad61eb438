use crate::{
    domain::{
        Address, ChainId, GasPrice, StakePosition, TipJar, TreasuryParameters, Wei,
    },
    errors::DashboardResult,
};

/// Provider, signer, and contract call plumbing.
///
/// Implementations are supplied by the host: they own all I/O, including the fixed contract
/// addresses and waiting for transaction receipts. Every read is expected to reflect the latest
/// confirmed chain state.
pub trait ContractGateway {
    /// accounts the provider already exposes, without prompting the user (`eth_accounts`)
    ///
    /// ## Errors
    /// [DashboardError::ProviderUnavailable](crate::errors::DashboardError::ProviderUnavailable)
    /// if there is no injected wallet provider
    fn accounts(&self) -> DashboardResult<Vec<String>>;

    /// prompts the user to connect the wallet (`eth_requestAccounts`)
    fn request_accounts(&mut self) -> DashboardResult<Vec<String>>;

    fn chain_id(&self) -> DashboardResult<ChainId>;

    /// asks the wallet to switch networks (`wallet_switchEthereumChain`)
    fn switch_chain(&mut self, chain_id: ChainId) -> DashboardResult<()>;

    /// wallet balance
    fn balance(&self, account: &Address) -> DashboardResult<Wei>;

    fn gas_price(&self) -> DashboardResult<GasPrice>;

    /// funds the account deposited into the stake contract that are not staked
    fn app_balance(&self, account: &Address) -> DashboardResult<Wei>;

    fn stake_position(&self, account: &Address) -> DashboardResult<StakePosition>;

    fn treasury_parameters(&self) -> DashboardResult<TreasuryParameters>;

    fn tip_jar(&self) -> DashboardResult<TipJar>;

    /// signs and sends the transaction, and waits for its receipt
    ///
    /// ## Errors
    /// - [DashboardError::TransactionRejected](crate::errors::DashboardError::TransactionRejected)
    ///   if the user rejected signing
    /// - [DashboardError::TransactionReverted](crate::errors::DashboardError::TransactionReverted)
    ///   if the transaction failed on chain
    fn send(&mut self, call: ContractCall) -> DashboardResult<TransactionReceipt>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
    Stake,
    TipJar,
}

/// Contract write issued on behalf of the connected account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// plain value transfer to the stake contract
    Deposit { amount: Wei },
    Stake { amount: Wei },
    Unstake,
    Withdraw,
    BuyCoffee {
        name: String,
        message: String,
        value: Wei,
    },
    WithdrawTips,
    SetMyselfAsRecipient,
}

impl ContractCall {
    pub fn contract(&self) -> Contract {
        match self {
            ContractCall::Deposit { .. }
            | ContractCall::Stake { .. }
            | ContractCall::Unstake
            | ContractCall::Withdraw => Contract::Stake,
            ContractCall::BuyCoffee { .. }
            | ContractCall::WithdrawTips
            | ContractCall::SetMyselfAsRecipient => Contract::TipJar,
        }
    }

    /// contract method name - `None` for a plain value transfer
    pub fn method(&self) -> Option<&'static str> {
        match self {
            ContractCall::Deposit { .. } => None,
            ContractCall::Stake { .. } => Some("stake"),
            ContractCall::Unstake => Some("unstake"),
            ContractCall::Withdraw => Some("withdraw"),
            ContractCall::BuyCoffee { .. } => Some("buyCoffee"),
            ContractCall::WithdrawTips => Some("withdraw"),
            ContractCall::SetMyselfAsRecipient => Some("setMyselfAsRecipient"),
        }
    }

    /// value attached to the transaction
    pub fn value(&self) -> Wei {
        match self {
            ContractCall::Deposit { amount } => *amount,
            ContractCall::BuyCoffee { value, .. } => *value,
            _ => Wei(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub tx_hash: String,
}
