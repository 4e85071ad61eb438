//! centralizes all error messages

use crate::domain::ChainId;
use thiserror::Error;

pub mod wallet {
    pub const WALLET_NOT_CONNECTED: &str = "connect a wallet first";

    pub const NO_ACCOUNT_FOUND: &str = "No address found";

    pub const NETWORK_MISMATCH: &str = "switch the wallet to the target network first";

    pub const BALANCE_NOT_LOADED: &str = "wallet balance has not been loaded yet";
}

pub mod staking {
    pub const ZERO_AMOUNT: &str = "amount must be greater than zero";

    pub const INSUFFICIENT_WALLET_BALANCE: &str = "wallet balance is too low for the deposit";

    pub const INSUFFICIENT_APP_BALANCE: &str = "app balance is too low to fulfill stake request";

    pub const ALREADY_STAKED: &str = "funds are already staked - unstake first";

    pub const NOT_STAKED: &str = "there is nothing staked to unstake";

    pub const UNSTAKE_TOO_EARLY: &str = "minimum stake time has not elapsed yet";

    pub const UNSTAKE_WINDOW_EXPIRED: &str = "withdrawal period has expired";

    pub const STAKE_STATUS_UNKNOWN: &str = "stake status has not been loaded yet";

    pub const NOTHING_TO_WITHDRAW: &str = "app balance is empty";
}

pub mod tip_jar {
    pub const NAME_REQUIRED: &str = "Please enter your name";

    pub const MESSAGE_REQUIRED: &str = "Please enter your message";
}

/// Error raised by the dashboard controller or its contract gateway.
///
/// Every error is local to the triggering action: the prior snapshot is left intact.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("no injected wallet provider found - please install MetaMask")]
    ProviderUnavailable,

    #[error("{}", wallet::NO_ACCOUNT_FOUND)]
    NoAccountFound,

    #[error("wallet is on chain {actual}, but chain {expected} is required")]
    NetworkMismatch { expected: ChainId, actual: ChainId },

    #[error("transaction was rejected: {0}")]
    TransactionRejected(String),

    #[error("transaction reverted: {0}")]
    TransactionReverted(String),

    #[error("{0}")]
    InvalidAction(&'static str),

    #[error("contract read failed: {0}")]
    Gateway(String),
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressParseError {
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("address must have 40 hex digits: {0}")]
    InvalidLength(String),

    #[error("address must only contain hex digits: {0}")]
    InvalidHex(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is not a decimal number: {0}")]
    Invalid(String),

    #[error("amount has more than 18 fractional digits: {0}")]
    TooPrecise(String),

    #[error("amount is too large: {0}")]
    Overflow(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid config: {0}")]
pub struct ConfigParseError(pub String);

impl AsRef<str> for ConfigParseError {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(DashboardError::NoAccountFound.to_string(), "No address found");
        assert_eq!(
            DashboardError::NetworkMismatch {
                expected: ChainId(5),
                actual: ChainId(1)
            }
            .to_string(),
            "wallet is on chain 1, but chain 5 is required"
        );
        assert_eq!(
            DashboardError::InvalidAction(tip_jar::NAME_REQUIRED).to_string(),
            "Please enter your name"
        );
    }
}
