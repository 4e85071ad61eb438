use crate::domain::{Address, ChainId, Wei};

/// Wallet state as reported by the injected provider.
///
/// `address` is `None` while the wallet is disconnected; `balance` and `chain_id` are `None`
/// until they have been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletSnapshot {
    pub address: Option<Address>,
    pub balance: Option<Wei>,
    pub chain_id: Option<ChainId>,
}

impl WalletSnapshot {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
            ..Self::default()
        }
    }

    pub fn with_balance(self, balance: Wei) -> Self {
        Self {
            balance: Some(balance),
            ..self
        }
    }

    pub fn with_chain_id(self, chain_id: ChainId) -> Self {
        Self {
            chain_id: Some(chain_id),
            ..self
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// returns true if both snapshots refer to the same account, including both being disconnected
    pub fn same_account(&self, other: &WalletSnapshot) -> bool {
        self.address == other.address
    }
}
