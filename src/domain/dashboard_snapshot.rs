use crate::domain::{GasPrice, StakePosition, TipJar, TreasuryParameters, WalletSnapshot, Wei};

/// Everything read from the wallet provider and the contracts during one refresh cycle.
///
/// A snapshot is never mutated in place: each refresh builds a new snapshot, which replaces the
/// prior one as a whole. Values that have not been loaded yet are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub wallet: WalletSnapshot,
    /// funds deposited into the stake contract that are not staked
    pub app_balance: Option<Wei>,
    pub stake_position: Option<StakePosition>,
    pub treasury: Option<TreasuryParameters>,
    pub gas_price: Option<GasPrice>,
    pub tip_jar: Option<TipJar>,
}

impl DashboardSnapshot {
    /// snapshot for a newly reported wallet
    /// - account scoped values are carried over only if the wallet refers to the same account
    /// - contract scoped values are always carried over
    pub fn with_wallet(&self, wallet: WalletSnapshot) -> Self {
        if self.wallet.same_account(&wallet) {
            Self {
                wallet,
                ..self.clone()
            }
        } else {
            Self {
                wallet,
                app_balance: None,
                stake_position: None,
                treasury: self.treasury,
                gas_price: self.gas_price,
                tip_jar: self.tip_jar.clone(),
            }
        }
    }
}
