use crate::domain::{StakeDuration, Wei};

/// Configuration and totals read from the treasury contract.
///
/// `min_stake_duration <= max_stake_duration <= withdrawal_window_end` is the intended ordering,
/// but it is owned by the contract and not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreasuryParameters {
    pub min_stake_duration: StakeDuration,
    pub max_stake_duration: StakeDuration,
    /// offset from the stake start after which unstaking is no longer permitted
    pub withdrawal_window_end: StakeDuration,
    /// display only
    pub interest_rate_percent: u32,
    pub treasury_balance: Wei,
    pub staker_count: u64,
}

impl TreasuryParameters {
    /// returns true if no instant satisfies both the minimum lock-up and the window end
    pub fn withdrawal_window_is_empty(&self) -> bool {
        self.min_stake_duration >= self.withdrawal_window_end
    }
}
