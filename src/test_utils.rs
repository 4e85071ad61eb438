use crate::domain::{Address, StakeDuration, TreasuryParameters, Wei, ETHER};

/// deterministic, well-formed address derived from `n`
pub fn address(n: u64) -> Address {
    format!("0x{:040x}", n).parse().unwrap()
}

pub fn treasury_parameters(min: u64, max: u64, withdrawal_end: u64) -> TreasuryParameters {
    TreasuryParameters {
        min_stake_duration: StakeDuration(min),
        max_stake_duration: StakeDuration(max),
        withdrawal_window_end: StakeDuration(withdrawal_end),
        interest_rate_percent: 1,
        treasury_balance: Wei(10 * ETHER),
        staker_count: 4,
    }
}
