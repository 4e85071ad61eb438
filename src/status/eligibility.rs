use crate::domain::{StakePosition, TreasuryParameters, UnixTimestamp};

/// Returns true if `now` falls within the stake window: at or after `stake_start +
/// min_stake_duration` and strictly before `stake_start + withdrawal_window_end`.
///
/// Accounts that never staked are never eligible. A window where the minimum stake duration is
/// not less than the window end is empty, i.e., never eligible.
pub fn compute_unstake_eligibility(
    stake_position: &StakePosition,
    treasury_parameters: &TreasuryParameters,
    now: UnixTimestamp,
) -> bool {
    if treasury_parameters.withdrawal_window_is_empty() {
        return false;
    }
    match stake_position.stake_start() {
        None => false,
        Some(stake_start) => {
            let opens_at = stake_start.saturating_add(treasury_parameters.min_stake_duration);
            let closes_at = stake_start.saturating_add(treasury_parameters.withdrawal_window_end);
            now >= opens_at && now < closes_at
        }
    }
}

/// Display relevant stake lifecycle states:
///
/// `NotStaked -> Locked -> [UnstakeEligible | UnstakeExpired] -> NotStaked`
///
/// The engine only classifies the snapshot it is given. Transitions happen when the snapshot is
/// re-fetched after a transaction is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeStatus {
    NotStaked,
    /// funds are staked, but the stake start time has not been loaded
    Unknown,
    /// minimum stake duration has not elapsed yet
    Locked { unlocks_at: UnixTimestamp },
    UnstakeEligible { expires_at: UnixTimestamp },
    /// the withdrawal window has passed - unstaking is blocked
    UnstakeExpired { expired_at: UnixTimestamp },
}

impl StakeStatus {
    pub fn is_staked(&self) -> bool {
        !matches!(self, StakeStatus::NotStaked)
    }

    pub fn can_unstake(&self) -> bool {
        matches!(self, StakeStatus::UnstakeEligible { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            StakeStatus::NotStaked => "Not Staked",
            StakeStatus::Unknown => "Loading",
            StakeStatus::Locked { .. } => "Staked",
            StakeStatus::UnstakeEligible { .. } => "Unstake Available",
            StakeStatus::UnstakeExpired { .. } => "Withdrawal Period Expired",
        }
    }
}

pub fn classify_stake(
    stake_position: &StakePosition,
    treasury_parameters: &TreasuryParameters,
    now: UnixTimestamp,
) -> StakeStatus {
    if !stake_position.is_staked() {
        return StakeStatus::NotStaked;
    }
    let stake_start = match stake_position.stake_start() {
        Some(stake_start) => stake_start,
        None => return StakeStatus::Unknown,
    };
    let opens_at = stake_start.saturating_add(treasury_parameters.min_stake_duration);
    let closes_at = stake_start.saturating_add(treasury_parameters.withdrawal_window_end);
    if now < opens_at {
        StakeStatus::Locked {
            unlocks_at: opens_at,
        }
    } else if now < closes_at {
        StakeStatus::UnstakeEligible {
            expires_at: closes_at,
        }
    } else {
        StakeStatus::UnstakeExpired {
            expired_at: closes_at,
        }
    }
}
