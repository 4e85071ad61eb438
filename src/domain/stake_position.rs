use crate::domain::{UnixTimestamp, Wei};

/// The connected account's stake with the stake contract.
///
/// A zero amount means "not staked". The stake start time is present iff the staked amount is
/// non-zero: constructing a position with a zero amount drops the start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StakePosition {
    amount: Wei,
    stake_start: Option<UnixTimestamp>,
}

impl StakePosition {
    pub fn new(amount: Wei, stake_start: Option<UnixTimestamp>) -> Self {
        if amount.is_zero() {
            Self::not_staked()
        } else {
            Self {
                amount,
                stake_start,
            }
        }
    }

    pub fn not_staked() -> Self {
        Self::default()
    }

    pub fn staked(amount: Wei, stake_start: UnixTimestamp) -> Self {
        Self::new(amount, Some(stake_start))
    }

    /// the stake contract reports a zero start time for accounts that never staked
    pub fn from_contract(amount: u128, stake_start_secs: u64) -> Self {
        let stake_start = if stake_start_secs == 0 {
            None
        } else {
            Some(UnixTimestamp(stake_start_secs))
        };
        Self::new(Wei(amount), stake_start)
    }

    pub fn amount(&self) -> Wei {
        self.amount
    }

    pub fn stake_start(&self) -> Option<UnixTimestamp> {
        self.stake_start
    }

    pub fn is_staked(&self) -> bool {
        !self.amount.is_zero()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_amount_drops_start_time() {
        let position = StakePosition::new(Wei(0), Some(UnixTimestamp(100)));
        assert!(!position.is_staked());
        assert_eq!(position.stake_start(), None);
        assert_eq!(position, StakePosition::not_staked());
    }

    #[test]
    fn from_contract() {
        assert_eq!(StakePosition::from_contract(0, 0), StakePosition::not_staked());

        let position = StakePosition::from_contract(10, 1_659_616_200);
        assert!(position.is_staked());
        assert_eq!(position.amount(), Wei(10));
        assert_eq!(position.stake_start(), Some(UnixTimestamp(1_659_616_200)));

        // staked, but the start time has not been loaded
        let position = StakePosition::from_contract(10, 0);
        assert!(position.is_staked());
        assert_eq!(position.stake_start(), None);
    }
}
