use crate::{
    domain::{GasEstimate, GasPrice, Wei},
    math::{self, U256},
    status::{format_truncated_balance, DisplayAmount},
};

/// Amount proposed by a "max" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxAmount {
    /// the inputs have not been loaded yet
    Unavailable,
    Available(Wei),
}

impl MaxAmount {
    pub fn wei(&self) -> Option<Wei> {
        match self {
            MaxAmount::Unavailable => None,
            MaxAmount::Available(amount) => Some(*amount),
        }
    }

    /// returns true if a non-zero amount is available
    pub fn is_positive(&self) -> bool {
        self.wei().map_or(false, |amount| !amount.is_zero())
    }

    pub fn display(&self, floor_unit: Wei) -> Option<DisplayAmount> {
        self.wei()
            .map(|amount| format_truncated_balance(amount, floor_unit))
    }
}

/// Maximum amount that can be deposited from the wallet while still leaving enough funds to pay
/// for `assumed_tx_count` simple transfers at the current gas price.
///
/// `max(0, balance - gas_price * 21000 * assumed_tx_count)` truncated to a multiple of
/// `floor_unit`.
///
/// Returns [MaxAmount::Unavailable] if the balance is unknown or zero, or if the gas price is
/// unknown.
pub fn compute_max_deposit_amount(
    wallet_balance: Option<Wei>,
    gas_price: Option<GasPrice>,
    assumed_tx_count: u64,
    floor_unit: Wei,
) -> MaxAmount {
    let (balance, gas_price) = match (wallet_balance, gas_price) {
        (Some(balance), Some(gas_price)) if !balance.is_zero() => (balance, gas_price),
        _ => return MaxAmount::Unavailable,
    };
    let reserved = GasEstimate::new(gas_price, assumed_tx_count).reserved();
    // bounded by the balance, thus it always fits into u128
    let available = math::saturating_sub(U256::from(balance), reserved).low_u128();
    MaxAmount::Available(Wei(available).truncate_to(floor_unit))
}

/// The deposited but not yet staked app balance is the entire stakeable amount. No gas is
/// reserved because the funds are already held by the contract.
pub fn compute_max_stake_amount(app_balance: Option<Wei>) -> MaxAmount {
    app_balance.map_or(MaxAmount::Unavailable, MaxAmount::Available)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::ETHER;
    use crate::status::{DEFAULT_ASSUMED_TX_COUNT, DEFAULT_FLOOR_UNIT};
    use quickcheck_macros::quickcheck;

    #[test]
    fn max_deposit_reserves_gas_for_three_transfers() {
        let max = compute_max_deposit_amount(
            Some(Wei(ETHER)),
            Some(GasPrice(50_000_000_000)),
            DEFAULT_ASSUMED_TX_COUNT,
            DEFAULT_FLOOR_UNIT,
        );
        // 1 ETH - 0.00315 ETH = 0.99685 ETH, truncated to 0.9968
        assert_eq!(max, MaxAmount::Available(Wei(996_800_000_000_000_000)));
        assert!(max.wei().unwrap() < Wei(ETHER));
        assert_eq!(max.display(DEFAULT_FLOOR_UNIT).unwrap().to_string(), "0.9968");
    }

    #[test]
    fn max_deposit_is_zero_when_gas_reserve_exceeds_balance() {
        let max = compute_max_deposit_amount(
            Some(Wei(1_000_000_000_000_000)),
            Some(GasPrice(50_000_000_000)),
            DEFAULT_ASSUMED_TX_COUNT,
            DEFAULT_FLOOR_UNIT,
        );
        assert_eq!(max, MaxAmount::Available(Wei(0)));
        assert!(!max.is_positive());

        let max = compute_max_deposit_amount(
            Some(Wei(u128::MAX)),
            Some(GasPrice(u128::MAX)),
            DEFAULT_ASSUMED_TX_COUNT,
            DEFAULT_FLOOR_UNIT,
        );
        assert_eq!(max, MaxAmount::Available(Wei(0)));
    }

    #[test]
    fn max_deposit_is_unavailable_until_loaded() {
        let gas_price = Some(GasPrice(50_000_000_000));
        assert_eq!(
            compute_max_deposit_amount(None, gas_price, 3, DEFAULT_FLOOR_UNIT),
            MaxAmount::Unavailable
        );
        assert_eq!(
            compute_max_deposit_amount(Some(Wei(0)), gas_price, 3, DEFAULT_FLOOR_UNIT),
            MaxAmount::Unavailable
        );
        assert_eq!(
            compute_max_deposit_amount(Some(Wei(ETHER)), None, 3, DEFAULT_FLOOR_UNIT),
            MaxAmount::Unavailable
        );
        assert_eq!(
            MaxAmount::Unavailable.display(DEFAULT_FLOOR_UNIT),
            None
        );
    }

    #[quickcheck]
    fn max_deposit_never_exceeds_balance(balance: u128, gas_price: u128, tx_count: u8) -> bool {
        match compute_max_deposit_amount(
            Some(Wei(balance)),
            Some(GasPrice(gas_price)),
            tx_count as u64,
            DEFAULT_FLOOR_UNIT,
        ) {
            MaxAmount::Unavailable => balance == 0,
            MaxAmount::Available(amount) => {
                amount <= Wei(balance) && amount.value() % DEFAULT_FLOOR_UNIT.value() == 0
            }
        }
    }

    #[test]
    fn max_stake_is_the_app_balance() {
        assert_eq!(
            compute_max_stake_amount(Some(Wei(123_456_789))),
            MaxAmount::Available(Wei(123_456_789))
        );
        assert_eq!(compute_max_stake_amount(None), MaxAmount::Unavailable);

        let max = compute_max_stake_amount(Some(Wei(0)));
        assert_eq!(max, MaxAmount::Available(Wei(0)));
        assert!(!max.is_positive());
    }
}
