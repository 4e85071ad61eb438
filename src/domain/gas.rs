use crate::math::U256;

/// gas limit of a plain value transfer
pub const SIMPLE_TRANSFER_GAS: Gas = Gas(21_000);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Gas(pub u64);

impl From<u64> for Gas {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Gas {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// wei paid per unit of gas
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct GasPrice(pub u128);

impl From<u128> for GasPrice {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl GasPrice {
    pub fn value(&self) -> u128 {
        self.0
    }
}

/// Used to withhold enough funds from a "max" suggestion so that the account can still pay for
/// `assumed_tx_count` simple transfers at the current gas price.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GasEstimate {
    pub gas_price: GasPrice,
    pub assumed_tx_count: u64,
}

impl GasEstimate {
    pub fn new(gas_price: GasPrice, assumed_tx_count: u64) -> Self {
        Self {
            gas_price,
            assumed_tx_count,
        }
    }

    /// `gas_price * 21000 * assumed_tx_count`
    ///
    /// computed in 256 bits - the product can exceed `u128::MAX`
    pub fn reserved(&self) -> U256 {
        U256::from(self.gas_price)
            * U256::from(SIMPLE_TRANSFER_GAS.value())
            * U256::from(self.assumed_tx_count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reserved() {
        let estimate = GasEstimate::new(GasPrice(50_000_000_000), 3);
        assert_eq!(estimate.reserved(), U256::from(3_150_000_000_000_000u128));

        let estimate = GasEstimate::new(GasPrice(u128::MAX), 3);
        assert!(estimate.reserved() > U256::from(u128::MAX));
    }
}
