use crate::domain::{GasPrice, Wei};
use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl From<Wei> for U256 {
    fn from(value: Wei) -> Self {
        U256::from(value.value())
    }
}

impl From<GasPrice> for U256 {
    fn from(value: GasPrice) -> Self {
        U256::from(value.value())
    }
}

/// returns `lhs - rhs`, or zero if `rhs` exceeds `lhs`
pub fn saturating_sub(lhs: U256, rhs: U256) -> U256 {
    if lhs > rhs {
        lhs - rhs
    } else {
        U256::zero()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturating_sub_floors_at_zero() {
        assert_eq!(saturating_sub(U256::from(10u64), U256::from(3u64)), U256::from(7u64));
        assert_eq!(saturating_sub(U256::from(3u64), U256::from(10u64)), U256::zero());
        assert_eq!(saturating_sub(U256::from(10u64), U256::from(10u64)), U256::zero());
    }

    #[test]
    fn u256_holds_products_beyond_u128() {
        let product = U256::from(u128::MAX) * U256::from(21_000u64) * U256::from(3u64);
        assert!(product > U256::from(u128::MAX));
    }
}
