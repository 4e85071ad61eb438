use std::fmt::{self, Display, Formatter};

/// ETHER = 10^18 wei
pub const ETHER: u128 = 1_000_000_000_000_000_000;

/// Native currency amount in its smallest unit
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Wei(pub u128);

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl Wei {
    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// truncates the amount down to the nearest multiple of `unit`
    /// - a zero unit is treated as 1 wei, i.e., the amount is returned as is
    pub fn truncate_to(&self, unit: Wei) -> Wei {
        let unit = unit.0.max(1);
        Wei(self.0 - self.0 % unit)
    }
}

impl From<Wei> for u128 {
    fn from(value: Wei) -> Self {
        value.0
    }
}

impl Display for Wei {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
