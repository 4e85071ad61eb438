use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl ChainId {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// hex encoding used by `wallet_switchEthereumChain`, e.g., `0x5`
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn to_hex() {
        assert_eq!(ChainId(5).to_hex(), "0x5");
        assert_eq!(ChainId(1337).to_hex(), "0x539");
    }
}
