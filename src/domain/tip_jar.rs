use crate::domain::{Address, UnixTimestamp, Wei};

/// State of the "buy me a coffee" tip contract
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TipJar {
    /// account that receives the tips on withdrawal
    pub recipient: Option<Address>,
    pub contract_balance: Wei,
    pub memos: Vec<Memo>,
}

/// Message left on the tip contract along with a coffee purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    pub from: Address,
    pub timestamp: UnixTimestamp,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeSize {
    Small,
    Large,
}

impl Default for CoffeeSize {
    fn default() -> Self {
        CoffeeSize::Small
    }
}

impl TipJar {
    pub fn is_recipient(&self, address: &Address) -> bool {
        self.recipient.as_ref() == Some(address)
    }

    /// memos ordered newest first
    pub fn latest_memos(&self) -> Vec<&Memo> {
        let mut memos: Vec<&Memo> = self.memos.iter().collect();
        memos.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        memos
    }
}
