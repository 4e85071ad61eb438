use crate::{
    domain::{self, Address},
    interface::model::{Amount, UnixTimestamp},
};
use near_sdk::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TipJarView {
    pub recipient: Option<Address>,
    pub balance: Amount,
    /// newest first
    pub memos: Vec<Memo>,
}

impl TipJarView {
    pub fn new(tip_jar: &domain::TipJar, floor_unit: domain::Wei) -> Self {
        Self {
            recipient: tip_jar.recipient.clone(),
            balance: Amount::new(tip_jar.contract_balance, floor_unit),
            memos: tip_jar.latest_memos().into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Memo {
    pub from: Address,
    pub timestamp: UnixTimestamp,
    pub name: String,
    pub message: String,
}

impl From<&domain::Memo> for Memo {
    fn from(memo: &domain::Memo) -> Self {
        Self {
            from: memo.from.clone(),
            timestamp: memo.timestamp.into(),
            name: memo.name.clone(),
            message: memo.message.clone(),
        }
    }
}
