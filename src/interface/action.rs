use crate::domain::{CoffeeSize, Wei};
use near_sdk::serde::{Deserialize, Serialize};

/// User action dispatched by the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// deposit funds from the wallet into the stake contract
    Deposit(Wei),
    /// stake deposited funds
    Stake(Wei),
    Unstake,
    /// withdraw the deposited, unstaked funds back to the wallet
    Withdraw,
    BuyCoffee {
        size: CoffeeSize,
        name: String,
        message: String,
    },
    /// transfer the tip contract balance to its recipient
    WithdrawTips,
    SetMyselfAsRecipient,
}

/// Errors are tracked per kind of action, i.e., a failed stake does not hide a failed withdrawal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(crate = "near_sdk::serde")]
pub enum ActionKind {
    Deposit,
    Stake,
    Unstake,
    Withdraw,
    BuyCoffee,
    WithdrawTips,
    SetMyselfAsRecipient,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Deposit(_) => ActionKind::Deposit,
            Action::Stake(_) => ActionKind::Stake,
            Action::Unstake => ActionKind::Unstake,
            Action::Withdraw => ActionKind::Withdraw,
            Action::BuyCoffee { .. } => ActionKind::BuyCoffee,
            Action::WithdrawTips => ActionKind::WithdrawTips,
            Action::SetMyselfAsRecipient => ActionKind::SetMyselfAsRecipient,
        }
    }
}
