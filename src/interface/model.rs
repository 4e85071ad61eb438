//! JSON view model handed to the view layer
//! - u128 and u64 values are encoded as strings because JSON numbers cannot represent them safely

mod account_status;
mod tip_jar;

pub use account_status::{AccountStatusView, StakeStatusView};
pub use tip_jar::{Memo, TipJarView};

use crate::{
    domain,
    interface::ActionKind,
    status::{format_truncated_balance, DisplayAmount},
};
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Wei(pub U128);

impl From<domain::Wei> for Wei {
    fn from(value: domain::Wei) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl Wei {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct UnixTimestamp(pub U64);

impl From<domain::UnixTimestamp> for UnixTimestamp {
    fn from(value: domain::UnixTimestamp) -> Self {
        Self(value.0.into())
    }
}

impl UnixTimestamp {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

/// An amount along with its truncated display form, e.g., `0.9968`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Amount {
    pub wei: Wei,
    pub display: String,
}

impl Amount {
    /// `wei` is kept exact, only the display form is truncated
    pub fn new(amount: domain::Wei, floor_unit: domain::Wei) -> Self {
        Self {
            wei: amount.into(),
            display: format_truncated_balance(amount, floor_unit).to_string(),
        }
    }
}

impl From<DisplayAmount> for Amount {
    fn from(value: DisplayAmount) -> Self {
        Self {
            wei: value.wei().into(),
            display: value.to_string(),
        }
    }
}

/// Everything the view layer renders for one refresh cycle
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct DashboardView {
    pub status: AccountStatusView,
    pub tip_jar: Option<TipJarView>,
    /// error message of the last failed attempt per action
    pub action_errors: BTreeMap<ActionKind, String>,
    /// true if the latest refresh failed, i.e., the status may not reflect confirmed transactions
    pub stale: bool,
}
