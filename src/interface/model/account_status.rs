use crate::{
    config::Config,
    interface::model::{Amount, UnixTimestamp},
    status::{AccountStatus, MaxAmount, StakeStatus, WindowLabels},
};
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
};

/// View model for [AccountStatus]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct AccountStatusView {
    pub connected: bool,
    pub on_target_network: bool,
    pub stake_status: StakeStatusView,
    /// e.g., `Not Staked`
    pub stake_status_label: String,

    pub can_deposit: bool,
    pub can_stake: bool,
    pub can_unstake: bool,
    pub can_withdraw: bool,

    /// `None` while the inputs are loading
    pub max_deposit: Option<Amount>,
    pub max_stake: Option<Amount>,

    pub wallet_balance: Option<Amount>,
    pub app_balance: Option<Amount>,
    pub staked_balance: Option<Amount>,
    pub treasury_balance: Option<Amount>,
    pub staker_count: Option<U64>,
    pub interest_rate: Option<String>,
    pub window_labels: Option<WindowLabels>,

    pub tip_jar_balance: Option<Amount>,
    pub is_tip_recipient: bool,
}

impl AccountStatusView {
    pub fn new(status: &AccountStatus, config: &Config) -> Self {
        let max_amount = |max: MaxAmount| {
            max.wei()
                .map(|amount| Amount::new(amount, config.floor_unit()))
        };
        Self {
            connected: status.connected,
            on_target_network: status.on_target_network,
            stake_status: status.stake_status.into(),
            stake_status_label: status.stake_status.label().to_string(),

            can_deposit: status.can_deposit,
            can_stake: status.can_stake,
            can_unstake: status.can_unstake,
            can_withdraw: status.can_withdraw,

            max_deposit: max_amount(status.max_deposit),
            max_stake: max_amount(status.max_stake),

            wallet_balance: status.wallet_balance.map(Into::into),
            app_balance: status.app_balance.map(Into::into),
            staked_balance: status.staked_balance.map(Into::into),
            treasury_balance: status.treasury_balance.map(Into::into),
            staker_count: status.staker_count.map(Into::into),
            interest_rate: status.interest_rate.clone(),
            window_labels: status.window_labels.clone(),

            tip_jar_balance: status.tip_jar_balance.map(Into::into),
            is_tip_recipient: status.is_tip_recipient,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde", tag = "state", rename_all = "snake_case")]
pub enum StakeStatusView {
    NotStaked,
    Unknown,
    Locked { unlocks_at: UnixTimestamp },
    UnstakeEligible { expires_at: UnixTimestamp },
    UnstakeExpired { expired_at: UnixTimestamp },
}

impl From<StakeStatus> for StakeStatusView {
    fn from(status: StakeStatus) -> Self {
        match status {
            StakeStatus::NotStaked => StakeStatusView::NotStaked,
            StakeStatus::Unknown => StakeStatusView::Unknown,
            StakeStatus::Locked { unlocks_at } => StakeStatusView::Locked {
                unlocks_at: unlocks_at.into(),
            },
            StakeStatus::UnstakeEligible { expires_at } => StakeStatusView::UnstakeEligible {
                expires_at: expires_at.into(),
            },
            StakeStatus::UnstakeExpired { expired_at } => StakeStatusView::UnstakeExpired {
                expired_at: expired_at.into(),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::{self, DashboardSnapshot, StakePosition, WalletSnapshot, ETHER};
    use crate::test_utils::*;
    use near_sdk::serde_json::{self, json};

    #[test]
    fn json_encodes_amounts_as_strings() {
        let snapshot = DashboardSnapshot {
            wallet: WalletSnapshot::connected(address(1))
                .with_balance(domain::Wei(ETHER))
                .with_chain_id(domain::ChainId(5)),
            app_balance: Some(domain::Wei(ETHER / 2)),
            stake_position: Some(StakePosition::staked(
                domain::Wei(ETHER),
                domain::UnixTimestamp(1_659_616_200),
            )),
            treasury: Some(treasury_parameters(120, 240, 360)),
            gas_price: Some(domain::GasPrice(50_000_000_000)),
            tip_jar: None,
        };
        let config = Config::default();
        let status =
            AccountStatus::derive(&snapshot, &config, domain::UnixTimestamp(1_659_616_321));
        let view = AccountStatusView::new(&status, &config);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(
            json["stake_status"],
            json!({"state": "unstake_eligible", "expires_at": "1659616560"})
        );
        assert_eq!(json["stake_status_label"], "Unstake Available");
        assert_eq!(
            json["max_deposit"],
            json!({"wei": "996800000000000000", "display": "0.9968"})
        );
        assert_eq!(
            json["max_stake"],
            json!({"wei": "500000000000000000", "display": "0.5"})
        );
        assert_eq!(json["staker_count"], "4");
        assert_eq!(json["can_unstake"], true);
        assert_eq!(json["can_stake"], false);
        assert_eq!(json["tip_jar_balance"], json!(null));

        let view2: AccountStatusView = serde_json::from_value(json).unwrap();
        assert_eq!(view, view2);
    }
}
