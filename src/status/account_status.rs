use crate::{
    config::Config,
    domain::{DashboardSnapshot, StakePosition, UnixTimestamp, Wei},
    status::{
        classify_stake, compute_max_deposit_amount, compute_max_stake_amount,
        compute_window_labels, format_truncated_balance, DisplayAmount, MaxAmount, StakeStatus,
        WindowLabels,
    },
};

/// Derived display state for one [DashboardSnapshot].
///
/// Recomputed as a whole from each new snapshot, thus all flags are always consistent with each
/// other.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStatus {
    pub connected: bool,
    pub on_target_network: bool,
    pub stake_status: StakeStatus,

    pub can_deposit: bool,
    pub can_stake: bool,
    pub can_unstake: bool,
    pub can_withdraw: bool,

    pub max_deposit: MaxAmount,
    pub max_stake: MaxAmount,

    pub wallet_balance: Option<DisplayAmount>,
    /// deposited, but not staked
    pub app_balance: Option<DisplayAmount>,
    pub staked_balance: Option<DisplayAmount>,
    pub treasury_balance: Option<DisplayAmount>,
    pub staker_count: Option<u64>,
    /// e.g., `1%`
    pub interest_rate: Option<String>,
    pub window_labels: Option<WindowLabels>,

    pub tip_jar_balance: Option<DisplayAmount>,
    pub is_tip_recipient: bool,
}

impl AccountStatus {
    pub fn derive(snapshot: &DashboardSnapshot, config: &Config, now: UnixTimestamp) -> Self {
        let floor_unit = config.floor_unit();
        let display = |amount: Wei| format_truncated_balance(amount, floor_unit);
        let wallet = &snapshot.wallet;
        let connected = wallet.is_connected();
        let on_target_network = wallet.chain_id == Some(config.target_chain_id());

        let stake_status = match (snapshot.stake_position.as_ref(), snapshot.treasury.as_ref()) {
            (Some(position), Some(treasury)) if connected => {
                classify_stake(position, treasury, now)
            }
            (Some(position), _) if connected && position.is_staked() => StakeStatus::Unknown,
            _ => StakeStatus::NotStaked,
        };

        let max_deposit = if connected {
            compute_max_deposit_amount(
                wallet.balance,
                snapshot.gas_price,
                config.assumed_tx_count(),
                floor_unit,
            )
        } else {
            MaxAmount::Unavailable
        };
        let max_stake = if connected {
            compute_max_stake_amount(snapshot.app_balance)
        } else {
            MaxAmount::Unavailable
        };
        let has_app_balance = snapshot
            .app_balance
            .map_or(false, |balance| !balance.is_zero());

        let stake_start = snapshot
            .stake_position
            .as_ref()
            .filter(|_| connected)
            .and_then(StakePosition::stake_start);

        Self {
            connected,
            on_target_network,
            stake_status,

            can_deposit: connected && max_deposit.is_positive(),
            can_stake: connected && max_stake.is_positive() && !stake_status.is_staked(),
            can_unstake: connected && stake_status.can_unstake(),
            can_withdraw: connected && has_app_balance,

            max_deposit,
            max_stake,

            wallet_balance: wallet.balance.filter(|_| connected).map(display),
            app_balance: snapshot.app_balance.filter(|_| connected).map(display),
            staked_balance: snapshot
                .stake_position
                .filter(|_| connected)
                .map(|position| display(position.amount())),
            treasury_balance: snapshot
                .treasury
                .map(|treasury| display(treasury.treasury_balance)),
            staker_count: snapshot.treasury.map(|treasury| treasury.staker_count),
            interest_rate: snapshot
                .treasury
                .map(|treasury| format!("{}%", treasury.interest_rate_percent)),
            window_labels: snapshot
                .treasury
                .as_ref()
                .map(|treasury| compute_window_labels(stake_start, treasury)),

            tip_jar_balance: snapshot
                .tip_jar
                .as_ref()
                .map(|tip_jar| display(tip_jar.contract_balance)),
            is_tip_recipient: match (wallet.address.as_ref(), snapshot.tip_jar.as_ref()) {
                (Some(address), Some(tip_jar)) => tip_jar.is_recipient(address),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::{ChainId, GasPrice, TipJar, WalletSnapshot, ETHER};
    use crate::test_utils::*;

    const T: u64 = 1_659_616_200;

    fn loaded_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            wallet: WalletSnapshot::connected(address(1))
                .with_balance(Wei(ETHER))
                .with_chain_id(ChainId(5)),
            app_balance: Some(Wei(500_000_000_000_000_000)),
            stake_position: Some(StakePosition::not_staked()),
            treasury: Some(treasury_parameters(120, 240, 360)),
            gas_price: Some(GasPrice(50_000_000_000)),
            tip_jar: Some(TipJar {
                recipient: Some(address(1)),
                contract_balance: Wei(4_000_000_000_000_000),
                memos: vec![],
            }),
        }
    }

    #[test]
    fn nothing_loaded() {
        let status =
            AccountStatus::derive(&DashboardSnapshot::default(), &Config::default(), UnixTimestamp(T));
        assert!(!status.connected);
        assert!(!status.on_target_network);
        assert_eq!(status.stake_status, StakeStatus::NotStaked);
        assert!(!status.can_deposit);
        assert!(!status.can_stake);
        assert!(!status.can_unstake);
        assert!(!status.can_withdraw);
        assert_eq!(status.max_deposit, MaxAmount::Unavailable);
        assert_eq!(status.max_stake, MaxAmount::Unavailable);
        assert_eq!(status.wallet_balance, None);
        assert_eq!(status.window_labels, None);
        assert!(!status.is_tip_recipient);
    }

    #[test]
    fn connected_and_not_staked() {
        let status = AccountStatus::derive(&loaded_snapshot(), &Config::default(), UnixTimestamp(T));
        assert!(status.connected);
        assert!(status.on_target_network);
        assert_eq!(status.stake_status, StakeStatus::NotStaked);
        assert!(status.can_deposit);
        assert!(status.can_stake);
        assert!(!status.can_unstake);
        assert!(status.can_withdraw);
        assert_eq!(
            status.max_deposit,
            MaxAmount::Available(Wei(996_800_000_000_000_000))
        );
        assert_eq!(
            status.max_stake,
            MaxAmount::Available(Wei(500_000_000_000_000_000))
        );
        assert_eq!(status.wallet_balance.unwrap().to_string(), "1.0");
        assert_eq!(status.app_balance.unwrap().to_string(), "0.5");
        assert_eq!(status.staked_balance.unwrap().to_string(), "0.0");
        assert_eq!(status.treasury_balance.unwrap().to_string(), "10.0");
        assert_eq!(status.staker_count, Some(4));
        assert_eq!(status.interest_rate.as_deref(), Some("1%"));
        assert_eq!(
            status.window_labels.unwrap().min_stake,
            "2 minutes".to_string()
        );
        assert_eq!(status.tip_jar_balance.unwrap().to_string(), "0.004");
        assert!(status.is_tip_recipient);
    }

    #[test]
    fn zero_app_balance_disables_stake() {
        let snapshot = DashboardSnapshot {
            app_balance: Some(Wei(0)),
            ..loaded_snapshot()
        };
        let status = AccountStatus::derive(&snapshot, &Config::default(), UnixTimestamp(T));
        assert_eq!(status.max_stake, MaxAmount::Available(Wei(0)));
        assert!(!status.can_stake);
        assert!(!status.can_withdraw);
    }

    #[test]
    fn staked_lifecycle() {
        let snapshot = DashboardSnapshot {
            stake_position: Some(StakePosition::staked(Wei(ETHER), UnixTimestamp(T))),
            ..loaded_snapshot()
        };
        let config = Config::default();

        let status = AccountStatus::derive(&snapshot, &config, UnixTimestamp(T + 119));
        assert_eq!(status.stake_status.label(), "Staked");
        assert!(!status.can_unstake);
        assert!(!status.can_stake);
        assert_eq!(
            status.window_labels.unwrap().withdrawal_window,
            "2022/08/04 12:32 - 2022/08/04 12:36"
        );

        let status = AccountStatus::derive(&snapshot, &config, UnixTimestamp(T + 121));
        assert!(status.can_unstake);

        let status = AccountStatus::derive(&snapshot, &config, UnixTimestamp(T + 361));
        assert!(!status.can_unstake);
        assert_eq!(
            status.stake_status,
            StakeStatus::UnstakeExpired {
                expired_at: UnixTimestamp(T + 360)
            }
        );
    }

    #[test]
    fn staked_before_treasury_is_loaded() {
        let snapshot = DashboardSnapshot {
            stake_position: Some(StakePosition::staked(Wei(ETHER), UnixTimestamp(T))),
            treasury: None,
            ..loaded_snapshot()
        };
        let status = AccountStatus::derive(&snapshot, &Config::default(), UnixTimestamp(T + 121));
        assert_eq!(status.stake_status, StakeStatus::Unknown);
        assert!(!status.can_unstake);
        assert!(!status.can_stake);
    }

    #[test]
    fn wrong_network() {
        let mut snapshot = loaded_snapshot();
        snapshot.wallet.chain_id = Some(ChainId(1));
        let status = AccountStatus::derive(&snapshot, &Config::default(), UnixTimestamp(T));
        assert!(status.connected);
        assert!(!status.on_target_network);
    }
}
