//! Refresh and action controller consumed by the view layer.

use crate::{
    config::Config,
    domain::{DashboardSnapshot, UnixTimestamp, WalletSnapshot},
    errors::{self, DashboardError, DashboardResult},
    events::{self, log},
    interface::{
        model::{AccountStatusView, DashboardView, TipJarView},
        Action, ActionKind, ContractCall, ContractGateway, TransactionReceipt,
    },
    status::{AccountStatus, StakeStatus},
    wallet::selected_account,
};
use std::collections::BTreeMap;
use tracing::warn;

/// Owns the gateway and the latest [DashboardSnapshot].
///
/// The snapshot is replaced as a whole after each successful refresh, i.e., a failed read or a
/// failed transaction leaves the prior snapshot intact. State is never updated optimistically:
/// after a transaction is confirmed, everything is re-read from the contracts.
pub struct Dashboard<G> {
    gateway: G,
    config: Config,
    snapshot: DashboardSnapshot,
    action_errors: BTreeMap<ActionKind, String>,
    stale: bool,
    provider_warning_logged: bool,
}

impl<G: ContractGateway> Dashboard<G> {
    pub fn new(gateway: G, config: Config) -> Self {
        Self {
            gateway,
            config,
            snapshot: DashboardSnapshot::default(),
            action_errors: BTreeMap::new(),
            stale: false,
            provider_warning_logged: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn status(&self, now: UnixTimestamp) -> AccountStatus {
        AccountStatus::derive(&self.snapshot, &self.config, now)
    }

    pub fn view(&self, now: UnixTimestamp) -> DashboardView {
        DashboardView {
            status: AccountStatusView::new(&self.status(now), &self.config),
            tip_jar: self
                .snapshot
                .tip_jar
                .as_ref()
                .map(|tip_jar| TipJarView::new(tip_jar, self.config.floor_unit())),
            action_errors: self.action_errors.clone(),
            stale: self.stale,
        }
    }

    /// true if the latest refresh failed and the prior snapshot is being shown
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// error message of the last failed attempt of the action
    /// - cleared when the action is submitted again
    pub fn action_error(&self, action: ActionKind) -> Option<&str> {
        self.action_errors.get(&action).map(String::as_str)
    }

    /// Picks up an account that the wallet already exposes to the dashboard, without prompting
    /// the user. Contract data is refreshed even if no account is connected.
    pub fn check_connection(&mut self) -> DashboardResult<()> {
        let accounts = self.with_provider(|gateway| gateway.accounts())?;
        match selected_account(&accounts)
            .map_err(|err| DashboardError::Gateway(err.to_string()))?
        {
            Some(address) => self.on_wallet_changed(WalletSnapshot::connected(address)),
            None => self.refresh(),
        }
    }

    /// Prompts the user to connect the wallet.
    ///
    /// ## Errors
    /// - [DashboardError::ProviderUnavailable] if there is no injected wallet provider
    /// - [DashboardError::NoAccountFound] if the wallet did not expose any account
    pub fn connect(&mut self) -> DashboardResult<()> {
        let accounts = self.with_provider(|gateway| gateway.request_accounts())?;
        let address = selected_account(&accounts)
            .map_err(|err| DashboardError::Gateway(err.to_string()))?
            .ok_or(DashboardError::NoAccountFound)?;
        self.on_wallet_changed(WalletSnapshot::connected(address))
    }

    /// Applies a wallet account change.
    /// - disconnecting clears all account scoped data
    /// - connecting an account ensures the wallet is on the target network and refreshes
    pub fn on_wallet_changed(&mut self, wallet: WalletSnapshot) -> DashboardResult<()> {
        if !self.snapshot.wallet.same_account(&wallet) {
            self.action_errors.clear();
        }
        match wallet.address.clone() {
            None => {
                log(events::WalletDisconnected);
                self.snapshot = self.snapshot.with_wallet(wallet);
                Ok(())
            }
            Some(address) => {
                log(events::WalletConnected { address });
                self.snapshot = self.snapshot.with_wallet(wallet);
                self.ensure_network()?;
                self.refresh()
            }
        }
    }

    /// Applies each wallet change from a subscription, e.g., a
    /// [WalletSubscription](crate::wallet::WalletSubscription).
    ///
    /// Failures are logged and do not stop the subscription. Returns the number of changes that
    /// were applied successfully.
    pub fn follow_wallet<I>(&mut self, wallet_changes: I) -> usize
    where
        I: IntoIterator<Item = WalletSnapshot>,
    {
        let mut applied = 0;
        for wallet in wallet_changes {
            match self.on_wallet_changed(wallet) {
                Ok(()) => applied += 1,
                Err(err) => warn!(error = %err, "failed to apply wallet change"),
            }
        }
        applied
    }

    /// Requests a network switch if the wallet is not connected to the target chain.
    ///
    /// ## Errors
    /// [DashboardError::NetworkMismatch] if the switch request failed
    pub fn ensure_network(&mut self) -> DashboardResult<()> {
        let target = self.config.target_chain_id();
        let actual = self.with_provider(|gateway| gateway.chain_id())?;
        if actual == target {
            return Ok(());
        }
        log(events::NetworkSwitchRequested {
            from: actual,
            to: target,
        });
        self.with_provider(|gateway| gateway.switch_chain(target))
            .map_err(|err| {
                warn!(error = %err, chain_id = %target, "network switch failed");
                DashboardError::NetworkMismatch {
                    expected: target,
                    actual,
                }
            })
    }

    /// Re-reads everything from the wallet and the contracts.
    ///
    /// The new snapshot replaces the current one only if every read succeeded.
    pub fn refresh(&mut self) -> DashboardResult<()> {
        match self.fetch_snapshot() {
            Ok(snapshot) => {
                log(events::SnapshotRefreshed {
                    account: snapshot.wallet.address.clone(),
                    app_balance: snapshot.app_balance,
                    staked_balance: snapshot.stake_position.map(|position| position.amount()),
                });
                self.snapshot = snapshot;
                self.stale = false;
                Ok(())
            }
            Err(err) => {
                self.stale = true;
                if err == DashboardError::ProviderUnavailable {
                    self.log_provider_unavailable();
                }
                warn!(error = %err, "refresh failed - keeping the prior snapshot");
                Err(err)
            }
        }
    }

    /// Validates the action against the current status, sends it, and refreshes once the
    /// transaction is confirmed.
    ///
    /// On failure, the error message is recorded for the action and the snapshot is left as is.
    pub fn submit(
        &mut self,
        action: Action,
        now: UnixTimestamp,
    ) -> DashboardResult<TransactionReceipt> {
        let kind = action.kind();
        self.action_errors.remove(&kind);

        let result = self
            .contract_call(action, now)
            .and_then(|call| self.with_provider(|gateway| gateway.send(call)));
        match result {
            Ok(receipt) => {
                log(events::ActionSubmitted {
                    action: kind,
                    tx_hash: receipt.tx_hash.clone(),
                });
                if let Err(err) = self.refresh() {
                    warn!(
                        error = %err,
                        action = ?kind,
                        "confirmed transaction is not reflected in the snapshot yet"
                    );
                }
                Ok(receipt)
            }
            Err(err) => {
                log(events::ActionFailed {
                    action: kind,
                    reason: err.to_string(),
                });
                self.action_errors.insert(kind, err.to_string());
                Err(err)
            }
        }
    }

    fn contract_call(&self, action: Action, now: UnixTimestamp) -> DashboardResult<ContractCall> {
        use crate::errors::staking::*;
        use crate::errors::DashboardError::InvalidAction;

        let wallet = &self.snapshot.wallet;
        if !wallet.is_connected() {
            return Err(InvalidAction(errors::wallet::WALLET_NOT_CONNECTED));
        }
        let status = self.status(now);
        if !status.on_target_network {
            return Err(InvalidAction(errors::wallet::NETWORK_MISMATCH));
        }

        match action {
            Action::Deposit(amount) => {
                if amount.is_zero() {
                    return Err(InvalidAction(ZERO_AMOUNT));
                }
                match wallet.balance {
                    None => Err(InvalidAction(errors::wallet::BALANCE_NOT_LOADED)),
                    Some(balance) if amount > balance => {
                        Err(InvalidAction(INSUFFICIENT_WALLET_BALANCE))
                    }
                    Some(_) => Ok(ContractCall::Deposit { amount }),
                }
            }
            Action::Stake(amount) => {
                if amount.is_zero() {
                    return Err(InvalidAction(ZERO_AMOUNT));
                }
                if status.stake_status.is_staked() {
                    return Err(InvalidAction(ALREADY_STAKED));
                }
                match status.max_stake.wei() {
                    Some(max) if amount <= max => Ok(ContractCall::Stake { amount }),
                    _ => Err(InvalidAction(INSUFFICIENT_APP_BALANCE)),
                }
            }
            Action::Unstake => match status.stake_status {
                StakeStatus::UnstakeEligible { .. } => Ok(ContractCall::Unstake),
                StakeStatus::NotStaked => Err(InvalidAction(NOT_STAKED)),
                StakeStatus::Unknown => Err(InvalidAction(STAKE_STATUS_UNKNOWN)),
                StakeStatus::Locked { .. } => Err(InvalidAction(UNSTAKE_TOO_EARLY)),
                StakeStatus::UnstakeExpired { .. } => Err(InvalidAction(UNSTAKE_WINDOW_EXPIRED)),
            },
            Action::Withdraw => {
                if status.can_withdraw {
                    Ok(ContractCall::Withdraw)
                } else {
                    Err(InvalidAction(NOTHING_TO_WITHDRAW))
                }
            }
            Action::BuyCoffee {
                size,
                name,
                message,
            } => {
                if name.trim().is_empty() {
                    return Err(InvalidAction(errors::tip_jar::NAME_REQUIRED));
                }
                if message.trim().is_empty() {
                    return Err(InvalidAction(errors::tip_jar::MESSAGE_REQUIRED));
                }
                Ok(ContractCall::BuyCoffee {
                    name,
                    message,
                    value: self.config.coffee_price(size),
                })
            }
            Action::WithdrawTips => Ok(ContractCall::WithdrawTips),
            Action::SetMyselfAsRecipient => Ok(ContractCall::SetMyselfAsRecipient),
        }
    }

    fn fetch_snapshot(&self) -> DashboardResult<DashboardSnapshot> {
        let gateway = &self.gateway;
        let mut snapshot = DashboardSnapshot {
            treasury: Some(gateway.treasury_parameters()?),
            gas_price: Some(gateway.gas_price()?),
            tip_jar: Some(gateway.tip_jar()?),
            ..DashboardSnapshot::default()
        };
        if let Some(address) = self.snapshot.wallet.address.as_ref() {
            snapshot.wallet = WalletSnapshot::connected(address.clone())
                .with_balance(gateway.balance(address)?)
                .with_chain_id(gateway.chain_id()?);
            snapshot.app_balance = Some(gateway.app_balance(address)?);
            snapshot.stake_position = Some(gateway.stake_position(address)?);
        }
        Ok(snapshot)
    }

    fn with_provider<T, F>(&mut self, f: F) -> DashboardResult<T>
    where
        F: FnOnce(&mut G) -> DashboardResult<T>,
    {
        let result = f(&mut self.gateway);
        if let Err(DashboardError::ProviderUnavailable) = result {
            self.log_provider_unavailable();
        }
        result
    }

    /// logged once per dashboard
    fn log_provider_unavailable(&mut self) {
        if !self.provider_warning_logged {
            self.provider_warning_logged = true;
            warn!("{}", DashboardError::ProviderUnavailable);
        }
    }
}
