//! structured dashboard events
//!
//! Events are emitted through [log] by the dashboard controller. The status engine never logs.

use crate::{
    domain::{Address, ChainId, Wei},
    interface::ActionKind,
};
use std::fmt::Debug;

/// wrapper around `tracing::info!()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    tracing::info!("{:#?}", event);
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletConnected {
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletDisconnected;

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSwitchRequested {
    pub from: ChainId,
    pub to: ChainId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRefreshed {
    pub account: Option<Address>,
    pub app_balance: Option<Wei>,
    pub staked_balance: Option<Wei>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionSubmitted {
    pub action: ActionKind,
    pub tx_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionFailed {
    pub action: ActionKind,
    pub reason: String,
}
