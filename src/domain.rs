//! defines the domain model the status engine computes over
//!
//! NOTE: the domain model is separate from the interface model. The interface model is the
//! serialized view that is handed to the view layer.

mod address;
mod chain_id;
mod dashboard_snapshot;
mod gas;
mod stake_duration;
mod stake_position;
mod tip_jar;
mod treasury_parameters;
mod unix_timestamp;
mod wallet_snapshot;
mod wei;

pub use address::Address;
pub use chain_id::ChainId;
pub use dashboard_snapshot::DashboardSnapshot;
pub use gas::{Gas, GasEstimate, GasPrice, SIMPLE_TRANSFER_GAS};
pub use stake_duration::StakeDuration;
pub use stake_position::StakePosition;
pub use tip_jar::{CoffeeSize, Memo, TipJar};
pub use treasury_parameters::TreasuryParameters;
pub use unix_timestamp::UnixTimestamp;
pub use wallet_snapshot::WalletSnapshot;
pub use wei::{Wei, ETHER};
