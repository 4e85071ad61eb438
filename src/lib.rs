//! Account status engine and refresh controller backing the tip-jar and staking dashboard.
//!
//! Raw values are read from the externally deployed contracts through a [ContractGateway],
//! collected into one immutable [DashboardSnapshot] per refresh cycle, and classified by the pure
//! functions in [status] into the [AccountStatus] that the view layer renders.
//!
//! [ContractGateway]: crate::interface::ContractGateway
//! [DashboardSnapshot]: crate::domain::DashboardSnapshot
//! [AccountStatus]: crate::status::AccountStatus

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod events;
pub mod interface;
pub mod math;
pub mod status;
pub mod wallet;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use dashboard::Dashboard;
pub use errors::{DashboardError, DashboardResult};
