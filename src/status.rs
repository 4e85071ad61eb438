//! Account status engine.
//!
//! Pure derivation of display status and action eligibility from a [DashboardSnapshot]. Every
//! function is total: missing or inconsistent inputs map to an "unavailable" / `false` result and
//! nothing here panics, performs I/O, or logs. The view layer calls into this module on every
//! render, including before any data has been loaded.
//!
//! [DashboardSnapshot]: crate::domain::DashboardSnapshot

mod account_status;
mod display_amount;
mod eligibility;
mod max_amount;
mod window_labels;

pub use account_status::AccountStatus;
pub use display_amount::{format_truncated_balance, parse_ether, DisplayAmount};
pub use eligibility::{classify_stake, compute_unstake_eligibility, StakeStatus};
pub use max_amount::{compute_max_deposit_amount, compute_max_stake_amount, MaxAmount};
pub use window_labels::{compute_window_labels, WindowLabels};

use crate::domain::Wei;

/// balances are displayed truncated to 0.0001 ether
pub const DEFAULT_FLOOR_UNIT: Wei = Wei(100_000_000_000_000);

/// number of follow up simple transfers the "max" deposit leaves funds for
pub const DEFAULT_ASSUMED_TX_COUNT: u64 = 3;
