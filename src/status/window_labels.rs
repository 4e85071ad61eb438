use crate::domain::{StakeDuration, TreasuryParameters, UnixTimestamp};
use chrono::{TimeZone, Utc};
use near_sdk::serde::{Deserialize, Serialize};
use std::convert::TryFrom;

const CLOCK_FORMAT: &str = "%Y/%m/%d %H:%M";

const UNKNOWN: &str = "unknown";

/// Time labels displayed on the treasury card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub struct WindowLabels {
    pub min_stake: String,
    pub max_stake: String,
    pub withdrawal_window: String,
}

/// With a stake start, each label is the UTC clock time `stake_start + duration`. Without one,
/// the labels describe the configured durations, e.g., `2 minutes`.
pub fn compute_window_labels(
    stake_start: Option<UnixTimestamp>,
    treasury_parameters: &TreasuryParameters,
) -> WindowLabels {
    let min = treasury_parameters.min_stake_duration;
    let max = treasury_parameters.max_stake_duration;
    let end = treasury_parameters.withdrawal_window_end;
    match stake_start {
        Some(stake_start) => {
            let clock = |duration| format_clock(stake_start.saturating_add(duration));
            WindowLabels {
                min_stake: clock(min),
                max_stake: clock(max),
                withdrawal_window: format!("{} - {}", clock(min), clock(end)),
            }
        }
        None => WindowLabels {
            min_stake: format_duration(min),
            max_stake: format_duration(max),
            withdrawal_window: format_window(min, end),
        },
    }
}

/// `YYYY/MM/DD HH:MM` in UTC, or `unknown` if the timestamp is beyond the calendar's range
pub fn format_clock(timestamp: UnixTimestamp) -> String {
    i64::try_from(timestamp.value())
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .map(|time| time.format(CLOCK_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn format_duration(duration: StakeDuration) -> String {
    match duration.whole_minutes() {
        Some(1) => "1 minute".to_string(),
        Some(minutes) => format!("{} minutes", minutes),
        None if duration.seconds() == 1 => "1 second".to_string(),
        None => format!("{} seconds", duration.seconds()),
    }
}

fn format_window(min: StakeDuration, end: StakeDuration) -> String {
    match (min.whole_minutes(), end.whole_minutes()) {
        (Some(min), Some(end)) => format!("Within {} - {} minutes after stake.", min, end),
        _ => format!(
            "Within {} - {} seconds after stake.",
            min.seconds(),
            end.seconds()
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn duration_labels_without_stake() {
        let labels = compute_window_labels(None, &treasury_parameters(120, 240, 360));
        assert_eq!(
            labels,
            WindowLabels {
                min_stake: "2 minutes".to_string(),
                max_stake: "4 minutes".to_string(),
                withdrawal_window: "Within 2 - 6 minutes after stake.".to_string(),
            }
        );

        let labels = compute_window_labels(None, &treasury_parameters(60, 90, 0));
        assert_eq!(labels.min_stake, "1 minute");
        assert_eq!(labels.max_stake, "90 seconds");
        assert_eq!(labels.withdrawal_window, "Within 60 - 0 seconds after stake.");
    }

    #[test]
    fn clock_labels_with_stake() {
        // 2022-08-04 12:30:00 UTC
        let stake_start = UnixTimestamp(1_659_616_200);
        let labels = compute_window_labels(Some(stake_start), &treasury_parameters(120, 240, 360));
        assert_eq!(
            labels,
            WindowLabels {
                min_stake: "2022/08/04 12:32".to_string(),
                max_stake: "2022/08/04 12:34".to_string(),
                withdrawal_window: "2022/08/04 12:32 - 2022/08/04 12:36".to_string(),
            }
        );
    }

    #[test]
    fn clock_out_of_range() {
        assert_eq!(format_clock(UnixTimestamp(u64::MAX)), "unknown");
        assert_eq!(format_clock(UnixTimestamp(0)), "1970/01/01 00:00");
    }
}
