use crate::{
    domain::{Wei, ETHER},
    errors::AmountParseError,
};
use std::fmt::{self, Display, Formatter};

const ETHER_DECIMALS: usize = 18;

/// An amount that has been truncated to a floor unit for display.
///
/// Displays in ether units with at least one fractional digit and trailing zeros trimmed,
/// e.g., `0.9968` or `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DisplayAmount(Wei);

impl DisplayAmount {
    /// the truncated amount
    pub fn wei(&self) -> Wei {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Truncates (never rounds) `raw_amount` down to a multiple of `floor_unit`.
///
/// The displayed amount is thus never larger than what the account actually holds.
pub fn format_truncated_balance(raw_amount: Wei, floor_unit: Wei) -> DisplayAmount {
    DisplayAmount(raw_amount.truncate_to(floor_unit))
}

impl Display for DisplayAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.0.value();
        let whole = value / ETHER;
        let fraction = format!("{:018}", value % ETHER);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            write!(f, "{}.0", whole)
        } else {
            write!(f, "{}.{}", whole, fraction)
        }
    }
}

/// Parses a user entered ether amount, e.g., `0.001`, into wei.
pub fn parse_ether(input: &str) -> Result<Wei, AmountParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AmountParseError::Empty);
    }
    let (whole, fraction) = match input.find('.') {
        Some(index) => (&input[..index], &input[index + 1..]),
        None => (input, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(AmountParseError::Invalid(input.to_string()));
    }
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountParseError::Invalid(input.to_string()));
    }
    if fraction.len() > ETHER_DECIMALS {
        return Err(AmountParseError::TooPrecise(input.to_string()));
    }

    let overflow = || AmountParseError::Overflow(input.to_string());
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let fraction: u128 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<18}", fraction).parse().map_err(|_| overflow())?
    };
    whole
        .checked_mul(ETHER)
        .and_then(|wei| wei.checked_add(fraction))
        .map(Wei)
        .ok_or_else(overflow)
}
