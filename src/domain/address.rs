use crate::errors::AddressParseError;
use near_sdk::serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

const HEX_DIGITS: usize = 40;

/// Account identifier: `0x` followed by 40 hex digits.
///
/// The address is normalized to lower case, thus addresses reported with mixed case checksums by
/// the wallet provider compare equal to the same address read from a contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(crate = "near_sdk::serde", try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(|| AddressParseError::MissingPrefix(value.to_string()))?;
        if digits.len() != HEX_DIGITS {
            return Err(AddressParseError::InvalidLength(value.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressParseError::InvalidHex(value.to_string()));
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_normalizes_to_lower_case() {
        let address: Address = "0x04D91921A713ca3b82075a46807e99e168815E21".parse().unwrap();
        assert_eq!(address.as_str(), "0x04d91921a713ca3b82075a46807e99e168815e21");
    }

    #[test]
    fn parse_rejects_malformed_addresses() {
        assert_eq!(
            "04d91921a713ca3b82075a46807e99e168815e21".parse::<Address>(),
            Err(AddressParseError::MissingPrefix(
                "04d91921a713ca3b82075a46807e99e168815e21".to_string()
            ))
        );
        assert!(matches!(
            "0x04d9".parse::<Address>(),
            Err(AddressParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "0x04d91921a713ca3b82075a46807e99e168815ezz".parse::<Address>(),
            Err(AddressParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn json_deserialization_validates() {
        let address: Address =
            near_sdk::serde_json::from_str(r#""0x04d91921a713ca3b82075a46807e99e168815e21""#)
                .unwrap();
        assert_eq!(address.as_str(), "0x04d91921a713ca3b82075a46807e99e168815e21");
        assert!(near_sdk::serde_json::from_str::<Address>(r#""bob.near""#).is_err());
    }
}
