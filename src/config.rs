use crate::{
    domain::{ChainId, CoffeeSize, Wei},
    errors::ConfigParseError,
    status::{DEFAULT_ASSUMED_TX_COUNT, DEFAULT_FLOOR_UNIT},
};
use std::str::FromStr;

/// the contracts are deployed on Goerli
pub const TARGET_CHAIN_ID: ChainId = ChainId(5);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    target_chain_id: ChainId,
    floor_unit: Wei,
    assumed_tx_count: u64,
    coffee_prices: CoffeePrices,
}

impl Config {
    pub fn new(
        target_chain_id: ChainId,
        floor_unit: Wei,
        assumed_tx_count: u64,
        coffee_prices: CoffeePrices,
    ) -> Self {
        Self {
            target_chain_id,
            floor_unit,
            assumed_tx_count,
            coffee_prices,
        }
    }

    /// the wallet is asked to switch to this chain when it is connected to any other chain
    pub fn target_chain_id(&self) -> ChainId {
        self.target_chain_id
    }

    /// balances are truncated to a multiple of this unit for display
    pub fn floor_unit(&self) -> Wei {
        self.floor_unit
    }

    /// number of simple transfers the max deposit reserves gas for
    pub fn assumed_tx_count(&self) -> u64 {
        self.assumed_tx_count
    }

    pub fn coffee_prices(&self) -> &CoffeePrices {
        &self.coffee_prices
    }

    pub fn coffee_price(&self, size: CoffeeSize) -> Wei {
        match size {
            CoffeeSize::Small => self.coffee_prices.small,
            CoffeeSize::Large => self.coffee_prices.large,
        }
    }

    /// Updates are validated as a whole before any of them are applied, i.e., an invalid update
    /// leaves the config unchanged.
    pub fn apply_updates(&mut self, config: &updates::Config) -> Result<(), ConfigParseError> {
        let floor_unit = config
            .floor_unit
            .as_deref()
            .map(|value| parse_wei("floor_unit", value))
            .transpose()?;
        if floor_unit.map_or(false, |unit| unit.is_zero()) {
            return Err(ConfigParseError("floor_unit must not be zero".to_string()));
        }
        let mut coffee_prices = self.coffee_prices;
        if let Some(prices) = config.coffee_prices.as_ref() {
            coffee_prices.update(prices)?;
        }

        if let Some(target_chain_id) = config.target_chain_id {
            self.target_chain_id = target_chain_id.into();
        }
        if let Some(floor_unit) = floor_unit {
            self.floor_unit = floor_unit;
        }
        if let Some(assumed_tx_count) = config.assumed_tx_count {
            self.assumed_tx_count = assumed_tx_count;
        }
        self.coffee_prices = coffee_prices;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_chain_id: TARGET_CHAIN_ID,
            floor_unit: DEFAULT_FLOOR_UNIT,
            assumed_tx_count: DEFAULT_ASSUMED_TX_COUNT,
            coffee_prices: CoffeePrices::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoffeePrices {
    small: Wei,
    large: Wei,
}

impl CoffeePrices {
    pub fn new(small: Wei, large: Wei) -> Self {
        Self { small, large }
    }

    pub fn small(&self) -> Wei {
        self.small
    }

    pub fn large(&self) -> Wei {
        self.large
    }

    fn update(&mut self, config: &updates::CoffeePrices) -> Result<(), ConfigParseError> {
        if let Some(small) = config.small.as_deref() {
            self.small = parse_wei("coffee_prices.small", small)?;
        }
        if let Some(large) = config.large.as_deref() {
            self.large = parse_wei("coffee_prices.large", large)?;
        }
        Ok(())
    }
}

impl Default for CoffeePrices {
    fn default() -> Self {
        Self {
            // 0.001 ETH
            small: Wei(1_000_000_000_000_000),
            // 0.003 ETH
            large: Wei(3_000_000_000_000_000),
        }
    }
}

fn parse_wei(field: &str, value: &str) -> Result<Wei, ConfigParseError> {
    u128::from_str(value)
        .map(Wei)
        .map_err(|err| ConfigParseError(format!("{}: {}", field, err)))
}

/// provides support for config updates
/// - config updates are provided as JSON
/// - all config properties are optional - thus only config properties that change need to be specified
///   when updating the config
pub mod updates {
    use crate::errors::ConfigParseError;
    use near_sdk::{
        serde::{Deserialize, Serialize},
        serde_json,
    };

    #[derive(Debug, Serialize, Deserialize, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct Config {
        pub target_chain_id: Option<u64>,
        /// JSON does not support u128 - thus, u128 values are encoded as strings
        pub floor_unit: Option<String>,
        pub assumed_tx_count: Option<u64>,
        pub coffee_prices: Option<CoffeePrices>,
    }

    impl Config {
        pub fn from_json(json: &str) -> Result<Self, ConfigParseError> {
            serde_json::from_str(json).map_err(|err| ConfigParseError(err.to_string()))
        }
    }

    #[derive(Debug, Serialize, Deserialize, Default)]
    #[serde(crate = "near_sdk::serde")]
    pub struct CoffeePrices {
        pub small: Option<String>,
        pub large: Option<String>,
    }
}
