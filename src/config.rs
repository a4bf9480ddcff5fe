//! # Configuration
//!
//! Runtime settings and the menu the catalog actors are seeded with. Every
//! field has a default, so an empty file (or no file at all) gives the standard
//! machine. The binary reads the path from `VENDING_CONFIG`.
//!
//! ```toml
//! history_capacity = 50
//! dispense_delay_ms = 0
//!
//! [[beverages]]
//! id = "flatWhite"
//! name = "Flat White"
//! price = "21.00"
//! calories = 110
//! hot = true
//! category = "coffee"
//! ```
//!
//! Listing any `[[beverages]]` or `[[condiments]]` replaces that whole default list.

use crate::model::{BeverageCategory, BeverageCreate, CondimentCategory, CondimentCreate};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "VENDING_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VendingConfig {
    /// Mailbox size of every actor.
    pub channel_buffer: usize,
    /// Orders kept by the order actor.
    pub history_capacity: usize,
    /// Orders returned as the recent history.
    pub history_view: usize,
    /// How long the machine shows `dispensing` after a successful order.
    pub dispense_delay_ms: u64,
    pub beverages: Vec<BeverageCreate>,
    pub condiments: Vec<CondimentCreate>,
}

impl Default for VendingConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            history_capacity: 20,
            history_view: 5,
            dispense_delay_ms: 1500,
            beverages: default_beverages(),
            condiments: default_condiments(),
        }
    }
}

impl VendingConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Loads the file named by `VENDING_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid("channel_buffer must be at least 1".into()));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("history_capacity must be at least 1".into()));
        }
        if self.history_view == 0 || self.history_view > self.history_capacity {
            return Err(ConfigError::Invalid(format!(
                "history_view must be between 1 and history_capacity ({}), got {}",
                self.history_capacity, self.history_view
            )));
        }
        Ok(())
    }

    pub fn dispense_delay(&self) -> Duration {
        Duration::from_millis(self.dispense_delay_ms)
    }
}

fn beverage(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    calories: u32,
    hot: bool,
    category: BeverageCategory,
) -> BeverageCreate {
    BeverageCreate {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: Decimal::from(price),
        calories,
        hot,
        category,
    }
}

fn condiment(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    calories: u32,
    category: CondimentCategory,
) -> CondimentCreate {
    CondimentCreate {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: Decimal::from(price),
        calories,
        category,
    }
}

pub fn default_beverages() -> Vec<BeverageCreate> {
    use BeverageCategory::*;
    vec![
        beverage("coffee", "Coffee", "Freshly ground arabica", 18, 5, true, Coffee),
        beverage("latte", "Latte", "Espresso with steamed milk", 22, 120, true, Coffee),
        beverage("americano", "Americano", "Light, smooth black coffee", 20, 10, true, Coffee),
        beverage("mocha", "Mocha", "Espresso with chocolate and milk", 25, 200, true, Coffee),
        beverage("cola", "Cola", "Chilled and fizzy", 12, 140, false, Soda),
        beverage("sprite", "Sprite", "Lemon-lime soda", 12, 140, false, Soda),
        beverage("greenTea", "Green Tea", "Fresh green tea leaves", 15, 0, true, Tea),
        beverage("blackTea", "Black Tea", "Full-bodied black tea", 15, 0, true, Tea),
        beverage("orangeJuice", "Orange Juice", "Freshly squeezed", 20, 120, false, Juice),
        beverage("appleJuice", "Apple Juice", "Pressed from crisp apples", 18, 110, false, Juice),
    ]
}

pub fn default_condiments() -> Vec<CondimentCreate> {
    use CondimentCategory::*;
    vec![
        condiment("milk", "Milk", "Fresh whole milk", 3, 60, Dairy),
        condiment("cream", "Cream", "Whipped cream", 4, 120, Dairy),
        condiment("sugar", "Sugar", "Cane sugar", 1, 30, Sweetener),
        condiment("honey", "Honey", "Natural honey", 3, 45, Sweetener),
        condiment("vanilla", "Vanilla Syrup", "Sweet vanilla", 4, 50, Syrup),
        condiment("caramel", "Caramel Syrup", "Rich caramel", 4, 60, Syrup),
        condiment("chocolate", "Chocolate Sauce", "Dark chocolate", 4, 80, Syrup),
        condiment("cinnamon", "Cinnamon", "Ground cinnamon", 2, 5, Topping),
        condiment("coconut", "Coconut Milk", "Creamy coconut milk", 4, 70, Dairy),
        condiment("ice", "Ice", "Crushed ice", 0, 0, Other),
    ]
}
