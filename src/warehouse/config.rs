use crate::error::{Result, WarehouseError};
use crate::store::fs::DEFAULT_SNAPSHOT_FILE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Configuration for the warehouse, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// File name of the snapshot inside the data directory
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,

    /// Symbol printed in front of money amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            snapshot_file: default_snapshot_file(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl WarehouseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WarehouseError::Io)?;
        let config: WarehouseConfig =
            serde_json::from_str(&content).map_err(WarehouseError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WarehouseError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WarehouseError::Serialization)?;
        fs::write(config_path, content).map_err(WarehouseError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let name = self.snapshot_file.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(WarehouseError::Config(format!(
                "snapshot_file must be a plain file name, got {:?}",
                self.snapshot_file
            )));
        }
        Ok(())
    }

    /// Formats an amount with the configured symbol and two decimals.
    pub fn money(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp(2);
        if rounded < Decimal::ZERO {
            format!("-{}{:.2}", self.currency_symbol, rounded.abs())
        } else {
            format!("{}{:.2}", self.currency_symbol, rounded)
        }
    }
}
