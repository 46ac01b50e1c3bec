//! Configuration management for the bank ledger

use crate::account::Amount;
use crate::error::{BankError, Result};
use crate::identity::account_id_from_hex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub bank: BankConfig,
}

#[derive(Debug, Deserialize)]
pub struct BankConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub fee: Amount,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            owner: default_owner(),
            fee: 0,
        }
    }
}

fn default_owner() -> String {
    "0".repeat(64)
}

/// Load `bank.toml` from the working directory, falling back to defaults
/// when the file is absent.
pub fn load_config() -> Result<Config> {
    load_config_from(Path::new("bank.toml"))
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let config: Config = if config_str.is_empty() {
        Config {
            bank: BankConfig::default(),
        }
    } else {
        toml::from_str(&config_str)
            .map_err(|e| BankError::ConfigError(format!("Failed to parse {:?}: {}", path, e)))?
    };

    // Validate critical values
    if config.bank.owner.is_empty() {
        return Err(BankError::ConfigError(
            "bank.owner must be set in bank.toml".to_string(),
        ));
    }
    account_id_from_hex(&config.bank.owner)
        .map_err(|e| BankError::ConfigError(format!("bank.owner is not a valid account id: {}", e)))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{account_id_from_label, account_id_to_hex};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.bank.owner, "0".repeat(64));
        assert_eq!(config.bank.fee, 0);
    }

    #[test]
    fn test_parses_owner_and_fee() {
        let owner_hex = account_id_to_hex(&account_id_from_label("owner"));
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bank]\nowner = \"{}\"\nfee = 3", owner_hex).unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.bank.owner, owner_hex);
        assert_eq!(config.bank.fee, 3);
    }

    #[test]
    fn test_rejects_malformed_owner() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bank]\nowner = \"not-an-id\"").unwrap();

        assert!(matches!(
            load_config_from(file.path()),
            Err(BankError::ConfigError(_))
        ));
    }
}
