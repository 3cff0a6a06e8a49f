//! Contract configuration.

use crate::errors::RegnetError;
use crate::types::Coins;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Immutable configuration injected into the contracts.
///
/// The recharge schedule maps bank transaction ids to the amount of
/// `upgradCoins` they credit. Deployments can vary the schedule without code
/// changes; anything outside it is rejected as invalid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Approved bank transaction ids and the amount each one credits
    pub recharge_schedule: HashMap<String, Coins>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        let mut recharge_schedule = HashMap::new();
        recharge_schedule.insert("upg100".to_string(), 100);
        recharge_schedule.insert("upg500".to_string(), 500);
        recharge_schedule.insert("upg1000".to_string(), 1000);

        Self { recharge_schedule }
    }
}

impl ContractConfig {
    /// Loads configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegnetError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a JSON file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RegnetError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Looks up the credit amount for a bank transaction id.
    pub fn recharge_amount(&self, bank_transaction_id: &str) -> Option<Coins> {
        self.recharge_schedule.get(bank_transaction_id).copied()
    }
}
