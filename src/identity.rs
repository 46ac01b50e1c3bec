//! Caller identities for the bank ledger
//!
//! The gateway sitting in front of the bank authenticates callers; the
//! ledger only ever sees the resulting 32-byte account id. Key custody and
//! signature checks stay on the gateway side.

use crate::error::BankError;
use sha2::{Digest, Sha256};

/// Type alias for a caller identity, a 32-byte value.
/// We use a fixed-size array for internal type safety and performance.
pub type AccountId = [u8; 32];

/// Convenience function to create an account id from a label (hashes the
/// label). Useful for testing and for hosts that key accounts by name.
pub fn account_id_from_label(label: &str) -> AccountId {
    let mut hasher = Sha256::new();
    hasher.update(label.as_bytes());
    hasher.finalize().into()
}

/// Convert an account id to a hex string for display.
pub fn account_id_to_hex(id: &AccountId) -> String {
    hex::encode(id)
}

/// Convert a hex string to an account id.
pub fn account_id_from_hex(hex_str: &str) -> Result<AccountId, BankError> {
    let bytes = hex::decode(hex_str)
        .map_err(|e| BankError::InvalidAddress(format!("Invalid hex account id: {}", e)))?;
    if bytes.len() != 32 {
        return Err(BankError::InvalidAddress(format!(
            "Account id must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    bytes
        .try_into()
        .map_err(|_| BankError::InvalidAddress("Failed to convert bytes into account id".to_string()))
}
