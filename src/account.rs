//! Per-caller account records

use serde::{Deserialize, Serialize};

/// Value amounts in the smallest currency unit.
pub type Amount = u64;

/// A single caller's slot in the ledger.
///
/// Absent slots read as the default record: not enrolled, zero balance. The
/// `enrolled` flag transitions false to true at most once per identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub enrolled: bool,
    pub balance: Amount,
}
