//! Error types for the custodial bank ledger

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    NotEnrolled,
    AlreadyEnrolled,
    ZeroValue,
    InsufficientBalance,
    SameParty,
    RecipientNotEnrolled,
    NotOwner,
    TransferFailed,
    InvalidAddress(String),
    ConfigError(String),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BankError::NotEnrolled => write!(f, "User is not enrolled"),
            BankError::AlreadyEnrolled => write!(f, "User already enrolled"),
            BankError::ZeroValue => write!(f, "Deposit must carry a non-zero value"),
            BankError::InsufficientBalance => write!(f, "Balance is not enough"),
            BankError::SameParty => write!(f, "Sender and recipient must be different"),
            BankError::RecipientNotEnrolled => write!(f, "Recipient is not enrolled"),
            BankError::NotOwner => write!(f, "Caller is not the owner"),
            BankError::TransferFailed => write!(f, "Failed to send value"),
            BankError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            BankError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BankError {}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, BankError>;
