//! Custobank - a single-asset custodial bank ledger
//!
//! A trusted operator (the bank owner) holds a pool of value on behalf of
//! enrolled users, tracks per-user balances, levies a flat per-withdrawal
//! fee that accrues to an owner-only profit pool, and supports peer
//! transfers between enrolled users.
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Ledger Core
//! - [`bank`] - The ledger aggregate and its full operation set
//! - [`account`] - Per-caller account records
//! - [`events`] - Observable notifications for successful operations
//!
//! ## External Seams
//! - [`identity`] - Caller identities handed over by the gateway
//! - [`settlement`] - Value movement out of the pool
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! Authentication, transport, and the funding of the pool belong to the
//! embedding process; the ledger only validates, accounts, and notifies.

#![forbid(unsafe_code)]

// ============================================================================
// Ledger Core
// ============================================================================
pub mod account;
pub mod bank;
pub mod events;

// ============================================================================
// External Seams
// ============================================================================
pub mod identity;
pub mod settlement;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
