//! # Error Taxonomy
//!
//! Every failure this crate can report. `NotFound` is deliberately absent:
//! an empty address is `Ok(None)`, not an error.

use super::address::Address;
use thiserror::Error;

/// A byte buffer does not match the schema it was decoded against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Buffer too short for {record}: need {expected} bytes, got {actual}")]
    TooShort {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Discriminator mismatch for {record}: expected {expected:?}, got {actual:?}")]
    DiscriminatorMismatch {
        record: &'static str,
        expected: [u8; 8],
        actual: [u8; 8],
    },

    #[error("Unknown account discriminator {0:?}")]
    UnknownDiscriminator([u8; 8]),

    #[error("Malformed tag field: {0}")]
    MalformedTag(String),
}

/// Program-address derivation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("Seed {index} is {len} bytes, max is {max}")]
    MaxSeedLengthExceeded { index: usize, len: usize, max: usize },

    #[error("Too many seeds: {count}, max is {max}")]
    TooManySeeds { count: usize, max: usize },

    #[error("Seeds produce an address on the ed25519 curve")]
    OnCurve,

    #[error("No viable bump seed in [0, 255]")]
    NoViableBump,
}

/// Failure reported by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage request timed out")]
    Timeout,

    #[error("Lock poisoned")]
    LockPoisoned,

    #[error("Batch read returned {actual} entries for {expected} addresses")]
    BatchLengthMismatch { expected: usize, actual: usize },
}

/// Umbrella error returned by entity operations and the account client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Invalid account format: {0}")]
    Format(#[from] FormatError),

    #[error("Account owned by {actual}, expected {expected}")]
    Ownership { expected: Address, actual: Address },

    #[error("Address derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Invalid transport form: {0}")]
    Transport(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
