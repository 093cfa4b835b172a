//! # Protocol Constants
//!
//! Program ids and seed tags are a wire contract with the deployed program.
//! Changing any of these changes every derived address.

use super::address::Address;

/// The index program. Scopes every derivation in this crate.
///
/// `7rxT36fYNGHB1hfXstL79FaFuVgZXzYCiM7yVJ7cdipD`
pub const PROGRAM_ID: Address = Address::new([
    101, 242, 71, 8, 124, 163, 210, 91, 249, 171, 128, 86, 83, 196, 159, 118, 47, 147, 16, 100,
    92, 1, 221, 104, 235, 127, 234, 134, 202, 193, 10, 70,
]);

/// `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Address = Address::ZERO;

/// `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Address = Address::new([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133,
    237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Address = Address::new([
    140, 151, 37, 143, 78, 36, 137, 241, 187, 61, 16, 41, 20, 142, 13, 131, 11, 90, 19, 153, 218,
    255, 16, 132, 4, 142, 123, 216, 219, 233, 248, 89,
]);

/// `SysvarRent111111111111111111111111111111111`
pub const RENT_SYSVAR_ID: Address = Address::new([
    6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127, 88, 218, 238, 8, 155,
    161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
]);

// =============================================================================
// SEED TAGS
// =============================================================================

pub const ROOT_SEED: &[u8] = b"root";
pub const FOREST_SEED: &[u8] = b"forest";
pub const FOREST_AUTHORITY_SEED: &[u8] = b"forest_authority";
pub const TREE_SEED: &[u8] = b"tree";
pub const NODE_SEED: &[u8] = b"node";

/// Longest tag (in bytes) a tree or node may carry. Tags are used raw as
/// seeds, so this matches the per-seed limit.
pub const MAX_TAG_LENGTH: usize = 32;
