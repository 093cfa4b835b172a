//! # Program Address Derivation
//!
//! Deterministic addresses owned by a program:
//!
//! ```text
//! address = sha256(seed_0 || seed_1 || ... || [bump] || program_id || "ProgramDerivedAddress")
//! ```
//!
//! An address is valid only if it is NOT a point on the ed25519 curve, so no
//! private key can ever sign for it. `find_program_address` scans the bump
//! from 255 down to 0 and returns the first valid result.
//!
//! Seed order is part of the wire contract. Never reorder.

use super::address::Address;
use super::constants::{ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};
use super::errors::DerivationError;
use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};

/// Maximum byte length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, bump included.
pub const MAX_SEEDS: usize = 16;

/// Domain separator appended after the program id.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// True if `bytes` decompresses to a point on the ed25519 curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    VerifyingKey::from_bytes(bytes).is_ok()
}

fn check_seeds(seeds: &[&[u8]], reserved: usize) -> Result<(), DerivationError> {
    if seeds.len() + reserved > MAX_SEEDS {
        return Err(DerivationError::TooManySeeds {
            count: seeds.len() + reserved,
            max: MAX_SEEDS,
        });
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(DerivationError::MaxSeedLengthExceeded {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }
    Ok(())
}

fn hash_seeds(seeds: &[&[u8]], bump: Option<u8>, program_id: &Address) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    if let Some(bump) = bump {
        hasher.update([bump]);
    }
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);
    hasher.finalize().into()
}

/// Derive an address from seeds that already carry their bump.
///
/// # Errors
/// * `DerivationError::OnCurve` - the hash is a valid public key
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address, DerivationError> {
    check_seeds(seeds, 0)?;
    let hash = hash_seeds(seeds, None, program_id);
    if is_on_curve(&hash) {
        return Err(DerivationError::OnCurve);
    }
    Ok(Address::new(hash))
}

/// Find the canonical program address and its bump for `seeds`.
///
/// # Errors
/// * `DerivationError::NoViableBump` - every bump in [0, 255] lands on the curve
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), DerivationError> {
    check_seeds(seeds, 1)?;
    for bump in (0..=u8::MAX).rev() {
        let hash = hash_seeds(seeds, Some(bump), program_id);
        if !is_on_curve(&hash) {
            return Ok((Address::new(hash), bump));
        }
    }
    tracing::error!(program_id = %program_id, "bump search exhausted");
    Err(DerivationError::NoViableBump)
}

/// Associated token account for `wallet` holding `mint`.
///
/// `wallet` may itself be a program address.
pub fn associated_token_address(
    wallet: &Address,
    mint: &Address,
) -> Result<Address, DerivationError> {
    let (address, _) = find_program_address(
        &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )?;
    Ok(address)
}
