//! # Instruction Builders
//!
//! Assemble instruction payloads for the index program. Each builder is a
//! pure function of its explicit parameters: it derives whatever program
//! addresses the handler expects and returns the account list plus the
//! encoded arguments. Signing and submission happen elsewhere.
//!
//! Data layout: `[8-byte sighash("global:<name>")][args...]`.

use super::address::Address;
use super::codec::{instruction_discriminator, FieldWriter};
use super::constants::{
    ASSOCIATED_TOKEN_PROGRAM_ID, PROGRAM_ID, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use super::derivation::associated_token_address;
use super::entities::{Forest, Node, Tree};
use super::errors::AccountError;
use super::tag::Tag;
use serde::{Deserialize, Serialize};

/// Account reference passed to an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub address: Address,
    pub is_writable: bool,
    pub is_signer: bool,
}

impl AccountMeta {
    pub fn writable(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_writable: true,
            is_signer,
        }
    }

    pub fn readonly(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_writable: false,
            is_signer,
        }
    }
}

/// A fully assembled, unsigned instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub program_id: Address,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    /// Signers required to submit this instruction, in account order.
    pub fn signers(&self) -> Vec<Address> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| meta.address)
            .collect()
    }
}

fn args(name: &str) -> FieldWriter {
    FieldWriter::with_discriminator(instruction_discriminator(name), 64)
}

/// `create_forest(id, admin, tree_creation_fee)`
pub fn create_forest(
    signer: Address,
    forest_id: Address,
    vote_mint: Address,
    admin: Address,
    tree_creation_fee: u64,
) -> Result<Instruction, AccountError> {
    let forest = Forest::derive_address(&forest_id)?;
    let forest_authority = Forest::derive_authority(&forest)?;
    let vote_account = associated_token_address(&forest_authority, &vote_mint)?;

    let mut data = args("create_forest");
    data.write_address(&forest_id)
        .write_address(&admin)
        .write_u64(tree_creation_fee);

    Ok(Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(signer, true),
            AccountMeta::readonly(forest_authority, false),
            AccountMeta::writable(forest, false),
            AccountMeta::readonly(vote_mint, false),
            AccountMeta::writable(vote_account, false),
            AccountMeta::readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::readonly(RENT_SYSVAR_ID, false),
        ],
        data: data.into_bytes(),
    })
}

/// `set_forest(admin, tree_creation_fee)`. Must be signed by the current admin.
pub fn set_forest(
    current_admin: Address,
    forest_id: Address,
    admin: Address,
    tree_creation_fee: u64,
) -> Result<Instruction, AccountError> {
    let forest = Forest::derive_address(&forest_id)?;

    let mut data = args("set_forest");
    data.write_address(&admin).write_u64(tree_creation_fee);

    Ok(Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::readonly(current_admin, true),
            AccountMeta::writable(forest, false),
        ],
        data: data.into_bytes(),
    })
}

/// `create_tree(tag)`. The signer pays the forest's tree creation fee to the
/// admin in vote tokens.
pub fn create_tree(
    signer: Address,
    forest_id: Address,
    vote_mint: Address,
    admin: Address,
    tag: &Tag,
) -> Result<Instruction, AccountError> {
    let forest = Forest::derive_address(&forest_id)?;
    let forest_authority = Forest::derive_authority(&forest)?;
    let tree = Tree::derive_address(&forest, tag)?;
    let root_node = Node::derive_address(&tree, &Address::ZERO, tag)?;

    let mut data = args("create_tree");
    data.write_string(tag.as_str());

    Ok(Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(signer, true),
            AccountMeta::readonly(forest, false),
            AccountMeta::readonly(admin, false),
            AccountMeta::readonly(forest_authority, false),
            AccountMeta::readonly(vote_mint, false),
            AccountMeta::writable(associated_token_address(&signer, &vote_mint)?, false),
            AccountMeta::writable(associated_token_address(&admin, &vote_mint)?, false),
            AccountMeta::writable(tree, false),
            AccountMeta::writable(root_node, false),
            AccountMeta::readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::readonly(RENT_SYSVAR_ID, false),
        ],
        data: data.into_bytes(),
    })
}

/// `create_node(tag)` under `parent_node` of `tree`.
pub fn create_node(
    signer: Address,
    forest_id: Address,
    tree: Address,
    parent_node: Address,
    tag: &Tag,
) -> Result<Instruction, AccountError> {
    let forest = Forest::derive_address(&forest_id)?;
    let node = Node::derive_address(&tree, &parent_node, tag)?;

    let mut data = args("create_node");
    data.write_string(tag.as_str());

    Ok(Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(signer, true),
            AccountMeta::readonly(forest, false),
            AccountMeta::readonly(tree, false),
            AccountMeta::readonly(parent_node, false),
            AccountMeta::writable(node, false),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::readonly(RENT_SYSVAR_ID, false),
        ],
        data: data.into_bytes(),
    })
}
