//! # Forest
//!
//! Top-level container of trees. A forest's vote tokens are held by an
//! associated token account of its authority PDA.
//!
//! Seeds:
//! - forest: `["forest", id]`
//! - authority: `["forest_authority", forest]`
//! - vote account: associated token account of (authority, vote_mint)

use super::{parse_address, parse_u64};
use crate::domain::address::Address;
use crate::domain::codec::{AccountRecord, FieldReader, FieldType, FieldWriter, Layout};
use crate::domain::constants::{FOREST_AUTHORITY_SEED, FOREST_SEED, PROGRAM_ID};
use crate::domain::derivation::{associated_token_address, find_program_address};
use crate::domain::errors::{AccountError, FormatError};
use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};

use super::tree::Tree;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forest {
    id: Address,
    vote_mint: Address,
    admin: Address,
    tree_creation_fee: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForestJson {
    pub id: String,
    pub vote_mint: String,
    pub admin: String,
    pub tree_creation_fee: String,
}

impl Forest {
    pub fn new(id: Address, vote_mint: Address, admin: Address, tree_creation_fee: u64) -> Self {
        Self {
            id,
            vote_mint,
            admin,
            tree_creation_fee,
        }
    }

    pub fn id(&self) -> Address {
        self.id
    }

    pub fn vote_mint(&self) -> Address {
        self.vote_mint
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn tree_creation_fee(&self) -> u64 {
        self.tree_creation_fee
    }

    pub fn derive_address(id: &Address) -> Result<Address, AccountError> {
        let (address, _) = find_program_address(&[FOREST_SEED, id.as_ref()], &PROGRAM_ID)?;
        Ok(address)
    }

    /// PDA that signs for the forest's token movements.
    pub fn derive_authority(forest: &Address) -> Result<Address, AccountError> {
        let (address, _) =
            find_program_address(&[FOREST_AUTHORITY_SEED, forest.as_ref()], &PROGRAM_ID)?;
        Ok(address)
    }

    /// Token account holding staked votes for a forest.
    pub fn derive_vote_account(
        forest: &Address,
        vote_mint: &Address,
    ) -> Result<Address, AccountError> {
        let authority = Self::derive_authority(forest)?;
        Ok(associated_token_address(&authority, vote_mint)?)
    }

    pub fn address(&self) -> Result<Address, AccountError> {
        Self::derive_address(&self.id)
    }

    pub fn authority(&self) -> Result<Address, AccountError> {
        Self::derive_authority(&self.address()?)
    }

    pub fn vote_account(&self) -> Result<Address, AccountError> {
        Self::derive_vote_account(&self.address()?, &self.vote_mint)
    }

    /// Address of this forest's tree tagged `tag`.
    pub fn tree_address(&self, tag: &Tag) -> Result<Address, AccountError> {
        Tree::derive_address(&self.address()?, tag)
    }

    pub fn to_json(&self) -> ForestJson {
        ForestJson {
            id: self.id.to_string(),
            vote_mint: self.vote_mint.to_string(),
            admin: self.admin.to_string(),
            tree_creation_fee: self.tree_creation_fee.to_string(),
        }
    }

    pub fn from_json(json: &ForestJson) -> Result<Self, AccountError> {
        Ok(Self {
            id: parse_address("id", &json.id)?,
            vote_mint: parse_address("voteMint", &json.vote_mint)?,
            admin: parse_address("admin", &json.admin)?,
            tree_creation_fee: parse_u64("treeCreationFee", &json.tree_creation_fee)?,
        })
    }
}

impl AccountRecord for Forest {
    const NAME: &'static str = "Forest";
    const DISCRIMINATOR: [u8; 8] = [1, 221, 148, 237, 29, 139, 146, 24];
    const LAYOUT: Layout = &[
        ("id", FieldType::Address),
        ("voteMint", FieldType::Address),
        ("admin", FieldType::Address),
        ("treeCreationFee", FieldType::U64),
    ];

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            id: reader.read_address()?,
            vote_mint: reader.read_address()?,
            admin: reader.read_address()?,
            tree_creation_fee: reader.read_u64()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer
            .write_address(&self.id)
            .write_address(&self.vote_mint)
            .write_address(&self.admin)
            .write_u64(self.tree_creation_fee);
    }
}
