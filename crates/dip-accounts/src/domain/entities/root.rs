//! # Root
//!
//! Global root account of the single-tree deployment. Owns a vote
//! mint and charges a fee per tree.
//!
//! Seeds: `["root", id]`

use super::{parse_address, parse_u64};
use crate::domain::address::Address;
use crate::domain::codec::{AccountRecord, FieldReader, FieldType, FieldWriter, Layout};
use crate::domain::constants::{PROGRAM_ID, ROOT_SEED};
use crate::domain::derivation::find_program_address;
use crate::domain::errors::{AccountError, FormatError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    /// The ID of the root
    id: Address,
    /// The token used to vote for a tag
    vote_mint: Address,
    /// Admin of the root
    admin: Address,
    /// Cost to create a tree from this root
    tree_creation_fee: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootJson {
    pub id: String,
    pub vote_mint: String,
    pub admin: String,
    pub tree_creation_fee: String,
}

impl Root {
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

    /// Program address of the root with `id`.
    pub fn derive_address(id: &Address) -> Result<Address, AccountError> {
        let (address, _) = find_program_address(&[ROOT_SEED, id.as_ref()], &PROGRAM_ID)?;
        Ok(address)
    }

    pub fn address(&self) -> Result<Address, AccountError> {
        Self::derive_address(&self.id)
    }

    pub fn to_json(&self) -> RootJson {
        RootJson {
            id: self.id.to_string(),
            vote_mint: self.vote_mint.to_string(),
            admin: self.admin.to_string(),
            tree_creation_fee: self.tree_creation_fee.to_string(),
        }
    }

    pub fn from_json(json: &RootJson) -> Result<Self, AccountError> {
        Ok(Self {
            id: parse_address("id", &json.id)?,
            vote_mint: parse_address("voteMint", &json.vote_mint)?,
            admin: parse_address("admin", &json.admin)?,
            tree_creation_fee: parse_u64("treeCreationFee", &json.tree_creation_fee)?,
        })
    }
}

impl AccountRecord for Root {
    const NAME: &'static str = "Root";
    const DISCRIMINATOR: [u8; 8] = [46, 159, 131, 37, 245, 84, 5, 9];
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
