//! # Node
//!
//! Seeds: `["node", tree, parent, tag]`, where `parent` is the zero address
//! for a tree's root node.

use super::{parse_address, parse_u64};
use crate::domain::address::Address;
use crate::domain::codec::{AccountRecord, FieldReader, FieldType, FieldWriter, Layout};
use crate::domain::constants::{NODE_SEED, PROGRAM_ID};
use crate::domain::derivation::find_program_address;
use crate::domain::errors::{AccountError, FormatError};
use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    tree: Address,
    parent: Address,
    tag: Tag,
    /// Total vote tokens staked on notes attached to this node
    stake: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJson {
    pub tree: String,
    pub parent: String,
    pub tag: String,
    pub stake: String,
}

impl Node {
    pub fn new(tree: Address, parent: Address, tag: Tag, stake: u64) -> Self {
        Self {
            tree,
            parent,
            tag,
            stake,
        }
    }

    pub fn tree(&self) -> Address {
        self.tree
    }

    pub fn parent(&self) -> Address {
        self.parent
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_zero()
    }

    pub fn derive_address(
        tree: &Address,
        parent: &Address,
        tag: &Tag,
    ) -> Result<Address, AccountError> {
        let (address, _) = find_program_address(
            &[NODE_SEED, tree.as_ref(), parent.as_ref(), tag.as_bytes()],
            &PROGRAM_ID,
        )?;
        Ok(address)
    }

    pub fn address(&self) -> Result<Address, AccountError> {
        Self::derive_address(&self.tree, &self.parent, &self.tag)
    }

    /// Address of the child of this node tagged `tag`.
    pub fn child_address(&self, tag: &Tag) -> Result<Address, AccountError> {
        Self::derive_address(&self.tree, &self.address()?, tag)
    }

    pub fn to_json(&self) -> NodeJson {
        NodeJson {
            tree: self.tree.to_string(),
            parent: self.parent.to_string(),
            tag: self.tag.to_string(),
            stake: self.stake.to_string(),
        }
    }

    pub fn from_json(json: &NodeJson) -> Result<Self, AccountError> {
        Ok(Self {
            tree: parse_address("tree", &json.tree)?,
            parent: parse_address("parent", &json.parent)?,
            tag: Tag::new(json.tag.clone())?,
            stake: parse_u64("stake", &json.stake)?,
        })
    }
}

impl AccountRecord for Node {
    const NAME: &'static str = "Node";
    const DISCRIMINATOR: [u8; 8] = [208, 53, 1, 3, 49, 122, 180, 49];
    const LAYOUT: Layout = &[
        ("tree", FieldType::Address),
        ("parent", FieldType::Address),
        ("tag", FieldType::Tag),
        ("stake", FieldType::U64),
    ];

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            tree: reader.read_address()?,
            parent: reader.read_address()?,
            tag: reader.read_tag()?,
            stake: reader.read_u64()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer
            .write_address(&self.tree)
            .write_address(&self.parent)
            .write_tag(&self.tag)
            .write_u64(self.stake);
    }
}
