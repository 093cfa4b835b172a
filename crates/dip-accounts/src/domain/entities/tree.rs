//! # Tree
//!
//! Seeds: `["tree", forest, tag]`. The root node of a tree shares the tree's
//! tag and has a zero parent.

use super::node::Node;
use super::parse_address;
use crate::domain::address::Address;
use crate::domain::codec::{AccountRecord, FieldReader, FieldType, FieldWriter, Layout};
use crate::domain::constants::{PROGRAM_ID, TREE_SEED};
use crate::domain::derivation::find_program_address;
use crate::domain::errors::{AccountError, FormatError};
use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    forest: Address,
    root_node: Address,
    tag: Tag,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeJson {
    pub forest: String,
    pub root_node: String,
    pub tag: String,
}

impl Tree {
    pub fn new(forest: Address, root_node: Address, tag: Tag) -> Self {
        Self {
            forest,
            root_node,
            tag,
        }
    }

    /// Build the tree that `create_tree` would initialise under `forest`.
    pub fn for_forest(forest: Address, tag: Tag) -> Result<Self, AccountError> {
        let address = Self::derive_address(&forest, &tag)?;
        let root_node = Node::derive_address(&address, &Address::ZERO, &tag)?;
        Ok(Self::new(forest, root_node, tag))
    }

    pub fn forest(&self) -> Address {
        self.forest
    }

    pub fn root_node(&self) -> Address {
        self.root_node
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn derive_address(forest: &Address, tag: &Tag) -> Result<Address, AccountError> {
        let (address, _) =
            find_program_address(&[TREE_SEED, forest.as_ref(), tag.as_bytes()], &PROGRAM_ID)?;
        Ok(address)
    }

    pub fn address(&self) -> Result<Address, AccountError> {
        Self::derive_address(&self.forest, &self.tag)
    }

    /// Address of a top-level node hanging directly off this tree.
    pub fn node_address(&self, parent: &Address, tag: &Tag) -> Result<Address, AccountError> {
        Node::derive_address(&self.address()?, parent, tag)
    }

    pub fn to_json(&self) -> TreeJson {
        TreeJson {
            forest: self.forest.to_string(),
            root_node: self.root_node.to_string(),
            tag: self.tag.to_string(),
        }
    }

    pub fn from_json(json: &TreeJson) -> Result<Self, AccountError> {
        Ok(Self {
            forest: parse_address("forest", &json.forest)?,
            root_node: parse_address("rootNode", &json.root_node)?,
            tag: Tag::new(json.tag.clone())?,
        })
    }
}

impl AccountRecord for Tree {
    const NAME: &'static str = "Tree";
    const DISCRIMINATOR: [u8; 8] = [100, 9, 213, 154, 6, 136, 109, 55];
    const LAYOUT: Layout = &[
        ("forest", FieldType::Address),
        ("rootNode", FieldType::Address),
        ("tag", FieldType::Tag),
    ];

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            forest: reader.read_address()?,
            root_node: reader.read_address()?,
            tag: reader.read_tag()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer
            .write_address(&self.forest)
            .write_address(&self.root_node)
            .write_tag(&self.tag);
    }
}
