//! # Entities
//!
//! Immutable snapshots of the program's accounts. Each type owns its layout
//! and discriminator, knows how to rederive its own address from its
//! genealogy, and converts losslessly to a string-keyed transport form
//! (addresses as base58, integers as decimal strings).

pub mod forest;
pub mod node;
pub mod root;
pub mod tree;

pub use forest::{Forest, ForestJson};
pub use node::{Node, NodeJson};
pub use root::{Root, RootJson};
pub use tree::{Tree, TreeJson};

use super::address::Address;
use super::codec::{read_discriminator, AccountRecord};
use super::errors::{AccountError, FormatError};
use serde::{Deserialize, Serialize};

pub(crate) fn parse_address(field: &str, text: &str) -> Result<Address, AccountError> {
    text.parse()
        .map_err(|e| AccountError::Transport(format!("{field}: {e}")))
}

pub(crate) fn parse_u64(field: &str, text: &str) -> Result<u64, AccountError> {
    text.parse()
        .map_err(|e| AccountError::Transport(format!("{field}: {text:?} is not a u64 ({e})")))
}

// =============================================================================
// ANY ACCOUNT
// =============================================================================

/// Closed set of account records the program owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyAccount {
    Root(Root),
    Forest(Forest),
    Tree(Tree),
    Node(Node),
}

/// Transport form of [`AnyAccount`], tagged by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnyAccountJson {
    Root(RootJson),
    Forest(ForestJson),
    Tree(TreeJson),
    Node(NodeJson),
}

impl AnyAccount {
    /// Decode by dispatching on the leading discriminator.
    ///
    /// # Errors
    /// * `FormatError::UnknownDiscriminator` - not one of this program's records
    pub fn decode(data: &[u8]) -> Result<Self, FormatError> {
        let discriminator = read_discriminator("AnyAccount", data)?;
        match discriminator {
            Root::DISCRIMINATOR => Root::decode(data).map(AnyAccount::Root),
            Forest::DISCRIMINATOR => Forest::decode(data).map(AnyAccount::Forest),
            Tree::DISCRIMINATOR => Tree::decode(data).map(AnyAccount::Tree),
            Node::DISCRIMINATOR => Node::decode(data).map(AnyAccount::Node),
            other => Err(FormatError::UnknownDiscriminator(other)),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            AnyAccount::Root(r) => r.encode(),
            AnyAccount::Forest(f) => f.encode(),
            AnyAccount::Tree(t) => t.encode(),
            AnyAccount::Node(n) => n.encode(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnyAccount::Root(_) => Root::NAME,
            AnyAccount::Forest(_) => Forest::NAME,
            AnyAccount::Tree(_) => Tree::NAME,
            AnyAccount::Node(_) => Node::NAME,
        }
    }

    pub fn to_json(&self) -> AnyAccountJson {
        match self {
            AnyAccount::Root(r) => AnyAccountJson::Root(r.to_json()),
            AnyAccount::Forest(f) => AnyAccountJson::Forest(f.to_json()),
            AnyAccount::Tree(t) => AnyAccountJson::Tree(t.to_json()),
            AnyAccount::Node(n) => AnyAccountJson::Node(n.to_json()),
        }
    }

    pub fn from_json(json: &AnyAccountJson) -> Result<Self, AccountError> {
        Ok(match json {
            AnyAccountJson::Root(r) => AnyAccount::Root(Root::from_json(r)?),
            AnyAccountJson::Forest(f) => AnyAccount::Forest(Forest::from_json(f)?),
            AnyAccountJson::Tree(t) => AnyAccount::Tree(Tree::from_json(t)?),
            AnyAccountJson::Node(n) => AnyAccount::Node(Node::from_json(n)?),
        })
    }
}
