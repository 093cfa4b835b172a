//! # dip-accounts
//!
//! Client-side access layer for the Dippies index program.
//!
//! ## Role
//!
//! - **Address derivation**: program addresses for forests, trees and nodes,
//!   rederived from their genealogy, never stored
//! - **Account codec**: bit-exact encode/decode of the program's fixed-layout
//!   records, guarded by 8-byte discriminators
//! - **Entities**: immutable `Root`, `Forest`, `Tree`, `Node` snapshots with
//!   a lossless JSON transport form
//! - **Instructions**: unsigned payloads for the program's handlers
//!
//! ## Data Flow
//!
//! ```text
//! seeds ──derive──→ Address ──AccountStore──→ (owner, bytes)
//!                                                  │
//!                                        owner check + decode
//!                                                  ↓
//!                                    Root | Forest | Tree | Node ──→ JSON
//! ```
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure logic, bytes in and bytes out
//! - **Ports Layer** (`ports/`): the storage collaborator trait
//! - **Adapters** (`adapters/`): in-memory store
//! - **Service Layer** (`service.rs`): fetch, owner check, decode
//!
//! Nothing here signs, submits or retries.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod telemetry;

pub use adapters::InMemoryAccountStore;
pub use config::ClientConfig;
pub use domain::*;
pub use ports::{AccountStore, StoredAccount};
pub use service::{AccountClient, Fetched};
pub use telemetry::{init_tracing, TelemetryError};
