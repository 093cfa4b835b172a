//! # Dippies Client Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── golden_vectors.rs    # Pinned addresses, bumps and encodings
//!     ├── fetch_flows.rs       # Store → client → entity → JSON
//!     └── instruction_flows.rs # Fetched entities feeding instruction builders
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dip-tests
//! cargo test -p dip-tests integration::golden_vectors
//! ```

pub mod integration;
