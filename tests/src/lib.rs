//! # Chain Test Suite
//!
//! Cross-crate tests for the parameter workspace.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs         # registry selection, override and startup flows
//!     └── genesis_wire.rs  # genesis bytes through shared-types and shared-crypto
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p chain-tests
//! cargo test -p chain-tests integration::genesis_wire
//! ```

pub mod integration;
