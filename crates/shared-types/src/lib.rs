//! # Shared Types Crate
//!
//! Chain entities shared by the parameter, runtime and test crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: block, transaction and script layouts are
//!   defined here and nowhere else.
//! - **Byte-exact Encoding**: `encoding` reproduces the relay wire format, so
//!   a header hashed here matches the hash every other node computes.
//! - **Compile-time Literals**: hard-coded hashes and limits are parsed in
//!   `const` context; a malformed literal fails the build, not the node.

pub mod encoding;
pub mod entities;
pub mod errors;
pub mod script;

pub use encoding::{serialize, Encodable};
pub use entities::*;
pub use errors::*;
pub use script::Script;
