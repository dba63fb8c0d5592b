//! # Node Runtime Library
//!
//! Configuration, logging setup and the startup container of the node. The
//! binary in `main.rs` is a thin wrapper around these.

pub mod container;
pub mod logging;

pub use container::{ConfigError, NodeConfig, NodeContainer};
