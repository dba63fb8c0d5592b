//! Integration flows across `shared-crypto`, `shared-types`, `chain-params`
//! and `node-runtime`.

pub mod flows;
pub mod genesis_wire;
