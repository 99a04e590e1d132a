//! Format mapping domain types: the three-level JSON schema and name derivation.

pub mod naming;
pub mod types;

pub use naming::*;
pub use types::*;
