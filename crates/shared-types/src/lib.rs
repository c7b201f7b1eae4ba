//! # Shared Types Crate
//!
//! Identities and primitives shared by the committee (`mc-01-committee`) and
//! consensus (`mc-02-consensus`) subsystems.
//!
//! ## Design Principles
//!
//! - **Opaque identities**: Core, committee, reputation and validator
//!   identities are plain 20-byte addresses; whoever deploys them hands the
//!   addresses in.
//! - **Block heights as time**: every timeout is a block-height threshold
//!   compared against the current height at call time.
//! - **One error taxonomy**: each subsystem error maps onto an [`ErrorKind`].

pub mod entities;
pub mod errors;
pub mod hashing;

pub use entities::*;
pub use errors::ErrorKind;
pub use hashing::keccak256;
