//! Domain models for Tenura.
//!
//! These are the core types shared across all crates.

pub mod identity;
pub mod landlord;
pub mod record;
pub mod role;
