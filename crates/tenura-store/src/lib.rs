//! Tenura Store — implementations of the durable client storage seam.
//!
//! This crate provides the [`Storage`](tenura_core::storage::Storage)
//! backends:
//! - [`DiskStorage`] — redb-backed file store for durable contexts
//! - [`MemoryStorage`] — ephemeral map for tests and throwaway contexts
//! - [`UnavailableStorage`] — explicit "no storage here" backend for
//!   server-side render passes
//!
//! All three return the core `StorageError` taxonomy directly; there is
//! no crate-local error type because the seam fixes the error contract.

mod disk;
mod memory;
mod unavailable;

pub use disk::DiskStorage;
pub use memory::MemoryStorage;
pub use unavailable::UnavailableStorage;
