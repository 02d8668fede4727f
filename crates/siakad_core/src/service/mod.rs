//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide stable entry points for admin-panel callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.

pub mod ekskul_service;
pub mod pengumuman_service;
