//! Domain models for the admin data layer.
//!
//! # Responsibility
//! - Define the row-backed records used by repositories and callers.
//! - Own field-level validation shared by all write paths.
//!
//! # Invariants
//! - Entity identity is database-assigned and immutable after creation.
//! - Write paths must pass `validate()` before any SQL mutation.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ekstrakurikuler;
pub mod pengumuman;

/// Field-level validation failure shared by all domain records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `nama` is empty or whitespace-only.
    EmptyNama,
    /// `tingkat` is empty or whitespace-only.
    EmptyTingkat,
    /// `judul` is empty or whitespace-only.
    EmptyJudul,
    /// `tanggal` is before the epoch.
    NegativeTanggal,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNama => write!(f, "nama must not be empty"),
            Self::EmptyTingkat => write!(f, "tingkat must not be empty"),
            Self::EmptyJudul => write!(f, "judul must not be empty"),
            Self::NegativeTanggal => write!(f, "tanggal must not be negative"),
        }
    }
}

impl Error for ValidationError {}
