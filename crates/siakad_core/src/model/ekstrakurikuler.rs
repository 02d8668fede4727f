//! Extracurricular activity domain model.
//!
//! # Responsibility
//! - Define the activity record and its create draft.
//! - Define the mentor-enriched read model for the join listing.
//!
//! # Invariants
//! - `id` is assigned by the database on insert and never changes.
//! - `nama` and `tingkat` are freely mutable via update operations.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable activity identifier, assigned by the database on insert.
pub type EkskulId = i64;

/// Row-backed extracurricular activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ekstrakurikuler {
    /// Serialized as `id_ekstrakurikuler` to match the external schema.
    #[serde(rename = "id_ekstrakurikuler")]
    pub id: EkskulId,
    /// Activity name, e.g. "Basket".
    pub nama: String,
    /// School level the activity is offered at, e.g. "SMA".
    pub tingkat: String,
}

impl Ekstrakurikuler {
    /// Validates mutable fields before an update is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.nama, &self.tingkat)
    }
}

/// Create input for a new activity; identity is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EkstrakurikulerDraft {
    pub nama: String,
    pub tingkat: String,
}

impl EkstrakurikulerDraft {
    pub fn new(nama: impl Into<String>, tingkat: impl Into<String>) -> Self {
        Self {
            nama: nama.into(),
            tingkat: tingkat.into(),
        }
    }

    /// Validates fields before the insert is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.nama, &self.tingkat)
    }
}

/// Read model for the mentor-enriched activity listing.
///
/// `pembina` is derived at read time from the `pembina`/`guru` join and is
/// never persisted on the activity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EkstrakurikulerWithPembina {
    #[serde(rename = "id_ekstrakurikuler")]
    pub id: EkskulId,
    pub nama: String,
    pub tingkat: String,
    /// Mentor names joined with `", "`, or the fixed placeholder when the
    /// activity has no mentor assigned.
    pub pembina: String,
}

fn validate_fields(nama: &str, tingkat: &str) -> Result<(), ValidationError> {
    if nama.trim().is_empty() {
        return Err(ValidationError::EmptyNama);
    }
    if tingkat.trim().is_empty() {
        return Err(ValidationError::EmptyTingkat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Ekstrakurikuler, EkstrakurikulerDraft};
    use crate::model::ValidationError;

    #[test]
    fn draft_validation_rejects_blank_fields() {
        let blank_nama = EkstrakurikulerDraft::new("  ", "SMA");
        assert_eq!(blank_nama.validate(), Err(ValidationError::EmptyNama));

        let blank_tingkat = EkstrakurikulerDraft::new("Basket", "");
        assert_eq!(blank_tingkat.validate(), Err(ValidationError::EmptyTingkat));

        assert!(EkstrakurikulerDraft::new("Basket", "SMA").validate().is_ok());
    }

    #[test]
    fn record_serializes_with_schema_field_names() {
        let ekskul = Ekstrakurikuler {
            id: 7,
            nama: "Basket".to_string(),
            tingkat: "SMA".to_string(),
        };

        let json = serde_json::to_value(&ekskul).unwrap();
        assert_eq!(json["id_ekstrakurikuler"], 7);
        assert_eq!(json["nama"], "Basket");
        assert_eq!(json["tingkat"], "SMA");
    }
}
