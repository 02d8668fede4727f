//! Announcement domain model.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

/// Stable announcement identifier, assigned by the database on insert.
pub type PengumumanId = i64;

/// Row-backed announcement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pengumuman {
    /// Serialized as `id_pengumuman` to match the external schema.
    #[serde(rename = "id_pengumuman")]
    pub id: PengumumanId,
    pub judul: String,
    pub deskripsi: String,
    /// Publication time in epoch milliseconds.
    pub tanggal: i64,
    /// Optional attachment reference (file path or URL).
    pub lampiran: Option<String>,
}

impl Pengumuman {
    /// Validates mutable fields before an update is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.judul, self.tanggal)
    }
}

/// Create input for a new announcement; identity is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PengumumanDraft {
    pub judul: String,
    pub deskripsi: String,
    /// Publication time in epoch milliseconds.
    pub tanggal: i64,
    pub lampiran: Option<String>,
}

impl PengumumanDraft {
    /// Validates fields before the insert is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.judul, self.tanggal)
    }
}

fn validate_fields(judul: &str, tanggal: i64) -> Result<(), ValidationError> {
    if judul.trim().is_empty() {
        return Err(ValidationError::EmptyJudul);
    }
    if tanggal < 0 {
        return Err(ValidationError::NegativeTanggal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PengumumanDraft;
    use crate::model::ValidationError;

    #[test]
    fn draft_validation_rejects_blank_judul_and_negative_tanggal() {
        let blank = PengumumanDraft {
            judul: " ".to_string(),
            deskripsi: "isi".to_string(),
            tanggal: 0,
            lampiran: None,
        };
        assert_eq!(blank.validate(), Err(ValidationError::EmptyJudul));

        let negative = PengumumanDraft {
            judul: "Libur".to_string(),
            deskripsi: "isi".to_string(),
            tanggal: -1,
            lampiran: None,
        };
        assert_eq!(negative.validate(), Err(ValidationError::NegativeTanggal));
    }
}
