//! Announcement use-case service.

use crate::model::pengumuman::{Pengumuman, PengumumanDraft, PengumumanId};
use crate::repo::pengumuman_repo::PengumumanRepository;
use crate::repo::RepoResult;
use std::time::{SystemTime, UNIX_EPOCH};

/// Use-case service wrapper for announcement CRUD operations.
pub struct PengumumanService<R: PengumumanRepository> {
    repo: R,
}

impl<R: PengumumanRepository> PengumumanService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Publishes an announcement stamped with the current time.
    ///
    /// # Contract
    /// - Sets `tanggal` to the current epoch-millisecond time.
    /// - Returns the database-assigned announcement id.
    pub fn publish(
        &self,
        judul: impl Into<String>,
        deskripsi: impl Into<String>,
        lampiran: Option<String>,
    ) -> RepoResult<PengumumanId> {
        let draft = PengumumanDraft {
            judul: judul.into(),
            deskripsi: deskripsi.into(),
            tanggal: now_epoch_ms(),
            lampiran,
        };
        self.repo.create(&draft)
    }

    /// Creates a new announcement through repository persistence.
    pub fn create(&self, draft: &PengumumanDraft) -> RepoResult<PengumumanId> {
        self.repo.create(draft)
    }

    /// Lists all announcements, newest first.
    pub fn list(&self) -> RepoResult<Vec<Pengumuman>> {
        self.repo.list()
    }

    /// Gets one announcement by id.
    pub fn get(&self, id: PengumumanId) -> RepoResult<Option<Pengumuman>> {
        self.repo.get(id)
    }

    /// Updates an existing announcement by id.
    pub fn update(&self, pengumuman: &Pengumuman) -> RepoResult<()> {
        self.repo.update(pengumuman)
    }

    /// Deletes one announcement by id.
    pub fn delete(&self, id: PengumumanId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
