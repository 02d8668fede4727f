//! Extracurricular activity use-case service.

use crate::model::ekstrakurikuler::{
    EkskulId, Ekstrakurikuler, EkstrakurikulerDraft, EkstrakurikulerWithPembina,
};
use crate::repo::ekskul_repo::EkstrakurikulerRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for activity CRUD operations.
pub struct EkskulService<R: EkstrakurikulerRepository> {
    repo: R,
}

impl<R: EkstrakurikulerRepository> EkskulService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new activity from plain name/level input.
    ///
    /// # Contract
    /// - Returns the database-assigned activity id.
    pub fn register(
        &self,
        nama: impl Into<String>,
        tingkat: impl Into<String>,
    ) -> RepoResult<EkskulId> {
        let draft = EkstrakurikulerDraft::new(nama, tingkat);
        self.repo.create(&draft)
    }

    /// Creates a new activity through repository persistence.
    pub fn create(&self, draft: &EkstrakurikulerDraft) -> RepoResult<EkskulId> {
        self.repo.create(draft)
    }

    /// Lists all activities ordered by name.
    pub fn list(&self) -> RepoResult<Vec<Ekstrakurikuler>> {
        self.repo.list()
    }

    /// Lists all activities with aggregated mentor names.
    pub fn list_with_pembina(&self) -> RepoResult<Vec<EkstrakurikulerWithPembina>> {
        self.repo.list_with_pembina()
    }

    /// Gets one activity by id.
    pub fn get(&self, id: EkskulId) -> RepoResult<Option<Ekstrakurikuler>> {
        self.repo.get(id)
    }

    /// Updates an existing activity by id.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update(&self, ekskul: &Ekstrakurikuler) -> RepoResult<()> {
        self.repo.update(ekskul)
    }

    /// Replaces the full mentor set for one activity.
    pub fn set_pembina(&mut self, id: EkskulId, nips: &[String]) -> RepoResult<()> {
        self.repo.set_pembina(id, nips)
    }

    /// Deletes the activity and its association rows atomically.
    pub fn delete(&mut self, id: EkskulId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
