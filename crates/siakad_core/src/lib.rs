//! Persistence core for the school administration system.
//! This crate is the single source of truth for admin data contracts.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ekstrakurikuler::{
    EkskulId, Ekstrakurikuler, EkstrakurikulerDraft, EkstrakurikulerWithPembina,
};
pub use model::pengumuman::{Pengumuman, PengumumanDraft, PengumumanId};
pub use model::ValidationError;
pub use repo::ekskul_repo::{EkstrakurikulerRepository, SqliteEkskulRepository, PEMBINA_PLACEHOLDER};
pub use repo::pengumuman_repo::{PengumumanRepository, SqlitePengumumanRepository};
pub use repo::{RepoError, RepoResult};
pub use service::ekskul_service::EkskulService;
pub use service::pengumuman_service::PengumumanService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
