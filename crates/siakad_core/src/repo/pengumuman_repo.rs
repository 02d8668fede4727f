//! Announcement repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Write paths must call `validate()` before SQL mutations.
//! - Listing is newest-first: `tanggal DESC, id_pengumuman DESC`.

use crate::model::pengumuman::{Pengumuman, PengumumanDraft, PengumumanId};
use crate::repo::{ensure_schema_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PENGUMUMAN_SELECT_SQL: &str = "SELECT
    id_pengumuman,
    judul,
    deskripsi,
    tanggal,
    lampiran
FROM pengumuman";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[(
    "pengumuman",
    &["id_pengumuman", "judul", "deskripsi", "tanggal", "lampiran"],
)];

/// Repository interface for announcement operations.
pub trait PengumumanRepository {
    /// Inserts one announcement and returns its database-assigned id.
    fn create(&self, draft: &PengumumanDraft) -> RepoResult<PengumumanId>;
    /// Lists all announcements, newest first.
    fn list(&self) -> RepoResult<Vec<Pengumuman>>;
    /// Gets one announcement by id. Absent rows are `Ok(None)`.
    fn get(&self, id: PengumumanId) -> RepoResult<Option<Pengumuman>>;
    /// Updates all mutable fields by id.
    fn update(&self, pengumuman: &Pengumuman) -> RepoResult<()>;
    /// Deletes one announcement by id.
    fn delete(&self, id: PengumumanId) -> RepoResult<()>;
}

/// SQLite-backed announcement repository.
pub struct SqlitePengumumanRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePengumumanRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl PengumumanRepository for SqlitePengumumanRepository<'_> {
    fn create(&self, draft: &PengumumanDraft) -> RepoResult<PengumumanId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO pengumuman (judul, deskripsi, tanggal, lampiran)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.judul.as_str(),
                draft.deskripsi.as_str(),
                draft.tanggal,
                draft.lampiran.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list(&self) -> RepoResult<Vec<Pengumuman>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PENGUMUMAN_SELECT_SQL}
             ORDER BY tanggal DESC, id_pengumuman DESC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut list = Vec::new();
        while let Some(row) = rows.next()? {
            list.push(parse_pengumuman_row(row)?);
        }

        Ok(list)
    }

    fn get(&self, id: PengumumanId) -> RepoResult<Option<Pengumuman>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PENGUMUMAN_SELECT_SQL}
             WHERE id_pengumuman = ?1;"
        ))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_pengumuman_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, pengumuman: &Pengumuman) -> RepoResult<()> {
        pengumuman.validate()?;

        let changed = self.conn.execute(
            "UPDATE pengumuman
             SET judul = ?1, deskripsi = ?2, tanggal = ?3, lampiran = ?4
             WHERE id_pengumuman = ?5;",
            params![
                pengumuman.judul.as_str(),
                pengumuman.deskripsi.as_str(),
                pengumuman.tanggal,
                pengumuman.lampiran.as_deref(),
                pengumuman.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(pengumuman.id));
        }

        Ok(())
    }

    fn delete(&self, id: PengumumanId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM pengumuman WHERE id_pengumuman = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_pengumuman_row(row: &Row<'_>) -> RepoResult<Pengumuman> {
    let pengumuman = Pengumuman {
        id: row.get("id_pengumuman")?,
        judul: row.get("judul")?,
        deskripsi: row.get("deskripsi")?,
        tanggal: row.get("tanggal")?,
        lampiran: row.get("lampiran")?,
    };
    pengumuman.validate()?;
    Ok(pengumuman)
}
