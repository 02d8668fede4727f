//! Extracurricular activity repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `ekstrakurikuler` storage.
//! - Own the cascading delete across `pembina` and `peserta_ekskul`.
//!
//! # Invariants
//! - Write paths must call `validate()` before SQL mutations.
//! - `delete` removes the activity row and both association tables' rows in
//!   one transaction; on any failure all three deletes roll back together on
//!   the same connection.
//! - `set_pembina` replaces the whole mentor set in a single transaction.

use crate::model::ekstrakurikuler::{
    EkskulId, Ekstrakurikuler, EkstrakurikulerDraft, EkstrakurikulerWithPembina,
};
use crate::repo::{ensure_schema_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

/// Display text substituted when an activity has no mentor assigned.
///
/// Presentation text living in the data layer is preserved legacy behavior;
/// it is derived at read time and never persisted.
pub const PEMBINA_PLACEHOLDER: &str = "Belum Ada Pembina";

const EKSKUL_SELECT_SQL: &str = "SELECT
    id_ekstrakurikuler,
    nama,
    tingkat
FROM ekstrakurikuler";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("ekstrakurikuler", &["id_ekstrakurikuler", "nama", "tingkat"]),
    ("pembina", &["id_ekstrakurikuler", "nip"]),
    ("peserta_ekskul", &["id_ekstrakurikuler", "nis"]),
    ("guru", &["nip", "nama"]),
];

/// Repository interface for extracurricular activity operations.
pub trait EkstrakurikulerRepository {
    /// Inserts one activity and returns its database-assigned id.
    fn create(&self, draft: &EkstrakurikulerDraft) -> RepoResult<EkskulId>;
    /// Lists all activities ordered by name.
    fn list(&self) -> RepoResult<Vec<Ekstrakurikuler>>;
    /// Lists all activities with aggregated mentor names.
    fn list_with_pembina(&self) -> RepoResult<Vec<EkstrakurikulerWithPembina>>;
    /// Gets one activity by id. Absent rows are `Ok(None)`.
    fn get(&self, id: EkskulId) -> RepoResult<Option<Ekstrakurikuler>>;
    /// Updates all mutable fields by id.
    fn update(&self, ekskul: &Ekstrakurikuler) -> RepoResult<()>;
    /// Replaces the full mentor set for one activity in one transaction.
    fn set_pembina(&mut self, id: EkskulId, nips: &[String]) -> RepoResult<()>;
    /// Deletes the activity and its association rows atomically.
    fn delete(&mut self, id: EkskulId) -> RepoResult<()>;
}

/// SQLite-backed extracurricular activity repository.
pub struct SqliteEkskulRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEkskulRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl EkstrakurikulerRepository for SqliteEkskulRepository<'_> {
    fn create(&self, draft: &EkstrakurikulerDraft) -> RepoResult<EkskulId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO ekstrakurikuler (nama, tingkat) VALUES (?1, ?2);",
            params![draft.nama.as_str(), draft.tingkat.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list(&self) -> RepoResult<Vec<Ekstrakurikuler>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EKSKUL_SELECT_SQL}
             ORDER BY nama ASC, id_ekstrakurikuler ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut list = Vec::new();
        while let Some(row) = rows.next()? {
            list.push(parse_ekskul_row(row)?);
        }

        Ok(list)
    }

    fn list_with_pembina(&self) -> RepoResult<Vec<EkstrakurikulerWithPembina>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                e.id_ekstrakurikuler,
                e.nama,
                e.tingkat,
                group_concat(g.nama, ', ') AS pembina_names
             FROM ekstrakurikuler e
             LEFT JOIN pembina p ON p.id_ekstrakurikuler = e.id_ekstrakurikuler
             LEFT JOIN guru g ON g.nip = p.nip
             GROUP BY e.id_ekstrakurikuler, e.nama, e.tingkat
             ORDER BY e.nama ASC, e.id_ekstrakurikuler ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut list = Vec::new();
        while let Some(row) = rows.next()? {
            let pembina: Option<String> = row.get("pembina_names")?;
            let record = EkstrakurikulerWithPembina {
                id: row.get("id_ekstrakurikuler")?,
                nama: row.get("nama")?,
                tingkat: row.get("tingkat")?,
                pembina: pembina.unwrap_or_else(|| PEMBINA_PLACEHOLDER.to_string()),
            };
            list.push(record);
        }

        Ok(list)
    }

    fn get(&self, id: EkskulId) -> RepoResult<Option<Ekstrakurikuler>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EKSKUL_SELECT_SQL}
             WHERE id_ekstrakurikuler = ?1;"
        ))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_ekskul_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, ekskul: &Ekstrakurikuler) -> RepoResult<()> {
        ekskul.validate()?;

        let changed = self.conn.execute(
            "UPDATE ekstrakurikuler
             SET nama = ?1, tingkat = ?2
             WHERE id_ekstrakurikuler = ?3;",
            params![ekskul.nama.as_str(), ekskul.tingkat.as_str(), ekskul.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(ekskul.id));
        }

        Ok(())
    }

    fn set_pembina(&mut self, id: EkskulId, nips: &[String]) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if !ekskul_exists_in_tx(&tx, id)? {
            return Err(RepoError::NotFound(id));
        }

        tx.execute("DELETE FROM pembina WHERE id_ekstrakurikuler = ?1;", [id])?;

        for nip in nips {
            tx.execute(
                "INSERT OR IGNORE INTO pembina (id_ekstrakurikuler, nip)
                 VALUES (?1, ?2);",
                params![id, nip.as_str()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn delete(&mut self, id: EkskulId) -> RepoResult<()> {
        // Rollback on any failure is the drop path of this same transaction
        // handle; no second connection is ever involved.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute("DELETE FROM pembina WHERE id_ekstrakurikuler = ?1;", [id])?;
        tx.execute(
            "DELETE FROM peserta_ekskul WHERE id_ekstrakurikuler = ?1;",
            [id],
        )?;
        let changed = tx.execute(
            "DELETE FROM ekstrakurikuler WHERE id_ekstrakurikuler = ?1;",
            [id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_ekskul_row(row: &Row<'_>) -> RepoResult<Ekstrakurikuler> {
    let ekskul = Ekstrakurikuler {
        id: row.get("id_ekstrakurikuler")?,
        nama: row.get("nama")?,
        tingkat: row.get("tingkat")?,
    };
    ekskul.validate()?;
    Ok(ekskul)
}

fn ekskul_exists_in_tx(tx: &Transaction<'_>, id: EkskulId) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM ekstrakurikuler
            WHERE id_ekstrakurikuler = ?1
        );",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
