use rusqlite::Connection;
use siakad_core::db::open_db_in_memory;
use siakad_core::{
    Pengumuman, PengumumanDraft, PengumumanRepository, PengumumanService, RepoError,
    SqlitePengumumanRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    let draft = PengumumanDraft {
        judul: "Libur Semester".to_string(),
        deskripsi: "Sekolah libur mulai minggu depan.".to_string(),
        tanggal: 1_700_000_000_000,
        lampiran: Some("kalender.pdf".to_string()),
    };
    let id = repo.create(&draft).unwrap();

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.judul, "Libur Semester");
    assert_eq!(loaded.deskripsi, "Sekolah libur mulai minggu depan.");
    assert_eq!(loaded.tanggal, 1_700_000_000_000);
    assert_eq!(loaded.lampiran.as_deref(), Some("kalender.pdf"));
}

#[test]
fn create_without_lampiran_roundtrips_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    let draft = PengumumanDraft {
        judul: "Rapat Guru".to_string(),
        deskripsi: "Rapat rutin bulanan.".to_string(),
        tanggal: 1_700_000_000_000,
        lampiran: None,
    };
    let id = repo.create(&draft).unwrap();

    let loaded = repo.get(id).unwrap().unwrap();
    assert!(loaded.lampiran.is_none());
}

#[test]
fn get_missing_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    assert!(repo.get(404).unwrap().is_none());
}

#[test]
fn list_returns_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    for (judul, tanggal) in [("tengah", 200), ("lama", 100), ("baru", 300)] {
        let draft = PengumumanDraft {
            judul: judul.to_string(),
            deskripsi: "isi".to_string(),
            tanggal,
            lampiran: None,
        };
        repo.create(&draft).unwrap();
    }

    let titles: Vec<String> = repo
        .list()
        .unwrap()
        .into_iter()
        .map(|item| item.judul)
        .collect();
    assert_eq!(titles, vec!["baru", "tengah", "lama"]);
}

#[test]
fn update_is_visible_and_missing_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    let draft = PengumumanDraft {
        judul: "Ujian".to_string(),
        deskripsi: "Jadwal menyusul.".to_string(),
        tanggal: 100,
        lampiran: None,
    };
    let id = repo.create(&draft).unwrap();

    let updated = Pengumuman {
        id,
        judul: "Ujian Akhir".to_string(),
        deskripsi: "Jadwal terlampir.".to_string(),
        tanggal: 200,
        lampiran: Some("jadwal.pdf".to_string()),
    };
    repo.update(&updated).unwrap();
    assert_eq!(repo.get(id).unwrap().unwrap(), updated);

    let missing = Pengumuman { id: 404, ..updated };
    let err = repo.update(&missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(404)));
}

#[test]
fn delete_removes_row_and_missing_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    let draft = PengumumanDraft {
        judul: "Lomba".to_string(),
        deskripsi: "Pendaftaran dibuka.".to_string(),
        tanggal: 100,
        lampiran: None,
    };
    let id = repo.create(&draft).unwrap();

    repo.delete(id).unwrap();
    assert!(repo.get(id).unwrap().is_none());

    let err = repo.delete(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(deleted) if deleted == id));
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();

    let blank = PengumumanDraft {
        judul: " ".to_string(),
        deskripsi: "isi".to_string(),
        tanggal: 100,
        lampiran: None,
    };
    let create_err = repo.create(&blank).unwrap_err();
    assert!(matches!(create_err, RepoError::Validation(_)));

    let negative = Pengumuman {
        id: 1,
        judul: "Libur".to_string(),
        deskripsi: "isi".to_string(),
        tanggal: -5,
        lampiran: None,
    };
    let update_err = repo.update(&negative).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqlitePengumumanRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection { .. })
    ));
}

#[test]
fn service_publish_stamps_current_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePengumumanRepository::try_new(&conn).unwrap();
    let service = PengumumanService::new(repo);

    let id = service
        .publish("Penerimaan Siswa Baru", "Formulir tersedia di TU.", None)
        .unwrap();

    let loaded = service.get(id).unwrap().unwrap();
    assert_eq!(loaded.judul, "Penerimaan Siswa Baru");
    assert!(loaded.tanggal > 0);
}
