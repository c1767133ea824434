//! JSON-based student record storage.
//!
//! The whole record sequence lives in one JSON blob on disk. Every mutation
//! rewrites the blob before the in-memory sequence is swapped, so the two can
//! never diverge once an operation has returned.

use crate::config::Paths;
use crate::error::{StoreError, StoreResult};
use crate::storage::record::{Student, StudentPatch};
use crate::types::Nim;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// File name of the record blob, carried over from the original data format.
const DATA_FILE: &str = "db_mahasiswa_v1.json";

/// The student record store.
///
/// Owns the ordered in-memory sequence and its persisted mirror. Insertion
/// order is the canonical display order.
pub struct RecordStore {
    data_file: PathBuf,
    records: Vec<Student>,
    load_warning: Option<String>,
}

impl RecordStore {
    /// Open the store at the default data location.
    pub fn open() -> StoreResult<Self> {
        let paths = Paths::get();
        Self::open_at(paths.data_dir.join(DATA_FILE))
    }

    /// Open the store backed by a specific file.
    ///
    /// A missing file yields an empty store. Unreadable or unparseable
    /// content also yields an empty store, with the cause recorded as a
    /// non-fatal load warning instead of an error.
    pub fn open_at(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_file = path.into();

        if let Some(parent) = data_file.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut load_warning = None;
        let records = if data_file.exists() {
            match fs::read_to_string(&data_file) {
                Ok(content) => match serde_json::from_str::<Vec<Student>>(&content) {
                    Ok(records) => records,
                    Err(e) => {
                        warn!(file = %data_file.display(), error = %e, "stored data unparseable, starting empty");
                        load_warning = Some(StoreError::Load(e.to_string()).to_string());
                        Vec::new()
                    }
                },
                Err(e) => {
                    warn!(file = %data_file.display(), error = %e, "stored data unreadable, starting empty");
                    load_warning = Some(StoreError::Load(e.to_string()).to_string());
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        debug!(file = %data_file.display(), count = records.len(), "record store opened");

        Ok(Self {
            data_file,
            records,
            load_warning,
        })
    }

    /// Non-fatal warning from load, if the persisted blob was unusable.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// List records, optionally filtered.
    ///
    /// An empty filter returns everything. Otherwise a record matches when
    /// the lowercased filter is a substring of its nama, NIM, or prodi.
    /// Insertion order is preserved either way.
    pub fn list(&self, filter: &str) -> Vec<&Student> {
        if filter.is_empty() {
            return self.records.iter().collect();
        }

        let query = filter.to_lowercase();
        self.records.iter().filter(|s| s.matches(&query)).collect()
    }

    /// Look up a record by NIM.
    pub fn get(&self, nim: &Nim) -> Option<&Student> {
        self.records.iter().find(|s| &s.nim == nim)
    }

    /// Append a new record.
    ///
    /// Fails with `DuplicateKey` if a record with the same NIM exists; the
    /// store is left unchanged in that case.
    pub fn add(&mut self, student: Student) -> StoreResult<()> {
        if self.get(&student.nim).is_some() {
            return Err(StoreError::DuplicateKey(student.nim.to_string()));
        }

        let mut next = self.records.clone();
        next.push(student);
        self.commit(next)
    }

    /// Update the record addressed by `nim`, applying only patched fields.
    ///
    /// Position and `created_at` are preserved. Changing the NIM is allowed
    /// unless the new value collides with a different record.
    pub fn update(&mut self, nim: &Nim, patch: StudentPatch) -> StoreResult<()> {
        let index = self
            .records
            .iter()
            .position(|s| &s.nim == nim)
            .ok_or_else(|| StoreError::NotFound(nim.to_string()))?;

        if let Some(new_nim) = &patch.nim {
            let collides = self
                .records
                .iter()
                .enumerate()
                .any(|(i, s)| i != index && &s.nim == new_nim);
            if collides {
                return Err(StoreError::DuplicateKey(new_nim.to_string()));
            }
        }

        let mut next = self.records.clone();
        patch.apply(&mut next[index]);
        self.commit(next)
    }

    /// Remove the record addressed by `nim`, returning it.
    pub fn remove(&mut self, nim: &Nim) -> StoreResult<Student> {
        let index = self
            .records
            .iter()
            .position(|s| &s.nim == nim)
            .ok_or_else(|| StoreError::NotFound(nim.to_string()))?;

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Unconditionally empty the store. Returns the number of records removed.
    pub fn reset_all(&mut self) -> StoreResult<usize> {
        let count = self.records.len();
        self.commit(Vec::new())?;
        Ok(count)
    }

    /// Wholesale-replace the store contents with records parsed from `raw`.
    ///
    /// No merge and no de-duplication against prior data: this is a
    /// destructive replace. Duplicate NIMs inside the imported batch are
    /// accepted as-is but logged. Any failure leaves the prior sequence
    /// completely untouched.
    pub fn import_all(&mut self, raw: &str) -> StoreResult<usize> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| StoreError::Parse(e.to_string()))?;

        if !value.is_array() {
            return Err(StoreError::Format);
        }

        let records: Vec<Student> =
            serde_json::from_value(value).map_err(|e| StoreError::Parse(e.to_string()))?;

        let mut seen = HashSet::new();
        for student in &records {
            if !seen.insert(student.nim.as_str()) {
                warn!(nim = %student.nim, "imported data contains a duplicate NIM");
            }
        }

        self.commit(records)?;
        Ok(self.records.len())
    }

    /// Serialize the full sequence as pretty-printed JSON.
    ///
    /// Fails with `EmptyStore` when there is nothing to export.
    pub fn export_all(&self) -> StoreResult<String> {
        if self.records.is_empty() {
            return Err(StoreError::EmptyStore);
        }

        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Persist a candidate sequence, then swap it in.
    ///
    /// The swap only happens after the write succeeds, so a failed persist
    /// leaves the in-memory state at its last-known-good value.
    fn commit(&mut self, records: Vec<Student>) -> StoreResult<()> {
        let content = serde_json::to_string(&records)?;
        fs::write(&self.data_file, content)?;
        self.records = records;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(nim: &str, nama: &str, prodi: &str) -> Student {
        Student::new(nama, Nim::new(nim).unwrap(), "Laki-laki", prodi)
    }

    fn open_temp() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path().join("db.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_dir, store) = open_temp();
        assert!(store.is_empty());
        assert!(store.load_warning().is_none());
    }

    #[test]
    fn test_open_corrupt_file_warns_and_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "not json{{").unwrap();

        let store = RecordStore::open_at(&path).unwrap();
        assert!(store.is_empty());
        assert!(store.load_warning().is_some());
    }

    #[test]
    fn test_add_rejects_duplicate_nim() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        let err = store.add(sample("A1", "Siti", "SI")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list("")[0].nama, "Budi");
    }

    #[test]
    fn test_persist_on_mutate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        let mut store = RecordStore::open_at(&path).unwrap();
        store.add(sample("A1", "Budi", "TI")).unwrap();
        store.add(sample("A2", "Siti", "SI")).unwrap();
        store
            .update(
                &Nim::new("A2").unwrap(),
                StudentPatch {
                    telepon: Some("0812".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let reloaded = RecordStore::open_at(&path).unwrap();
        assert_eq!(reloaded.records, store.records);
    }

    #[test]
    fn test_filter_matches_nama_nim_prodi() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi Santoso", "TI")).unwrap();
        store.add(sample("B2", "Siti Rahma", "SI")).unwrap();
        store.add(sample("C3", "Agus Tirta", "MI")).unwrap();

        // nama, case-insensitive
        let hits = store.list("BUDI");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nim.as_str(), "A1");

        // nim
        assert_eq!(store.list("b2").len(), 1);

        // "ti" hits A1 (prodi TI), B2 (nama Siti), C3 (nama Tirta)
        assert_eq!(store.list("ti").len(), 3);

        // empty filter preserves insertion order
        let all = store.list("");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].nim.as_str(), "A1");
        assert_eq!(all[2].nim.as_str(), "C3");
    }

    #[test]
    fn test_update_preserves_identity_and_order() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();
        store.add(sample("A2", "Siti", "SI")).unwrap();

        let created = store.list("")[0].created_at;
        store
            .update(
                &Nim::new("A1").unwrap(),
                StudentPatch {
                    telepon: Some("0812".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let record = store.list("")[0];
        assert_eq!(record.nim.as_str(), "A1");
        assert_eq!(record.nama, "Budi");
        assert_eq!(record.telepon, "0812");
        assert_eq!(record.created_at, created);
    }

    #[test]
    fn test_update_nim_collision_rejected() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();
        store.add(sample("A2", "Siti", "SI")).unwrap();

        let err = store
            .update(
                &Nim::new("A2").unwrap(),
                StudentPatch {
                    nim: Some(Nim::new("A1").unwrap()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));

        // changing a record's nim to itself is fine
        store
            .update(
                &Nim::new("A2").unwrap(),
                StudentPatch {
                    nim: Some(Nim::new("A2").unwrap()),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    #[test]
    fn test_update_missing_record() {
        let (_dir, mut store) = open_temp();
        let err = store
            .update(&Nim::new("Z9").unwrap(), StudentPatch::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_remove() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        let removed = store.remove(&Nim::new("A1").unwrap()).unwrap();
        assert_eq!(removed.nama, "Budi");
        assert!(store.is_empty());

        let err = store.remove(&Nim::new("A1").unwrap()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_reset_all() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();
        store.add(sample("A2", "Siti", "SI")).unwrap();

        assert_eq!(store.reset_all().unwrap(), 2);
        assert!(store.is_empty());

        // resetting an already-empty store still succeeds
        assert_eq!(store.reset_all().unwrap(), 0);
    }

    #[test]
    fn test_import_replaces_wholesale() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        let raw = r#"[
            {"nama":"Siti","nim":"B2","jenisKelamin":"Perempuan","prodi":"SI"},
            {"nama":"Agus","nim":"C3","jenisKelamin":"Laki-laki","prodi":"MI"}
        ]"#;
        let count = store.import_all(raw).unwrap();
        assert_eq!(count, 2);
        assert!(store.get(&Nim::new("A1").unwrap()).is_none());
        assert_eq!(store.list("")[0].nama, "Siti");
    }

    #[test]
    fn test_import_empty_array_empties_store() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        assert_eq!(store.import_all("[]").unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_non_array_rejected() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        let err = store.import_all(r#"{"a":1}"#).unwrap_err();
        assert!(matches!(err, StoreError::Format));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_invalid_json_rejected() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        let err = store.import_all("not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_malformed_element_rejected() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        // element missing the required "nama" field
        let err = store
            .import_all(r#"[{"nim":"B2","jenisKelamin":"Perempuan","prodi":"SI"}]"#)
            .unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list("")[0].nama, "Budi");
    }

    #[test]
    fn test_import_keeps_duplicate_nims() {
        let (_dir, mut store) = open_temp();
        let raw = r#"[
            {"nama":"Budi","nim":"A1","jenisKelamin":"Laki-laki","prodi":"TI"},
            {"nama":"Siti","nim":"A1","jenisKelamin":"Perempuan","prodi":"SI"}
        ]"#;
        assert_eq!(store.import_all(raw).unwrap(), 2);
    }

    #[test]
    fn test_export_empty_store_fails() {
        let (_dir, store) = open_temp();
        let err = store.export_all().unwrap_err();
        assert!(matches!(err, StoreError::EmptyStore));
    }

    #[test]
    fn test_export_pretty_printed() {
        let (_dir, mut store) = open_temp();
        store.add(sample("A1", "Budi", "TI")).unwrap();

        let json = store.export_all().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("  \"nama\": \"Budi\""));
        assert!(json.contains("\"createdAt\""));

        // exported data can be imported back
        let other_dir = TempDir::new().unwrap();
        let mut other = RecordStore::open_at(other_dir.path().join("db.json")).unwrap();
        assert_eq!(other.import_all(&json).unwrap(), 1);
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let (_dir, mut store) = open_temp();

        store.add(sample("A1", "Budi", "TI")).unwrap();
        assert!(matches!(
            store.add(sample("A1", "Budi", "TI")),
            Err(StoreError::DuplicateKey(_))
        ));

        store
            .update(
                &Nim::new("A1").unwrap(),
                StudentPatch {
                    telepon: Some("0812".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.list("")[0].telepon, "0812");

        store.remove(&Nim::new("A1").unwrap()).unwrap();
        assert!(store.list("").is_empty());
    }
}
