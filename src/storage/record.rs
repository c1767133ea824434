//! The student record type.
//!
//! Field names on the wire are camelCase to stay compatible with data files
//! written by earlier versions of this tool (`jenisKelamin`, `createdAt`, …).

use crate::types::Nim;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One student entry.
///
/// Required fields must be present when deserializing; optional fields
/// default to the empty string, matching how the form left them. A missing
/// `createdAt` is stamped at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Full name.
    pub nama: String,
    /// Student identification number, unique across the store.
    pub nim: Nim,
    /// Gender (canonical values from [`crate::types::Gender`]).
    pub jenis_kelamin: String,
    /// Place of birth.
    #[serde(default)]
    pub tempat_lahir: String,
    /// Date of birth (YYYY-MM-DD).
    #[serde(default)]
    pub tanggal_lahir: String,
    /// Blood group.
    #[serde(default)]
    pub golongan_darah: String,
    /// Religion.
    #[serde(default)]
    pub agama: String,
    /// Home address.
    #[serde(default)]
    pub alamat: String,
    /// Phone number.
    #[serde(default)]
    pub telepon: String,
    /// Program of study (short code, e.g. "TI").
    pub prodi: String,
    /// Academic advisor.
    #[serde(default)]
    pub dosen: String,
    /// Enrollment year.
    #[serde(default)]
    pub angkatan: String,
    /// Set once at creation, immutable thereafter.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a record with the required fields, stamping `created_at`.
    pub fn new(
        nama: impl Into<String>,
        nim: Nim,
        jenis_kelamin: impl Into<String>,
        prodi: impl Into<String>,
    ) -> Self {
        Self {
            nama: nama.into(),
            nim,
            jenis_kelamin: jenis_kelamin.into(),
            tempat_lahir: String::new(),
            tanggal_lahir: String::new(),
            golongan_darah: String::new(),
            agama: String::new(),
            alamat: String::new(),
            telepon: String::new(),
            prodi: prodi.into(),
            dosen: String::new(),
            angkatan: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive search match against nama, NIM, and prodi.
    ///
    /// `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.nama.to_lowercase().contains(query)
            || self.nim.as_str().to_lowercase().contains(query)
            || self.prodi.to_lowercase().contains(query)
    }
}

/// A partial update for an existing record.
///
/// `None` fields are left untouched. `created_at` is deliberately absent:
/// it can never be patched.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub nama: Option<String>,
    pub nim: Option<Nim>,
    pub jenis_kelamin: Option<String>,
    pub tempat_lahir: Option<String>,
    pub tanggal_lahir: Option<String>,
    pub golongan_darah: Option<String>,
    pub agama: Option<String>,
    pub alamat: Option<String>,
    pub telepon: Option<String>,
    pub prodi: Option<String>,
    pub dosen: Option<String>,
    pub angkatan: Option<String>,
}

impl StudentPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.nama.is_none()
            && self.nim.is_none()
            && self.jenis_kelamin.is_none()
            && self.tempat_lahir.is_none()
            && self.tanggal_lahir.is_none()
            && self.golongan_darah.is_none()
            && self.agama.is_none()
            && self.alamat.is_none()
            && self.telepon.is_none()
            && self.prodi.is_none()
            && self.dosen.is_none()
            && self.angkatan.is_none()
    }

    /// Apply the patched fields to a record in place.
    pub fn apply(&self, student: &mut Student) {
        if let Some(v) = &self.nama {
            student.nama = v.clone();
        }
        if let Some(v) = &self.nim {
            student.nim = v.clone();
        }
        if let Some(v) = &self.jenis_kelamin {
            student.jenis_kelamin = v.clone();
        }
        if let Some(v) = &self.tempat_lahir {
            student.tempat_lahir = v.clone();
        }
        if let Some(v) = &self.tanggal_lahir {
            student.tanggal_lahir = v.clone();
        }
        if let Some(v) = &self.golongan_darah {
            student.golongan_darah = v.clone();
        }
        if let Some(v) = &self.agama {
            student.agama = v.clone();
        }
        if let Some(v) = &self.alamat {
            student.alamat = v.clone();
        }
        if let Some(v) = &self.telepon {
            student.telepon = v.clone();
        }
        if let Some(v) = &self.prodi {
            student.prodi = v.clone();
        }
        if let Some(v) = &self.dosen {
            student.dosen = v.clone();
        }
        if let Some(v) = &self.angkatan {
            student.angkatan = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student::new("Budi Santoso", Nim::new("A1").unwrap(), "Laki-laki", "TI")
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"nama\""));
        assert!(json.contains("\"jenisKelamin\""));
        assert!(json.contains("\"tempatLahir\""));
        assert!(json.contains("\"golonganDarah\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_required_fields_enforced() {
        // nama missing
        let raw = r#"{"nim":"A1","jenisKelamin":"Laki-laki","prodi":"TI"}"#;
        assert!(serde_json::from_str::<Student>(raw).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let raw = r#"{"nama":"Budi","nim":"A1","jenisKelamin":"Laki-laki","prodi":"TI"}"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.telepon, "");
        assert_eq!(student.alamat, "");
    }

    #[test]
    fn test_search_match_case_insensitive() {
        let student = sample();
        assert!(student.matches("budi"));
        assert!(student.matches("a1"));
        assert!(student.matches("ti"));
        assert!(!student.matches("sains"));
    }

    #[test]
    fn test_patch_preserves_created_at() {
        let mut student = sample();
        let before = student.created_at;

        let patch = StudentPatch {
            telepon: Some("0812".to_string()),
            ..Default::default()
        };
        patch.apply(&mut student);

        assert_eq!(student.telepon, "0812");
        assert_eq!(student.created_at, before);
        assert_eq!(student.nama, "Budi Santoso");
    }

    #[test]
    fn test_empty_patch_detection() {
        assert!(StudentPatch::default().is_empty());

        let patch = StudentPatch {
            dosen: Some("Dr. Sari".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
