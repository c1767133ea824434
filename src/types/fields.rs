//! Enumerated form fields.
//!
//! Records store these as plain strings (the persisted representation), so
//! imported data round-trips untouched. The enums validate values entered at
//! the CLI boundary and carry the canonical display spelling.

use clap::ValueEnum;
use std::fmt;

/// Student gender (jenis kelamin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    /// Male
    LakiLaki,
    /// Female
    Perempuan,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LakiLaki => write!(f, "Laki-laki"),
            Self::Perempuan => write!(f, "Perempuan"),
        }
    }
}

/// Blood group (golongan darah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BloodGroup {
    A,
    B,
    Ab,
    O,
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::Ab => write!(f, "AB"),
            Self::O => write!(f, "O"),
        }
    }
}

/// Religion (agama).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Religion {
    Islam,
    Kristen,
    Katolik,
    Hindu,
    Buddha,
    Konghucu,
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Islam => "Islam",
            Self::Kristen => "Kristen",
            Self::Katolik => "Katolik",
            Self::Hindu => "Hindu",
            Self::Buddha => "Buddha",
            Self::Konghucu => "Konghucu",
        };
        write!(f, "{}", name)
    }
}

/// Program of study (prodi), stored as its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StudyProgram {
    /// Teknik Informatika
    Ti,
    /// Sistem Informasi
    Si,
    /// Teknik Komputer
    Tk,
    /// Manajemen Informatika
    Mi,
}

impl StudyProgram {
    /// Full program name, used in help and table output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ti => "Teknik Informatika",
            Self::Si => "Sistem Informasi",
            Self::Tk => "Teknik Komputer",
            Self::Mi => "Manajemen Informatika",
        }
    }
}

impl fmt::Display for StudyProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ti => write!(f, "TI"),
            Self::Si => write!(f, "SI"),
            Self::Tk => write!(f, "TK"),
            Self::Mi => write!(f, "MI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::LakiLaki.to_string(), "Laki-laki");
        assert_eq!(Gender::Perempuan.to_string(), "Perempuan");
    }

    #[test]
    fn test_blood_group_display() {
        assert_eq!(BloodGroup::Ab.to_string(), "AB");
        assert_eq!(BloodGroup::O.to_string(), "O");
    }

    #[test]
    fn test_study_program_codes() {
        assert_eq!(StudyProgram::Ti.to_string(), "TI");
        assert_eq!(StudyProgram::Ti.label(), "Teknik Informatika");
    }

    #[test]
    fn test_value_enum_parsing() {
        let gender = Gender::from_str("laki-laki", true).unwrap();
        assert_eq!(gender, Gender::LakiLaki);

        let prodi = StudyProgram::from_str("ti", true).unwrap();
        assert_eq!(prodi, StudyProgram::Ti);
    }
}
