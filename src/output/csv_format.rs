//! CSV output formatting.

use crate::storage::Student;
use std::io;

/// Print records in CSV format.
pub fn print_csv(records: &[&Student]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    // Write header
    wtr.write_record([
        "nama",
        "nim",
        "jenisKelamin",
        "tempatLahir",
        "tanggalLahir",
        "golonganDarah",
        "agama",
        "alamat",
        "telepon",
        "prodi",
        "dosen",
        "angkatan",
        "createdAt",
    ])?;

    // Write records
    for student in records {
        wtr.write_record([
            student.nama.as_str(),
            student.nim.as_str(),
            student.jenis_kelamin.as_str(),
            student.tempat_lahir.as_str(),
            student.tanggal_lahir.as_str(),
            student.golongan_darah.as_str(),
            student.agama.as_str(),
            student.alamat.as_str(),
            student.telepon.as_str(),
            student.prodi.as_str(),
            student.dosen.as_str(),
            student.angkatan.as_str(),
            &student.created_at.to_rfc3339(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
