//! GRO fixtures shared by the unit tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Format one atom line the way GROMACS writes it.
pub fn gro_line(residue_number: i32, residue_name: &str, atom_name: &str, atom_number: usize, z: f64) -> String {
    format!(
        "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}",
        residue_number, residue_name, atom_name, atom_number, 1.0, 2.0, z
    )
}

/// Write a complete GRO file (title, atom count, atoms, box line).
pub fn write_gro(atoms: &[(i32, &str, &str, f64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Test membrane").unwrap();
    writeln!(file, "{:>5}", atoms.len()).unwrap();
    for (idx, (resnum, resname, atom, z)) in atoms.iter().enumerate() {
        writeln!(file, "{}", gro_line(*resnum, resname, atom, idx + 1, *z)).unwrap();
    }
    writeln!(file, "   6.00000   6.00000  10.00000").unwrap();
    file.flush().unwrap();
    file
}
