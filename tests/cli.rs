use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn leaflet_div(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leaflet-div"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn bilayer_gro() -> NamedTempFile {
    let atoms = [
        (10, "POPC", "P", 1.0),
        (10, "POPC", "N", 1.4),
        (11, "POPC", "P", 2.0),
        (20, "POPC", "P", 8.0),
        (21, "POPC", "P", 9.0),
    ];
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "POPC bilayer").unwrap();
    writeln!(file, "{:>5}", atoms.len()).unwrap();
    for (idx, (resnum, resname, atom, z)) in atoms.iter().enumerate() {
        writeln!(
            file,
            "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}",
            resnum,
            resname,
            atom,
            idx + 1,
            1.0,
            1.0,
            z
        )
        .unwrap();
    }
    writeln!(file, "   5.00000   5.00000  10.00000").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn divides_bilayer() {
    let gro = bilayer_gro();
    let output = leaflet_div(&["-i", gro.path().to_str().unwrap(), "-r", "POPC", "-a", "P", "-q"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "\nUpper leaflet (2 residues):\n\n20-21\n\n\
         \nLower leaflet (2 residues):\n\n10-11\n\n\
         \nCenter at z = 5.000\n\n"
    );
}

#[test]
fn writes_assignment_csv() {
    let gro = bilayer_gro();
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("leaflets.csv");
    let output = leaflet_div(&[
        "-i",
        gro.path().to_str().unwrap(),
        "-r",
        "POPC",
        "-a",
        "P",
        "-o",
        csv_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("10,POPC,P,1.0,lower"));
    assert!(csv.contains("21,POPC,P,9.0,upper"));
}

#[test]
fn missing_atom_name_exits_with_one() {
    // The input path does not exist; validation must fail before any file access.
    let output = leaflet_div(&["-i", "does-not-exist.gro", "-r", "POPC"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Atom name is required."));
    assert!(!stderr.contains("does-not-exist"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_structure_is_reported_first() {
    let output = leaflet_div(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: 3D structure (gro) is required."));
}

#[test]
fn unmatched_selector_fails() {
    let gro = bilayer_gro();
    let output = leaflet_div(&["-i", gro.path().to_str().unwrap(), "-r", "POPE", "-a", "P"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No matches found"));
    assert!(stderr.contains("Check res_name and atom_name"));
    assert!(output.stdout.is_empty());
}
