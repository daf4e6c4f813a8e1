//! Runs the `hlapanel` binary against the fixtures in tests/data.

use std::fs::read_to_string;
use std::process::Command;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_hlapanel");

fn select_args(out_dir: &str) -> Vec<String> {
    [
        "select",
        "--freq-table",
        "../tests/data/hla_freq.tsv",
        "--netmhcpan-alleles",
        "../tests/data/MHC_allele_names.txt",
        "--netmhciipan-alleles",
        "../tests/data/alleles_name.txt",
        "--output-dir",
        out_dir,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[rstest]
fn test_select_writes_panels_and_summary() {
    let out = tempdir().unwrap();
    let out_dir = out.path().to_string_lossy().to_string();

    let mut args = select_args(&out_dir);
    args.extend(["--population", "Northern Europe", "--max-class-i", "3"].map(String::from));
    let output = Command::new(BIN).args(&args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Selected Class I alleles (n=3):"));
    assert!(stdout.contains("Selected Class II alleles (n=9):"));
    assert!(stdout.contains("Wrote Class II allele list to"));

    let class_i = read_to_string(out.path().join("selected_classI_alleles.txt")).unwrap();
    assert_eq!(class_i, "HLA-A02:01,HLA-C07:01,HLA-A01:01");
}

#[rstest]
fn test_select_fails_on_unknown_population() {
    let out = tempdir().unwrap();
    let out_dir = out.path().to_string_lossy().to_string();

    let mut args = select_args(&out_dir);
    args.extend(["--population", "Atlantis"].map(String::from));
    let output = Command::new(BIN).args(&args).output().unwrap();

    assert!(!output.status.success());
    assert!(!out.path().join("selected_classI_alleles.txt").exists());
}

#[rstest]
fn test_convert_afnd_dump() {
    let out = tempdir().unwrap();
    let table = out.path().join("freq.tsv");

    let output = Command::new(BIN)
        .args(["convert", "../tests/data/afnd.tsv", "--list-populations", "--output"])
        .arg(&table)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Northern Europe\n");

    let written = read_to_string(&table).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "locus\tallele\tfrequency\tpopulation");
    assert_eq!(lines[1], "A\tHLA-A*02:01\t0.28\tNorthern Europe");
    assert_eq!(lines[4], "DPB1\tHLA-DPB1*04:01\t0.42\tNorthern Europe");
    assert_eq!(lines.len(), 5);
}
