//! End-to-end panel selection from the fixture files in tests/data.
//!
//! Unit tests for the coverage rule itself live in src/coverage.rs.

use std::fs::read_to_string;
use std::io::Write;
use std::path::PathBuf;

use hlapanel_core::MhcClass;
use hlapanel_io::IoError;
use hlapanel_select::{PanelPaths, SelectError, SelectionConfig, panel_path, run_panel_from_paths};
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::{NamedTempFile, tempdir};

#[fixture]
fn paths() -> PanelPaths {
    PanelPaths {
        freq_table: PathBuf::from("../tests/data/hla_freq.tsv"),
        netmhcpan_alleles: PathBuf::from("../tests/data/MHC_allele_names.txt"),
        netmhciipan_alleles: PathBuf::from("../tests/data/alleles_name.txt"),
    }
}

#[rstest]
fn test_default_run_writes_both_panels(paths: PanelPaths) {
    let report = run_panel_from_paths(&paths, &SelectionConfig::default()).unwrap();

    let out = tempdir().unwrap();
    let written = report.write_panels(out.path()).unwrap();
    assert_eq!(written.len(), 2);

    let class_i = read_to_string(panel_path(out.path(), MhcClass::ClassI)).unwrap();
    let class_ii = read_to_string(panel_path(out.path(), MhcClass::ClassII)).unwrap();

    // HLA-A*02:01 takes its Southern Europe frequency; HLA-A*68:01 is not supported
    assert_eq!(
        class_i,
        "HLA-A02:01,HLA-A01:01,HLA-A03:01,HLA-A24:02,\
         HLA-B07:02,HLA-B08:01,HLA-B44:02,\
         HLA-C07:01,HLA-C07:02,HLA-C05:01"
    );
    assert_eq!(
        class_ii,
        "DRB1_1501,DRB1_0701,DRB1_0301,DRB1_0101,\
         DQB1_0301,DQB1_0201,DQB1_0602,\
         DPB1_0401,DPB1_0201"
    );
    assert_eq!(report.class_i.alleles[0].frequency, 0.31);
}

#[rstest]
fn test_config_file_with_population_and_caps(paths: PanelPaths) {
    let config = SelectionConfig::try_from(PathBuf::from("../tests/data/config.toml").as_path())
        .unwrap();
    let report = run_panel_from_paths(&paths, &config).unwrap();

    assert_eq!(report.class_i.len(), 10);
    assert_eq!(report.class_i.alleles[0].frequency, 0.28);

    // nine candidates over the cap of six: globally most frequent, ties in locus order
    assert_eq!(
        report.class_ii.line(),
        "DPB1_0401,DQB1_0301,DQB1_0201,DRB1_1501,DQB1_0602,DRB1_0701"
    );
    assert!(report.class_ii.coverage.iter().all(|c| !c.reached));
}

#[rstest]
fn test_low_coverage_selects_fewer(paths: PanelPaths) {
    let config = SelectionConfig {
        coverage: 0.3,
        populations: Some(vec!["Northern Europe".to_string()]),
        ..Default::default()
    };
    let report = run_panel_from_paths(&paths, &config).unwrap();

    assert_eq!(
        report.class_i.line(),
        "HLA-A02:01,HLA-A01:01,HLA-B07:02,HLA-B08:01,HLA-B44:02,HLA-C07:01,HLA-C07:02"
    );
    assert_eq!(report.class_ii.line(), "DRB1_1501,DRB1_0701,DRB1_0301,DQB1_0301,DQB1_0201,DPB1_0401");
}

#[rstest]
fn test_unknown_population_is_an_error(paths: PanelPaths) {
    let config = SelectionConfig {
        populations: Some(vec!["Atlantis".to_string()]),
        ..Default::default()
    };
    let result = run_panel_from_paths(&paths, &config);
    assert!(matches!(
        result,
        Err(SelectError::Table(IoError::NoPopulationMatch(_)))
    ));
}

#[rstest]
fn test_missing_frequency_table_is_an_error(mut paths: PanelPaths) {
    paths.freq_table = PathBuf::from("../tests/data/does_not_exist.tsv");
    let result = run_panel_from_paths(&paths, &SelectionConfig::default());
    assert!(matches!(result, Err(SelectError::Table(IoError::FileRead(_)))));
}

#[rstest]
fn test_class_without_rows_writes_empty_file(mut paths: PanelPaths) {
    let mut table = NamedTempFile::new().unwrap();
    writeln!(table, "locus,allele,frequency").unwrap();
    writeln!(table, "DRB1,HLA-DRB1*07:01,0.4").unwrap();
    writeln!(table, "DRB1,HLA-DRB1*15:01,0.5").unwrap();
    paths.freq_table = table.path().to_path_buf();

    let config = SelectionConfig {
        separator: ",".to_string(),
        ..Default::default()
    };
    let report = run_panel_from_paths(&paths, &config).unwrap();

    let out = tempdir().unwrap();
    report.write_panels(out.path()).unwrap();

    let class_i = read_to_string(panel_path(out.path(), MhcClass::ClassI)).unwrap();
    let class_ii = read_to_string(panel_path(out.path(), MhcClass::ClassII)).unwrap();
    assert_eq!(class_i, "");
    assert_eq!(class_ii, "DRB1_1501,DRB1_0701");
}

#[rstest]
fn test_unsupported_class_is_flagged_but_written(mut paths: PanelPaths) {
    let mut table = NamedTempFile::new().unwrap();
    writeln!(table, "locus\tallele\tfrequency").unwrap();
    writeln!(table, "A\tHLA-A*68:01\t0.4").unwrap();
    writeln!(table, "DQB1\tHLA-DQB1*03:01\t0.5").unwrap();
    paths.freq_table = table.path().to_path_buf();

    let report = run_panel_from_paths(&paths, &SelectionConfig::default()).unwrap();
    assert!(report.class_i.nothing_supported());
    assert_eq!(report.class_i.candidates, 1);
    assert!(!report.class_ii.nothing_supported());

    let out = tempdir().unwrap();
    report.write_panels(out.path()).unwrap();
    let class_i = read_to_string(panel_path(out.path(), MhcClass::ClassI)).unwrap();
    assert_eq!(class_i, "");
}

#[rstest]
fn test_json_report(paths: PanelPaths) {
    let report = run_panel_from_paths(&paths, &SelectionConfig::default()).unwrap();

    let out = tempdir().unwrap();
    let json_path = out.path().join("nested").join("report.json");
    report.write_json(&json_path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(value["coverage_target"], 0.9);
    assert_eq!(value["class_i"]["class"], "class_i");
    assert_eq!(value["class_ii"]["alleles"][0]["tool_name"], "DRB1*15:01");
    assert_eq!(value["class_i"]["coverage"].as_array().unwrap().len(), 3);
}
