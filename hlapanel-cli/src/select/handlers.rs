use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use log::info;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use hlapanel_core::MhcClass;
use hlapanel_select::{PanelPaths, PanelSelection, SelectionConfig, run_panel_from_paths};

use super::cli::DEFAULT_OUT_DIR;

#[derive(Tabled)]
struct AlleleRow {
    #[tabled(rename = "Locus")]
    locus: String,
    #[tabled(rename = "Allele")]
    allele: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Tool name")]
    tool_name: String,
}

#[derive(Tabled)]
struct CoverageRow {
    #[tabled(rename = "Locus")]
    locus: String,
    #[tabled(rename = "Alleles")]
    selected: usize,
    #[tabled(rename = "Cumulative frequency")]
    cumulative: String,
    #[tabled(rename = "Target reached")]
    reached: bool,
}

fn required_path(matches: &ArgMatches, id: &str) -> Result<PathBuf> {
    matches
        .get_one::<String>(id)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("--{} is required", id))
}

///
/// Merge the config file (if any) with explicit command line flags.
/// Flags win over the file, the file wins over the defaults.
pub fn resolve_config(matches: &ArgMatches) -> Result<SelectionConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SelectionConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file {}", path))?,
        None => SelectionConfig::default(),
    };

    if let Some(coverage) = matches.get_one::<f64>("coverage") {
        config.coverage = *coverage;
    }
    if let Some(max) = matches.get_one::<usize>("max-class-i") {
        config.max_class_i = *max;
    }
    if let Some(max) = matches.get_one::<usize>("max-class-ii") {
        config.max_class_ii = *max;
    }
    if let Some(sep) = matches.get_one::<String>("sep") {
        config.separator = sep.clone();
    }
    if let Some(populations) = matches.get_many::<String>("population") {
        config.populations = Some(populations.cloned().collect());
    }

    config.validate()?;
    Ok(config)
}

fn print_panel(panel: &PanelSelection) {
    println!("Selected {} alleles (n={}):", panel.class, panel.len());
    if panel.nothing_supported() {
        println!(
            "(none: {} candidate rows, none supported by the prediction tool)",
            panel.candidates
        );
        return;
    }
    if panel.is_empty() {
        println!("(none)");
        return;
    }

    let rows: Vec<AlleleRow> = panel
        .alleles
        .iter()
        .map(|a| AlleleRow {
            locus: a.locus.to_string(),
            allele: a.allele.clone(),
            frequency: format!("{:.4}", a.frequency),
            tool_name: a.tool_name.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let coverage: Vec<CoverageRow> = panel
        .coverage
        .iter()
        .map(|c| CoverageRow {
            locus: c.locus.to_string(),
            selected: c.selected,
            cumulative: format!("{:.4}", c.cumulative_frequency),
            reached: c.reached,
        })
        .collect();
    let mut table = Table::new(coverage);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn run_select(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;

    let paths = PanelPaths {
        freq_table: required_path(matches, "freq-table")?,
        netmhcpan_alleles: required_path(matches, "netmhcpan-alleles")?,
        netmhciipan_alleles: required_path(matches, "netmhciipan-alleles")?,
    };
    let output_dir = matches
        .get_one::<String>("output-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    info!(
        "Selecting panels: coverage {}, at most {} class I and {} class II alleles",
        config.coverage, config.max_class_i, config.max_class_ii
    );

    let report = run_panel_from_paths(&paths, &config)
        .with_context(|| format!("Panel selection from {} failed", paths.freq_table.display()))?;

    for class in MhcClass::ALL {
        print_panel(report.get(class));
    }

    let written = report
        .write_panels(&output_dir)
        .with_context(|| format!("Failed to write panels to {}", output_dir.display()))?;
    for (class, path) in MhcClass::ALL.iter().zip(written.iter()) {
        println!("Wrote {} allele list to {}", class, path.display());
    }

    if let Some(report_path) = matches.get_one::<String>("report") {
        report
            .write_json(report_path)
            .with_context(|| format!("Failed to write report to {}", report_path))?;
        info!("Saved selection report to {}", report_path);
    }

    Ok(())
}
