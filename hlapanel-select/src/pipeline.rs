use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use hlapanel_core::{FrequencyRecord, MhcClass, SelectedAllele};
use hlapanel_io::{
    ClassIISupported, ClassISupported, FrequencyTable, SupportedAlleles, join_alleles,
    write_allele_line,
};
use hlapanel_nomenclature::{render_for_tool, tool_name};

use crate::config::SelectionConfig;
use crate::coverage::{CoverageSummary, select_for_class, summarize_coverage};
use crate::errors::Result;

///
/// The selected panel of one receptor class.
///
#[derive(Clone, Debug, Serialize)]
pub struct PanelSelection {
    pub class: MhcClass,
    /// Rows of the class found in the frequency table.
    pub candidates: usize,
    /// Rows left after intersecting with the tool's supported alleles.
    pub supported: usize,
    pub alleles: Vec<SelectedAllele>,
    pub coverage: Vec<CoverageSummary>,
}

impl PanelSelection {
    /// Allele names as written to the tool's input file, in selection order.
    pub fn formatted(&self) -> Vec<String> {
        self.alleles
            .iter()
            .map(|a| render_for_tool(self.class, &a.tool_name))
            .collect()
    }

    /// The comma-joined panel line.
    pub fn line(&self) -> String {
        join_alleles(&self.formatted())
    }

    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    /// The table had rows for this class, but the tool supports none of them.
    pub fn nothing_supported(&self) -> bool {
        self.candidates > 0 && self.supported == 0
    }
}

///
/// Run the selection for one class.
///
/// # Arguments
/// - records: frequency rows; rows of the other class are ignored
/// - class: the receptor class to select for
/// - supported: the tool's supported-allele vocabulary
/// - coverage: per-locus cumulative frequency target
/// - max_alleles: cap on the class's panel size
pub fn select_class<S: SupportedAlleles + ?Sized>(
    records: &[FrequencyRecord],
    class: MhcClass,
    supported: &S,
    coverage: f64,
    max_alleles: usize,
) -> PanelSelection {
    let class_records: Vec<&FrequencyRecord> =
        records.iter().filter(|r| class.contains(r.locus)).collect();
    let candidates = class_records.len();

    let kept: Vec<FrequencyRecord> = class_records
        .into_iter()
        .filter(|r| supported.supports(r.locus, &tool_name(class, &r.allele)))
        .cloned()
        .collect();

    let selected = select_for_class(&kept, class.loci(), max_alleles, coverage);

    let alleles: Vec<SelectedAllele> = selected
        .iter()
        .map(|r| SelectedAllele::from_record(r, tool_name(class, &r.allele)))
        .collect();

    let coverage = summarize_coverage(
        alleles.iter().map(|a| (a.locus, a.frequency)),
        class.loci(),
        coverage,
    );

    let panel = PanelSelection {
        class,
        candidates,
        supported: kept.len(),
        alleles,
        coverage,
    };

    if panel.candidates == 0 {
        warn!("No {} alleles found in the frequency table.", class);
    } else if panel.nothing_supported() {
        warn!(
            "No {} alleles from the frequency table are supported by the given allele list.",
            class
        );
    } else {
        info!(
            "{}: {} of {} rows are supported by the prediction tool",
            class, panel.supported, panel.candidates
        );
    }

    panel
}

///
/// Selected panels for both classes.
///
#[derive(Clone, Debug, Serialize)]
pub struct PanelReport {
    pub coverage_target: f64,
    pub class_i: PanelSelection,
    pub class_ii: PanelSelection,
}

impl PanelReport {
    pub fn get(&self, class: MhcClass) -> &PanelSelection {
        match class {
            MhcClass::ClassI => &self.class_i,
            MhcClass::ClassII => &self.class_ii,
        }
    }

    ///
    /// Write one panel file per class into `dir`.
    ///
    /// # Returns
    /// - the written paths, class I first
    pub fn write_panels<T: AsRef<Path>>(&self, dir: T) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(MhcClass::ALL.len());
        for class in MhcClass::ALL {
            let path = panel_path(dir.as_ref(), class);
            write_allele_line(&path, &self.get(class).formatted())?;
            written.push(path);
        }
        Ok(written)
    }

    /// Dump the report as pretty-printed JSON.
    pub fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Panel file for a class, e.g. `<dir>/selected_classI_alleles.txt`.
pub fn panel_path(dir: &Path, class: MhcClass) -> PathBuf {
    dir.join(format!("selected_{}_alleles.txt", class.tag()))
}

///
/// Select both class panels from an in-memory table.
///
/// Population filtering is expected to have happened already; see
/// [run_panel_from_paths] for the full pipeline.
pub fn run_panel(
    table: &FrequencyTable,
    class_i: &ClassISupported,
    class_ii: &ClassIISupported,
    config: &SelectionConfig,
) -> PanelReport {
    let select = |class: MhcClass, supported: &dyn SupportedAlleles| {
        select_class(
            &table.class_records(class),
            class,
            supported,
            config.coverage,
            config.max_alleles(class),
        )
    };

    PanelReport {
        coverage_target: config.coverage,
        class_i: select(MhcClass::ClassI, class_i),
        class_ii: select(MhcClass::ClassII, class_ii),
    }
}

///
/// Input files of a panel run.
///
#[derive(Clone, Debug)]
pub struct PanelPaths {
    pub freq_table: PathBuf,
    pub netmhcpan_alleles: PathBuf,
    pub netmhciipan_alleles: PathBuf,
}

///
/// Load every input, filter populations and select both panels.
///
/// Fails on unreadable inputs, missing columns, or a population filter that
/// matches nothing. An empty panel is not an error.
pub fn run_panel_from_paths(paths: &PanelPaths, config: &SelectionConfig) -> Result<PanelReport> {
    config.validate()?;

    let class_i = ClassISupported::try_from(paths.netmhcpan_alleles.as_path())?;
    let class_ii = ClassIISupported::try_from(paths.netmhciipan_alleles.as_path())?;

    let mut table =
        FrequencyTable::try_from((paths.freq_table.as_path(), config.separator_byte()?))?;
    if let Some(populations) = &config.populations {
        table = table.filter_populations(populations)?;
    }

    Ok(run_panel(&table, &class_i, &class_ii, config))
}
