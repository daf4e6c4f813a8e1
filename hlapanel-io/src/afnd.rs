//! Conversion of Allele Frequency Net Database (AFND) dumps into frequency tables.
//!
//! The dump is a TSV with (at least) `group`, `gene`, `allele`,
//! `alleles_over_2n` and `population` columns. Only HLA rows for the six
//! panel loci are kept.
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use fxhash::FxHashSet as HashSet;
use log::{debug, info};

use hlapanel_core::{FrequencyRecord, Locus};

use crate::consts::*;
use crate::error::{IoError, Result};
use crate::utils::open_reader;

/// AFND style allele (`A*01:01`) to frequency-table style (`HLA-A*01:01`).
pub fn format_afnd_allele(gene: &str, allele: &str) -> String {
    if allele.starts_with(&format!("{}*", gene)) {
        format!("HLA-{}", allele)
    } else {
        format!("HLA-{}*{}", gene, allele)
    }
}

///
/// Read an AFND dump and keep the HLA rows of the panel loci.
///
/// Rows whose `alleles_over_2n` does not parse are dropped.
pub fn convert_afnd<R: Read>(reader: R) -> Result<Vec<FrequencyRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);

    let wanted = [
        AFND_GROUP_COLUMN,
        AFND_GENE_COLUMN,
        AFND_ALLELE_COLUMN,
        AFND_FREQUENCY_COLUMN,
        AFND_POPULATION_COLUMN,
    ];
    let (Some(group), Some(gene), Some(allele), Some(frequency), Some(population)) = (
        find(AFND_GROUP_COLUMN),
        find(AFND_GENE_COLUMN),
        find(AFND_ALLELE_COLUMN),
        find(AFND_FREQUENCY_COLUMN),
        find(AFND_POPULATION_COLUMN),
    ) else {
        let missing: Vec<&str> = wanted.into_iter().filter(|&c| find(c).is_none()).collect();
        return Err(IoError::MissingColumns {
            expected: wanted.join(", "),
            missing: missing.join(", "),
        });
    };

    let mut records = Vec::new();
    let mut unparsed = 0usize;

    for row in csv_reader.records() {
        let row = row?;

        if row.get(group).map(str::trim) != Some(AFND_HLA_GROUP) {
            continue;
        }
        let Some(gene_name) = row.get(gene).map(str::trim) else {
            continue;
        };
        let Ok(locus) = gene_name.parse::<Locus>() else {
            continue;
        };

        let freq = match row.get(frequency).map(|f| f.trim().parse::<f64>()) {
            Some(Ok(f)) if f.is_finite() => f,
            _ => {
                unparsed += 1;
                continue;
            }
        };

        let raw_allele = row.get(allele).unwrap_or_default().trim();
        records.push(FrequencyRecord {
            locus,
            allele: format_afnd_allele(gene_name, raw_allele),
            frequency: freq,
            population: row.get(population).map(|p| p.trim().to_string()),
        });
    }

    if unparsed > 0 {
        debug!("Dropped {} AFND rows without a numeric frequency", unparsed);
    }

    Ok(records)
}

/// Distinct populations, in order of first appearance.
pub fn distinct_populations(records: &[FrequencyRecord]) -> Vec<String> {
    let mut seen = HashSet::default();
    records
        .iter()
        .filter_map(|r| r.population.as_deref())
        .filter(|p| seen.insert(*p))
        .map(str::to_string)
        .collect()
}

///
/// Write records as a tab separated frequency table with a
/// `locus, allele, frequency, population` header.
pub fn write_frequency_table<W: Write>(records: &[FrequencyRecord], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);

    csv_writer.write_record([
        LOCUS_COLUMN,
        ALLELE_COLUMN,
        FREQUENCY_COLUMN,
        POPULATION_COLUMN,
    ])?;
    for record in records {
        csv_writer.write_record([
            record.locus.as_str(),
            record.allele.as_str(),
            record.frequency.to_string().as_str(),
            record.population.as_deref().unwrap_or_default(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}

///
/// Convert an AFND dump on disk into a frequency table on disk.
///
/// # Arguments
/// - input: the AFND TSV (optionally gzipped)
/// - output: where to write the frequency table; parent folders are created
///
/// # Returns
/// - the converted records
pub fn convert_afnd_file(input: &Path, output: &Path) -> Result<Vec<FrequencyRecord>> {
    info!("Loading {} ...", input.display());
    let records = convert_afnd(open_reader(input)?)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(output)?;
    write_frequency_table(&records, std::io::BufWriter::new(file))?;

    info!("Saved {} rows to {}", records.len(), output.display());
    Ok(records)
}
