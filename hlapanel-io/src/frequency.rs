use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use fxhash::FxHashSet as HashSet;
use log::{debug, info};

use hlapanel_core::{FrequencyRecord, Locus, MhcClass};

use crate::consts::*;
use crate::error::{IoError, Result};
use crate::utils::open_reader;

///
/// Parse a field separator given on the command line or in a config file.
///
/// Accepts a single character, or the spelled-out forms `\t`, `tab`,
/// `comma` and `space`.
pub fn parse_separator(sep: &str) -> Result<u8> {
    match sep {
        "\\t" | "tab" | "TAB" => return Ok(b'\t'),
        "comma" => return Ok(b','),
        "space" => return Ok(b' '),
        _ => {}
    }
    match sep.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(IoError::InvalidSeparator(sep.to_string())),
    }
}

/// Column positions resolved from a header row.
struct ColumnIndex {
    locus: usize,
    allele: usize,
    frequency: usize,
    population: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&c| find(c).is_none())
            .collect();

        match (find(LOCUS_COLUMN), find(ALLELE_COLUMN), find(FREQUENCY_COLUMN)) {
            (Some(locus), Some(allele), Some(frequency)) => Ok(ColumnIndex {
                locus,
                allele,
                frequency,
                population: find(POPULATION_COLUMN),
            }),
            _ => Err(IoError::MissingColumns {
                expected: REQUIRED_COLUMNS.join(", "),
                missing: missing.join(", "),
            }),
        }
    }
}

///
/// An in-memory allele frequency table.
///
/// Rows whose locus is not one of the six classical loci, or whose frequency
/// does not parse as a finite number, are dropped while reading.
///
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    pub records: Vec<FrequencyRecord>,
    pub has_population: bool,
}

impl FrequencyTable {
    ///
    /// Read a frequency table from delimited text with a header row.
    ///
    /// # Arguments
    /// - reader: source of the table
    /// - separator: field delimiter, e.g. `b'\t'`
    pub fn from_reader<R: Read>(reader: R, separator: u8) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(separator)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(csv_reader.headers()?)?;

        let mut records = Vec::new();
        let mut unknown_locus = 0usize;
        let mut bad_frequency = 0usize;

        for (row_num, row) in csv_reader.records().enumerate() {
            let row = row?;

            let (Some(locus), Some(allele), Some(frequency)) = (
                row.get(columns.locus),
                row.get(columns.allele),
                row.get(columns.frequency),
            ) else {
                debug!("Row {} is truncated, skipping", row_num + 1);
                continue;
            };

            let Ok(locus) = locus.parse::<Locus>() else {
                unknown_locus += 1;
                continue;
            };

            let frequency = match frequency.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => f,
                _ => {
                    debug!(
                        "Row {}: frequency {:?} is not a number, skipping",
                        row_num + 1,
                        frequency
                    );
                    bad_frequency += 1;
                    continue;
                }
            };

            let population = columns
                .population
                .and_then(|idx| row.get(idx))
                .map(|p| p.trim().to_string());

            records.push(FrequencyRecord {
                locus,
                allele: allele.trim().to_string(),
                frequency,
                population,
            });
        }

        if unknown_locus > 0 {
            debug!("Ignored {} rows with loci outside the panel", unknown_locus);
        }
        if bad_frequency > 0 {
            info!("Dropped {} rows with unparseable frequencies", bad_frequency);
        }

        Ok(FrequencyTable {
            records,
            has_population: columns.population.is_some(),
        })
    }

    ///
    /// Keep only rows whose population is one of `populations`.
    ///
    /// Fails when the table has no population column or when nothing matches.
    pub fn filter_populations(self, populations: &[String]) -> Result<Self> {
        if !self.has_population {
            return Err(IoError::PopulationColumnMissing);
        }

        let wanted: HashSet<&str> = populations.iter().map(|p| p.as_str()).collect();
        let records: Vec<FrequencyRecord> = self
            .records
            .into_iter()
            .filter(|r| r.population.as_deref().is_some_and(|p| wanted.contains(p)))
            .collect();

        if records.is_empty() {
            return Err(IoError::NoPopulationMatch(populations.to_vec()));
        }

        info!(
            "Kept {} rows matching populations {:?}",
            records.len(),
            populations
        );

        Ok(FrequencyTable {
            records,
            has_population: true,
        })
    }

    /// Rows belonging to one receptor class, in input order.
    pub fn class_records(&self, class: MhcClass) -> Vec<FrequencyRecord> {
        self.records
            .iter()
            .filter(|r| class.contains(r.locus))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<(&Path, u8)> for FrequencyTable {
    type Error = IoError;

    ///
    /// Read a frequency table from disk; `.gz` files are decompressed.
    fn try_from(value: (&Path, u8)) -> Result<Self> {
        let (path, separator) = value;
        let table = FrequencyTable::from_reader(open_reader(path)?, separator)?;
        info!(
            "Read {} frequency records from {}",
            table.records.len(),
            path.display()
        );
        Ok(table)
    }
}
