use std::fmt::{self, Display};

use crate::models::Locus;

///
/// One row of an allele frequency table.
///
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyRecord {
    pub locus: Locus,
    pub allele: String,
    pub frequency: f64,
    pub population: Option<String>,
}

impl FrequencyRecord {
    pub fn new(locus: Locus, allele: &str, frequency: f64) -> Self {
        FrequencyRecord {
            locus,
            allele: allele.to_string(),
            frequency,
            population: None,
        }
    }

    pub fn with_population(mut self, population: &str) -> Self {
        self.population = Some(population.to_string());
        self
    }
}

impl Display for FrequencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.locus, self.allele, self.frequency)?;
        if let Some(population) = &self.population {
            write!(f, "\t{}", population)?;
        }
        Ok(())
    }
}

///
/// A member of a selected allele panel: the raw allele as it appeared in the
/// frequency table, plus its name in the downstream tool's vocabulary.
///
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedAllele {
    pub locus: Locus,
    pub allele: String,
    pub frequency: f64,
    pub tool_name: String,
}

impl SelectedAllele {
    pub fn from_record(record: &FrequencyRecord, tool_name: String) -> Self {
        SelectedAllele {
            locus: record.locus,
            allele: record.allele.clone(),
            frequency: record.frequency,
            tool_name,
        }
    }
}
