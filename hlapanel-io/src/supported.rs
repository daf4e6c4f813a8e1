//! Supported-allele vocabularies of the downstream prediction tools.
//!
//! Both loaders are permissive: names that do not belong to a recognised
//! locus are skipped, never reported as errors. Only failing to read the
//! file is an error.
use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashSet as HashSet;
use log::info;

use hlapanel_core::Locus;

use crate::consts::*;
use crate::error::{IoError, Result};
use crate::utils::open_reader;

///
/// Lookup of tool-specific allele names, scoped per locus.
///
pub trait SupportedAlleles {
    /// Whether `tool_name` is recognised by the tool for `locus`.
    fn supports(&self, locus: Locus, tool_name: &str) -> bool;

    /// Total number of names across all loci.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// NetMHCpan class I alleles: one set pooled over HLA-A, -B and -C.
///
#[derive(Debug, Clone, Default)]
pub struct ClassISupported {
    pub alleles: HashSet<String>,
}

impl ClassISupported {
    ///
    /// Parse a NetMHCpan allele list: one name per line, no header.
    ///
    /// # Arguments
    /// - reader: any buffered reader over the list
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut alleles = HashSet::default();

        for line in reader.lines() {
            let line = line?;
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            if NETMHCPAN_PREFIXES.iter().any(|p| name.starts_with(p)) {
                alleles.insert(name.to_string());
            }
        }

        Ok(ClassISupported { alleles })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.alleles.contains(name)
    }
}

impl TryFrom<&Path> for ClassISupported {
    type Error = IoError;

    fn try_from(path: &Path) -> Result<Self> {
        let supported = ClassISupported::from_reader(open_reader(path)?)?;
        info!(
            "Loaded {} NetMHCpan class I alleles from {}",
            supported.alleles.len(),
            path.display()
        );
        Ok(supported)
    }
}

impl SupportedAlleles for ClassISupported {
    fn supports(&self, locus: Locus, tool_name: &str) -> bool {
        matches!(locus, Locus::A | Locus::B | Locus::C) && self.contains(tool_name)
    }

    fn len(&self) -> usize {
        self.alleles.len()
    }
}

///
/// NetMHCIIpan class II alleles, one set per locus.
///
#[derive(Debug, Clone, Default)]
pub struct ClassIISupported {
    pub drb1: HashSet<String>,
    pub dqb1: HashSet<String>,
    pub dpb1: HashSet<String>,
}

impl ClassIISupported {
    ///
    /// Parse a NetMHCIIpan allele table.
    ///
    /// Blank lines, `#` comments and the `DR ...` header line are skipped.
    /// Every whitespace separated token of the remaining lines is sorted into
    /// a locus set by its prefix; tokens matching no prefix are dropped.
    ///
    /// # Arguments
    /// - reader: any buffered reader over the table
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut supported = ClassIISupported::default();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty()
                || line.starts_with(NETMHCIIPAN_COMMENT_PREFIX)
                || line.starts_with(NETMHCIIPAN_HEADER_PREFIX)
            {
                continue;
            }

            for token in line.split_whitespace() {
                if token.starts_with(DRB1_PREFIX) {
                    supported.drb1.insert(token.to_string());
                } else if token.starts_with(DQB1_PREFIX) {
                    supported.dqb1.insert(token.to_string());
                } else if token.starts_with(DPB1_PREFIX) {
                    supported.dpb1.insert(token.to_string());
                }
            }
        }

        Ok(supported)
    }

    /// The name set for a class II locus; `None` for class I loci.
    pub fn for_locus(&self, locus: Locus) -> Option<&HashSet<String>> {
        match locus {
            Locus::DRB1 => Some(&self.drb1),
            Locus::DQB1 => Some(&self.dqb1),
            Locus::DPB1 => Some(&self.dpb1),
            Locus::A | Locus::B | Locus::C => None,
        }
    }
}

impl TryFrom<&Path> for ClassIISupported {
    type Error = IoError;

    fn try_from(path: &Path) -> Result<Self> {
        let supported = ClassIISupported::from_reader(open_reader(path)?)?;
        info!(
            "Loaded NetMHCIIpan class II alleles from {} (DRB1: {}, DQB1: {}, DPB1: {})",
            path.display(),
            supported.drb1.len(),
            supported.dqb1.len(),
            supported.dpb1.len()
        );
        Ok(supported)
    }
}

impl SupportedAlleles for ClassIISupported {
    fn supports(&self, locus: Locus, tool_name: &str) -> bool {
        self.for_locus(locus)
            .is_some_and(|set| set.contains(tool_name))
    }

    fn len(&self) -> usize {
        self.drb1.len() + self.dqb1.len() + self.dpb1.len()
    }
}
