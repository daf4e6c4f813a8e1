//! Core data model shared by the hlapanel crates.
//!
//! - [`Locus`] and [`MhcClass`]: the six classical HLA loci and their class partition
//! - [`FrequencyRecord`]: one row of an allele frequency table
//! - [`SelectedAllele`]: one member of a selected panel, carrying its downstream tool name
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{HlaPanelError, Result};
pub use models::{FrequencyRecord, Locus, MhcClass, SelectedAllele};
