//! Selection of representative HLA allele panels.
//!
//! For every locus of a receptor class the selector keeps the smallest set of
//! most frequent alleles whose cumulative frequency reaches a coverage
//! target, then caps the pooled selection for the whole class.
//!
//! # Example
//!
//! ```
//! use hlapanel_core::{FrequencyRecord, Locus, MhcClass};
//! use hlapanel_select::select_for_class;
//!
//! let records = vec![
//!     FrequencyRecord::new(Locus::A, "HLA-A*02:01", 0.5),
//!     FrequencyRecord::new(Locus::A, "HLA-A*01:01", 0.3),
//!     FrequencyRecord::new(Locus::A, "HLA-A*03:01", 0.2),
//! ];
//!
//! let selected = select_for_class(&records, MhcClass::ClassI.loci(), 20, 0.7);
//! assert_eq!(selected.len(), 2);
//! ```
pub mod config;
pub mod coverage;
pub mod errors;
pub mod pipeline;

// re-exports
pub use config::SelectionConfig;
pub use coverage::*;
pub use errors::{Result, SelectError};
pub use pipeline::*;
