//! # Input/Output for hlapanel.
//!
//! Everything that touches disk lives here, so the selection crate can stay a
//! pure in-memory transformation:
//!
//! - allele frequency tables (delimited text, header row, optional gzip)
//! - the NetMHCpan and NetMHCIIpan supported-allele lists
//! - the comma-joined allele panel files handed to the prediction tools
//! - conversion of raw AFND dumps into frequency tables
//!
pub mod afnd;
pub mod consts;
pub mod error;
pub mod frequency;
pub mod supported;
mod utils;
pub mod writer;

// re-expose core functions
pub use afnd::*;
pub use consts::*;
pub use error::*;
pub use frequency::*;
pub use supported::*;
pub use writer::*;
