//! # hlapanel
//!
//! Pick small, representative sets of HLA alleles for peptide-binding
//! prediction: for every classical locus the most frequent alleles of a
//! population are kept until a cumulative frequency target is met, and only
//! alleles the prediction tool actually supports are considered.
//!
//! ```
//! # #[cfg(all(feature = "core", feature = "nomenclature"))]
//! # {
//! use hlapanel::core::MhcClass;
//! use hlapanel::nomenclature::{render_for_tool, tool_name};
//!
//! let name = tool_name(MhcClass::ClassII, "HLA-DRB1*07:01");
//! assert_eq!(render_for_tool(MhcClass::ClassII, &name), "DRB1_0701");
//! # }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use hlapanel_core as core;

#[cfg(feature = "nomenclature")]
#[doc(inline)]
pub use hlapanel_nomenclature as nomenclature;

#[cfg(feature = "io")]
#[doc(inline)]
pub use hlapanel_io as io;

#[cfg(feature = "select")]
#[doc(inline)]
pub use hlapanel_select as select;
