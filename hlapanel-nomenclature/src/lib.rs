//! # HLA allele nomenclature
//!
//! Frequency tables (e.g. AFND exports) name alleles as `HLA-A*02:01` or
//! `HLA-DRB1*04:01`. The prediction tools each expect something else:
//!
//! - NetMHCpan: `HLA-A02:01`
//! - NetMHCIIpan allele list: `DRB1*04:01`
//! - NetMHCIIpan text input: `DRB1_0401`
//!
//! Every conversion here is total. Inputs that do not look like an allele are
//! passed through (trimmed) rather than rejected; the `*_checked` variants
//! report whether the input matched the expected shape.

pub mod normalize;

pub use normalize::{
    Normalized, reinsert_separator, render_for_tool, to_netmhciipan_name,
    to_netmhciipan_name_checked, to_netmhciipan_text_form, to_netmhciipan_text_form_checked,
    to_netmhcpan_name, to_netmhcpan_name_checked, tool_name,
};
