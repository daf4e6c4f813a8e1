//! Allele name normalization between frequency-table and tool notations.

use hlapanel_core::MhcClass;

const HLA_PREFIX: &str = "HLA-";
const CLASS_I_LETTERS: [u8; 3] = [b'A', b'B', b'C'];

/// A converted allele name, and whether the input had the expected shape.
///
/// `clean == false` means the conversion fell back to a passthrough (or
/// partial) rewrite. The name is still usable, it just may not be found in
/// a tool's allele list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub name: String,
    pub clean: bool,
}

impl Normalized {
    fn clean(name: String) -> Self {
        Normalized { name, clean: true }
    }

    fn passthrough(name: &str) -> Self {
        Normalized {
            name: name.to_string(),
            clean: false,
        }
    }
}

fn strip_hla_prefix(allele: &str) -> &str {
    allele.strip_prefix(HLA_PREFIX).unwrap_or(allele)
}

/// Convert a class I allele to NetMHCpan notation, e.g. `HLA-A*02:01` -> `HLA-A02:01`.
///
/// A missing `HLA-` prefix is inferred when the name starts with `A`, `B` or
/// `C` followed by `*` or a digit `0`. Any other prefix-less name is
/// returned unchanged.
pub fn to_netmhcpan_name_checked(allele: &str) -> Normalized {
    let a = allele.trim();
    if a.is_empty() {
        return Normalized::passthrough(a);
    }

    let prefixed = if a.starts_with(HLA_PREFIX) {
        a.to_string()
    } else {
        let bytes = a.as_bytes();
        let looks_class_i = bytes.len() > 1
            && CLASS_I_LETTERS.contains(&bytes[0])
            && (bytes[1] == b'*' || bytes[1] == b'0');
        if !looks_class_i {
            return Normalized::passthrough(a);
        }
        format!("{}{}", HLA_PREFIX, a)
    };

    let clean = strip_hla_prefix(&prefixed)
        .as_bytes()
        .first()
        .is_some_and(|b| CLASS_I_LETTERS.contains(b));

    Normalized {
        name: prefixed.replace('*', ""),
        clean,
    }
}

pub fn to_netmhcpan_name(allele: &str) -> String {
    to_netmhcpan_name_checked(allele).name
}

/// Convert a class II allele to the NetMHCIIpan allele-list notation,
/// e.g. `HLA-DRB1*04:01` -> `DRB1*04:01`. Only the `HLA-` prefix is dropped.
pub fn to_netmhciipan_name_checked(allele: &str) -> Normalized {
    let a = strip_hla_prefix(allele.trim());
    match a.split_once('*') {
        Some((locus, rest)) if !locus.is_empty() && !rest.is_empty() => {
            Normalized::clean(a.to_string())
        }
        _ => Normalized::passthrough(a),
    }
}

pub fn to_netmhciipan_name(allele: &str) -> String {
    to_netmhciipan_name_checked(allele).name
}

/// Convert a class II allele to NetMHCIIpan text-input notation,
/// e.g. `HLA-DRB1*07:01` -> `DRB1_0701`.
///
/// Without a `*` separator the colons are dropped and nothing else changes.
pub fn to_netmhciipan_text_form_checked(allele: &str) -> Normalized {
    let a = strip_hla_prefix(allele.trim());
    if a.is_empty() {
        return Normalized::passthrough(a);
    }

    match a.split_once('*') {
        Some((locus, rest)) => Normalized::clean(format!("{}_{}", locus, rest.replace(':', ""))),
        None => Normalized {
            name: a.replace(':', "").replace('*', "_"),
            clean: false,
        },
    }
}

pub fn to_netmhciipan_text_form(allele: &str) -> String {
    to_netmhciipan_text_form_checked(allele).name
}

/// Put the `*` separator back into a NetMHCpan name: `HLA-A02:01` -> `HLA-A*02:01`.
///
/// The separator goes after the run of letters following the `HLA-` prefix.
/// Names without that prefix, or without any digits, are returned unchanged.
pub fn reinsert_separator(netmhcpan_name: &str) -> String {
    let Some(body) = netmhcpan_name.strip_prefix(HLA_PREFIX) else {
        return netmhcpan_name.to_string();
    };
    let split = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    if split == 0 || split == body.len() {
        return netmhcpan_name.to_string();
    }
    format!("{}{}*{}", HLA_PREFIX, &body[..split], &body[split..])
}

/// Name of `allele` in the vocabulary of the tool serving `class`.
///
/// This is the name looked up in the tool's supported-allele list.
pub fn tool_name(class: MhcClass, allele: &str) -> String {
    match class {
        MhcClass::ClassI => to_netmhcpan_name(allele),
        MhcClass::ClassII => to_netmhciipan_name(allele),
    }
}

/// Final rendering of a tool name for the tool's input file.
pub fn render_for_tool(class: MhcClass, tool_name: &str) -> String {
    match class {
        MhcClass::ClassI => tool_name.to_string(),
        MhcClass::ClassII => to_netmhciipan_text_form(tool_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("HLA-A*02:01", "HLA-A02:01")]
    #[case("A*02:01", "HLA-A02:01")]
    #[case("B*07:02", "HLA-B07:02")]
    #[case("C0702", "HLA-C0702")]
    #[case("  HLA-C*07:02 ", "HLA-C07:02")]
    #[case("HLA-A*02:01:01:01", "HLA-A02:01:01:01")]
    fn test_netmhcpan_name(#[case] input: &str, #[case] expected: &str) {
        let out = to_netmhcpan_name_checked(input);
        assert_eq!(out.name, expected);
        assert!(out.clean);
    }

    #[rstest]
    #[case("DRB1*04:01", "DRB1*04:01")]
    #[case("A", "A")]
    #[case("Ax02", "Ax02")]
    #[case("", "")]
    #[case("weird name", "weird name")]
    fn test_netmhcpan_name_passthrough(#[case] input: &str, #[case] expected: &str) {
        let out = to_netmhcpan_name_checked(input);
        assert_eq!(out.name, expected);
        assert!(!out.clean);
    }

    #[rstest]
    fn test_netmhcpan_name_prefixed_class_ii_is_flagged() {
        // already prefixed, so the stars go, but it is not a class I allele
        let out = to_netmhcpan_name_checked("HLA-DRB1*04:01");
        assert_eq!(out.name, "HLA-DRB104:01");
        assert!(!out.clean);
    }

    #[rstest]
    #[case("HLA-DRB1*04:01", "DRB1*04:01", true)]
    #[case("DQB1*03:01", "DQB1*03:01", true)]
    #[case(" HLA-DPB1*04:01\t", "DPB1*04:01", true)]
    #[case("HLA-DRB10401", "DRB10401", false)]
    #[case("*04:01", "*04:01", false)]
    fn test_netmhciipan_name(#[case] input: &str, #[case] expected: &str, #[case] clean: bool) {
        let out = to_netmhciipan_name_checked(input);
        assert_eq!(out.name, expected);
        assert_eq!(out.clean, clean);
    }

    #[rstest]
    #[case("HLA-DRB1*07:01", "DRB1_0701", true)]
    #[case("DRB1*07:01", "DRB1_0701", true)]
    #[case("DPB1*104:01", "DPB1_10401", true)]
    #[case("DQB1*02:01*x", "DQB1_0201*x", true)]
    #[case("DRB1 07:01", "DRB1 0701", false)]
    #[case("", "", false)]
    fn test_netmhciipan_text_form(
        #[case] input: &str,
        #[case] expected: &str,
        #[case] clean: bool,
    ) {
        let out = to_netmhciipan_text_form_checked(input);
        assert_eq!(out.name, expected);
        assert_eq!(out.clean, clean);
    }

    #[rstest]
    #[case("HLA-A*02:01")]
    #[case("HLA-B*57:01")]
    #[case("HLA-C*07:02")]
    #[case("A*11:01")]
    fn test_reinsert_separator_recovers_input(#[case] input: &str) {
        let prefixed = if input.starts_with(HLA_PREFIX) {
            input.to_string()
        } else {
            format!("{}{}", HLA_PREFIX, input)
        };
        assert_eq!(reinsert_separator(&to_netmhcpan_name(input)), prefixed);
    }

    #[rstest]
    #[case("A02:01")]
    #[case("HLA-")]
    #[case("HLA-ABC")]
    #[case("HLA-0201")]
    fn test_reinsert_separator_passthrough(#[case] input: &str) {
        assert_eq!(reinsert_separator(input), input);
    }

    #[rstest]
    fn test_tool_name_and_render() {
        assert_eq!(tool_name(MhcClass::ClassI, "HLA-A*02:01"), "HLA-A02:01");
        assert_eq!(tool_name(MhcClass::ClassII, "HLA-DRB1*04:01"), "DRB1*04:01");
        assert_eq!(render_for_tool(MhcClass::ClassI, "HLA-A02:01"), "HLA-A02:01");
        assert_eq!(render_for_tool(MhcClass::ClassII, "DRB1*04:01"), "DRB1_0401");
    }
}
