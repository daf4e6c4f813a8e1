use std::cmp::Ordering;

use fxhash::FxHashMap as HashMap;
use serde::Serialize;

use hlapanel_core::{FrequencyRecord, Locus};

fn by_frequency_desc(a: &FrequencyRecord, b: &FrequencyRecord) -> Ordering {
    b.frequency
        .partial_cmp(&a.frequency)
        .unwrap_or(Ordering::Equal)
}

///
/// Collapse repeated alleles to their most frequent occurrence and order the
/// result by frequency, highest first.
///
/// Equal frequencies keep input order: the position of a collapsed allele is
/// the position of its winning occurrence (the earliest one on a tie).
///
/// # Arguments
/// - records: rows of a single locus, in input order
pub fn collapse_duplicates(records: &[FrequencyRecord]) -> Vec<FrequencyRecord> {
    let mut slots: HashMap<&str, usize> = HashMap::default();
    let mut best: Vec<(usize, &FrequencyRecord)> = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        match slots.get(record.allele.as_str()) {
            Some(&slot) => {
                if record.frequency > best[slot].1.frequency {
                    best[slot] = (idx, record);
                }
            }
            None => {
                slots.insert(record.allele.as_str(), best.len());
                best.push((idx, record));
            }
        }
    }

    best.sort_by(|(ia, a), (ib, b)| by_frequency_desc(a, b).then(ia.cmp(ib)));
    best.into_iter().map(|(_, r)| r.clone()).collect()
}

///
/// Select the most frequent alleles of one locus until their cumulative
/// frequency reaches `coverage`.
///
/// The boundary is inclusive. When every allele is used without reaching the
/// target, all of them are returned. A target of zero or less selects nothing.
///
/// # Arguments
/// - records: rows of a single locus, in input order
/// - coverage: cumulative frequency target
pub fn select_locus(records: &[FrequencyRecord], coverage: f64) -> Vec<FrequencyRecord> {
    let mut selected = Vec::new();
    let mut cumulative = 0.0;

    for record in collapse_duplicates(records) {
        if cumulative >= coverage {
            break;
        }
        cumulative += record.frequency;
        selected.push(record);
    }

    selected
}

///
/// Select alleles for every locus of a class and cap the pooled result.
///
/// Loci are visited in the given order and contribute their selections in
/// that order. If the pool is larger than `max_alleles` it is re-sorted by
/// frequency (stable on ties) and truncated. The cap is applied across the
/// whole class, so a locus can end up below its coverage target.
///
/// # Arguments
/// - records: rows of the class; rows of other loci are ignored
/// - loci: the class's loci
/// - max_alleles: cap on the pooled selection
/// - coverage: per-locus cumulative frequency target
pub fn select_for_class(
    records: &[FrequencyRecord],
    loci: &[Locus],
    max_alleles: usize,
    coverage: f64,
) -> Vec<FrequencyRecord> {
    let mut pooled: Vec<FrequencyRecord> = Vec::new();

    for &locus in loci {
        let subset: Vec<FrequencyRecord> = records
            .iter()
            .filter(|r| r.locus == locus)
            .cloned()
            .collect();
        if subset.is_empty() {
            continue;
        }
        pooled.extend(select_locus(&subset, coverage));
    }

    if pooled.len() > max_alleles {
        pooled.sort_by(by_frequency_desc);
        pooled.truncate(max_alleles);
    }

    pooled
}

///
/// How much of a locus the final selection covers.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub locus: Locus,
    pub selected: usize,
    pub cumulative_frequency: f64,
    pub reached: bool,
}

///
/// Summarise the coverage each locus achieves in a (possibly capped) selection.
///
/// `reached` is false for loci that lost alleles to the cap, or that simply
/// do not have enough frequency mass.
pub fn summarize_coverage<I>(selected: I, loci: &[Locus], coverage: f64) -> Vec<CoverageSummary>
where
    I: IntoIterator<Item = (Locus, f64)> + Clone,
{
    loci.iter()
        .map(|&locus| {
            let (count, total) = selected
                .clone()
                .into_iter()
                .filter(|(l, _)| *l == locus)
                .fold((0usize, 0.0f64), |(n, sum), (_, f)| (n + 1, sum + f));
            CoverageSummary {
                locus,
                selected: count,
                cumulative_frequency: total,
                reached: count > 0 && total >= coverage,
            }
        })
        .collect()
}
