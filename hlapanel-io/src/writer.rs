use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::consts::PANEL_DELIMITER;

///
/// Write an allele panel as a single comma-joined line, without a trailing
/// newline. An empty panel produces an empty file.
///
/// # Arguments
/// - path: the path to the file to dump to; parent folders are created
/// - alleles: the formatted allele names, in output order
pub fn write_allele_line<T: AsRef<Path>, S: AsRef<str>>(
    path: T,
    alleles: &[S],
) -> std::io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    write!(file, "{}", join_alleles(alleles))?;
    Ok(())
}

/// Join formatted allele names with the panel delimiter.
pub fn join_alleles<S: AsRef<str>>(alleles: &[S]) -> String {
    alleles
        .iter()
        .map(|a| a.as_ref())
        .collect::<Vec<&str>>()
        .join(PANEL_DELIMITER)
}
