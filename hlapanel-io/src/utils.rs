use std::io::{BufReader, Read};
use std::path::Path;

use hlapanel_core::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin};

use crate::error::{IoError, Result};

/// Open a (possibly gzipped) file, or stdin for `-`, folding reader setup
/// failures into [IoError].
pub(crate) fn open_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let reader = match path.to_str() {
        Some(p) => get_dynamic_reader_w_stdin(p),
        None => get_dynamic_reader(path),
    };
    reader.map_err(|e| IoError::FileRead(format!("{:#}", e)))
}
