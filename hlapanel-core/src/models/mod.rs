pub mod locus;
pub mod record;

// re-export for cleaner imports
pub use self::locus::{Locus, MhcClass};
pub use self::record::{FrequencyRecord, SelectedAllele};
