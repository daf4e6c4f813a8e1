use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use hlapanel_core::MhcClass;
use hlapanel_io::parse_separator;

use crate::errors::{Result, SelectError};

pub const DEFAULT_COVERAGE: f64 = 0.9;
pub const DEFAULT_MAX_CLASS_I: usize = 20;
pub const DEFAULT_MAX_CLASS_II: usize = 15;
pub const DEFAULT_SEPARATOR: &str = "\t";

///
/// Parameters of one panel selection run.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// coverage = 0.8
/// max_class_ii = 10
/// populations = ["Northern Europe"]
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    pub coverage: f64,
    pub max_class_i: usize,
    pub max_class_ii: usize,
    pub separator: String,
    pub populations: Option<Vec<String>>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            coverage: DEFAULT_COVERAGE,
            max_class_i: DEFAULT_MAX_CLASS_I,
            max_class_ii: DEFAULT_MAX_CLASS_II,
            separator: DEFAULT_SEPARATOR.to_string(),
            populations: None,
        }
    }
}

impl SelectionConfig {
    pub fn max_alleles(&self, class: MhcClass) -> usize {
        match class {
            MhcClass::ClassI => self.max_class_i,
            MhcClass::ClassII => self.max_class_ii,
        }
    }

    /// The field separator as the single byte the table reader expects.
    pub fn separator_byte(&self) -> Result<u8> {
        Ok(parse_separator(&self.separator)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.coverage.is_finite() {
            return Err(SelectError::InvalidCoverage(self.coverage));
        }
        if self.populations.as_ref().is_some_and(|p| p.is_empty()) {
            return Err(SelectError::EmptyPopulations);
        }
        self.separator_byte()?;
        Ok(())
    }
}

impl TryFrom<&Path> for SelectionConfig {
    type Error = SelectError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        let config: SelectionConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hlapanel_io::IoError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    fn test_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.coverage, 0.9);
        assert_eq!(config.max_alleles(MhcClass::ClassI), 20);
        assert_eq!(config.max_alleles(MhcClass::ClassII), 15);
        assert_eq!(config.separator_byte().unwrap(), b'\t');
        assert_eq!(config.populations, None);
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config.toml");
        let config = SelectionConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.coverage, 0.8);
        assert_eq!(config.max_class_i, 10);
        assert_eq!(config.max_class_ii, 6);
        assert_eq!(config.populations, Some(vec!["Northern Europe".to_string()]));
    }

    #[rstest]
    fn test_partial_toml_keeps_defaults() {
        let config: SelectionConfig = toml::from_str("max_class_ii = 3").unwrap();
        assert_eq!(config.max_class_ii, 3);
        assert_eq!(config.max_class_i, 20);
        assert_eq!(config.coverage, 0.9);
    }

    #[rstest]
    fn test_invalid_separator() {
        let config = SelectionConfig {
            separator: "||".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SelectError::Table(IoError::InvalidSeparator(_)))
        ));
    }

    #[rstest]
    fn test_invalid_coverage() {
        let config = SelectionConfig {
            coverage: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SelectError::InvalidCoverage(_))
        ));
    }

    #[rstest]
    fn test_empty_population_list_is_rejected() {
        let config: SelectionConfig = toml::from_str("populations = []").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SelectError::EmptyPopulations)
        ));
    }

    #[rstest]
    fn test_empty_population_list_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "coverage = 0.8\npopulations = []\n").unwrap();

        let result = SelectionConfig::try_from(path.as_path());
        assert!(matches!(result, Err(SelectError::EmptyPopulations)));
    }

    #[rstest]
    fn test_missing_config_file() {
        let result = SelectionConfig::try_from(Path::new("../tests/data/missing.toml"));
        assert!(matches!(result, Err(SelectError::Io(_))));
    }
}
