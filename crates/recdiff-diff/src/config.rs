use recdiff_types::SEPARATOR;
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Configuration for a [`Differ`](crate::Differ).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// String placed between keys when building key paths.
    pub separator: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            separator: SEPARATOR.to_owned(),
        }
    }
}

impl DiffConfig {
    /// A configuration joining keys with `separator`.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Parse and validate a TOML document. Missing fields take their
    /// defaults.
    pub fn from_toml_str(text: &str) -> DiffResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| DiffError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DiffResult<()> {
        if self.separator.is_empty() {
            return Err(DiffError::InvalidConfig(
                "separator must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_dot() {
        let config = DiffConfig::default();
        assert_eq!(config.separator, ".");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_overrides_separator() {
        let config = DiffConfig::from_toml_str(r#"separator = "/""#).unwrap();
        assert_eq!(config.separator, "/");
    }

    #[test]
    fn empty_toml_yields_default() {
        assert_eq!(DiffConfig::from_toml_str("").unwrap(), DiffConfig::default());
    }

    #[test]
    fn empty_separator_is_rejected() {
        let err = DiffConfig::from_toml_str(r#"separator = """#).unwrap_err();
        assert!(matches!(err, DiffError::InvalidConfig(_)));
        assert!(DiffConfig::with_separator("").validate().is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = DiffConfig::from_toml_str("separator = ").unwrap_err();
        assert!(matches!(err, DiffError::InvalidConfig(_)));
    }
}
