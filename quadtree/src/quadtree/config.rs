use crate::error::QuadtreeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Spare quadrant nodes preallocated when the tree is built.
    pub pool_size: usize,
    /// Per-node item capacity. Reserved: subdivision is driven by depth alone.
    pub capacity: usize,
    /// Subdivision levels below the root at which items may still be pushed deeper.
    pub max_depth: usize,
}

impl Config {
    /// Parses a config from TOML. Missing keys keep their default values.
    pub fn from_toml_str(contents: &str) -> QuadtreeResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pool_size: 100,
            capacity: 8,
            max_depth: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadtreeError;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("max_depth = 8\n").unwrap();
        assert_eq!(
            config,
            Config {
                max_depth: 8,
                ..Config::default()
            }
        );
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Config::from_toml_str("max_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, QuadtreeError::Config(_)));
    }
}
