//! Catalog configuration.

use serde::Deserialize;

use reclayer::prelude::*;

/// Environment variable holding the initial store capacity.
pub const CAPACITY_VAR: &str = "RECLAYER_CAPACITY";

/// Settings for the catalog's composition root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of records the in-memory store reserves room for up front.
    pub capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { capacity: 16 }
    }
}

impl CatalogConfig {
    /// Loads the configuration from the process environment, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidArgument`] if a variable is set but unparsable.
    pub fn from_env() -> RecordStoreResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RecordStoreResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_VAR) {
            config.capacity = raw.trim().parse().map_err(|_| {
                RecordStoreError::invalid_argument(format!(
                    "{CAPACITY_VAR} should be a non-negative integer, got '{raw}'"
                ))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            assert_eq!(name, CAPACITY_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn unset_variables_keep_defaults() {
        assert_eq!(CatalogConfig::from_lookup(lookup(None)).unwrap(), CatalogConfig::default());
    }

    #[test]
    fn capacity_is_read_from_the_environment() {
        let config = CatalogConfig::from_lookup(lookup(Some(" 128 "))).unwrap();

        assert_eq!(config.capacity, 128);
    }

    #[test]
    fn unparsable_capacity_is_rejected() {
        for raw in ["lots", "-1", ""] {
            assert!(matches!(
                CatalogConfig::from_lookup(lookup(Some(raw))),
                Err(RecordStoreError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn deserializes_with_defaults_for_missing_keys() {
        let config: CatalogConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, CatalogConfig::default());

        let config: CatalogConfig = serde_json::from_value(json!({ "capacity": 4 })).unwrap();
        assert_eq!(config.capacity, 4);
    }
}
