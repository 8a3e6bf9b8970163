use serde::{Deserialize, Serialize};

use objlist_groups::GroupTable;
use objlist_types::MatchRule;

use crate::error::{RegistryError, RegistryResult};

/// Which built-in group table a registry addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupLayout {
    /// Every object type.
    #[default]
    Standard,
    /// Only the groups of the legacy save-format object list.
    Legacy,
}

impl GroupLayout {
    pub fn table(self) -> &'static GroupTable {
        match self {
            Self::Standard => GroupTable::standard(),
            Self::Legacy => GroupTable::legacy(),
        }
    }
}

/// Registry configuration.
///
/// ```toml
/// layout = "legacy"
///
/// [match_rule]
/// wildcard_flags = 0xF0
/// type_flags = 0x0F
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub layout: GroupLayout,
    pub match_rule: MatchRule,
}

impl RegistryConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> RegistryResult<Self> {
        toml::from_str(s).map_err(|e| RegistryError::Config(e.to_string()))
    }
}
