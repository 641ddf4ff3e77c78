use crate::catalog::GateSet;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable that overrides the configured gate set.
pub const GATESET_ENV: &str = "QGATE_GATESET";

/// Widest family member instantiated by default.
pub const DEFAULT_MAX_FAMILY_WIDTH: usize = 6;

/// Upper bound on `max_family_width`; a width-10 member is a 1024×1024 matrix.
pub const MAX_FAMILY_WIDTH: usize = 10;

/// Startup configuration of the catalog.
///
/// Loaded from TOML:
///
/// ```toml
/// gate_set = "Quest 2"
/// max_family_width = 4
///
/// [profile]
/// title = "Quirky Quest 2"
/// max_wire_count = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Name of the gate set; see [`GateSet`] for the accepted values.
    pub gate_set: String,
    /// Families are registered at widths `1..=max_family_width`.
    pub max_family_width: usize,
    /// Seed for the fuzz gate. `None` draws a fresh seed at startup.
    pub fuzz_seed: Option<u64>,
    pub profile: Profile,
}

/// Presentation settings that travel with a gate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub title: String,
    pub long_title: String,
    pub long_subtitle: String,
    pub min_wire_count: usize,
    /// Also caps the family widths.
    pub max_wire_count: usize,
    /// Slots per toolbox column.
    pub toolbox_rows: usize,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            title: "Quirk".to_string(),
            long_title: "Quirk: Quantum Circuit Simulator".to_string(),
            long_subtitle: String::new(),
            min_wire_count: 2,
            max_wire_count: 16,
            toolbox_rows: 2,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            gate_set: GateSet::Default.to_string(),
            max_family_width: DEFAULT_MAX_FAMILY_WIDTH,
            fuzz_seed: None,
            profile: Profile::default(),
        }
    }
}

impl CatalogConfig {
    /// Config for a named gate set with every other value at its default.
    pub fn for_gate_set(name: impl Into<String>) -> Self {
        Self {
            gate_set: name.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading catalog configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Replaces the gate set with `$QGATE_GATESET` when it is set.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(name) = std::env::var(GATESET_ENV) {
            debug!(gate_set = %name, "gate set overridden from environment");
            self.gate_set = name;
        }
        self
    }

    /// The configured gate set. Unknown names are an error.
    pub fn gate_set(&self) -> Result<GateSet> {
        self.gate_set.parse()
    }

    /// Checks numeric ranges. The gate set name is checked when the registry is built.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FAMILY_WIDTH).contains(&self.max_family_width) {
            return Err(CatalogError::InvalidConfig(format!(
                "max_family_width must be in 1..={}, got {}",
                MAX_FAMILY_WIDTH, self.max_family_width
            )));
        }
        let profile = &self.profile;
        if profile.min_wire_count == 0 || profile.min_wire_count > profile.max_wire_count {
            return Err(CatalogError::InvalidConfig(format!(
                "wire counts must satisfy 1 <= min <= max, got min {} max {}",
                profile.min_wire_count, profile.max_wire_count
            )));
        }
        if profile.toolbox_rows == 0 {
            return Err(CatalogError::InvalidConfig(
                "toolbox_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Widths at which families are registered.
    pub fn family_widths(&self) -> RangeInclusive<usize> {
        1..=self.max_family_width.min(self.profile.max_wire_count)
    }
}
