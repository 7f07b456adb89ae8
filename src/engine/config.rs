//! Engine configuration loaded from TOML.
//!
//! ```toml
//! dialect = "oracle"
//!
//! [options]
//! parameter_prefix = ":p"
//! offset_style = "offset_fetch"
//!
//! [functions]
//! LENGTH = "LEN"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::options::OptionOverrides;
use super::{Dialect, Engine};
use crate::error::SqlResult;

/// Dialect preset plus overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub dialect: Dialect,

    /// Applied over the dialect's options
    #[serde(default)]
    pub options: OptionOverrides,

    /// Canonical function name -> dialect spelling, added to the preset
    #[serde(default)]
    pub functions: IndexMap<String, String>,
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> SqlResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SqlResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded engine config from {} (dialect: {})",
            path.display(),
            config.dialect
        );
        Ok(config)
    }

    /// Build the engine: preset, then option overrides, then functions.
    pub fn build(&self) -> SqlResult<Engine> {
        let mut engine = Engine::new(self.dialect);
        self.options.apply(&mut engine.options)?;
        for (name, spelling) in &self.functions {
            engine.add_function_as(name, spelling);
        }
        Ok(engine)
    }
}
