//! Layered configuration.
//!
//! Sources, lowest priority first: built-in defaults, a TOML file
//! (`roadgraph.toml` unless another path is given), then `ROADGRAPH_*`
//! environment variables. Nested keys use `__`, e.g.
//! `ROADGRAPH_DELIMITERS__RECORD_SEPARATOR`. Callers may merge further
//! providers (command-line flags) on top of [`RoadgraphConfig::figment`].

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::BackendKind;
use crate::profile::{DelimiterProfile, Preset};

/// Configuration file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "roadgraph.toml";

/// Prefix of the environment variables that override the file.
pub const ENV_PREFIX: &str = "ROADGRAPH_";

/// What to load a file into and how to split it.
///
/// ```toml
/// backend = "matrix"
/// preset = "b"
///
/// # Overrides `preset` when present.
/// [delimiters]
/// record_separator = ";"
/// node_field_separator = "="
/// edge_field_separator = ","
/// edge_fields = ["destination", "distance", "category"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadgraphConfig {
    /// Backend to load into.
    pub backend: BackendKind,
    /// Built-in delimiter profile.
    pub preset: Preset,
    /// Custom delimiter profile, taking precedence over `preset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiters: Option<DelimiterProfile>,
}

impl RoadgraphConfig {
    /// Builds the provider stack without extracting it.
    ///
    /// A missing default file is fine; a missing explicit `file` is an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `file` is given but does not exist.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let file = match file {
            Some(path) if !path.is_file() => {
                return Err(Error::Config(format!(
                    "configuration file '{}' not found",
                    path.display()
                )));
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_FILE),
        };
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Loads and validates configuration from defaults, file and environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source cannot be read or extracted, and
    /// `Error::InvalidProfile` if the resulting delimiter profile is unusable.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(file)?)
    }

    /// Extracts and validates configuration from any provider stack.
    ///
    /// # Errors
    ///
    /// Same as [`RoadgraphConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Self::extract(figment)?.validated()
    }

    /// Extracts configuration without checking the delimiter profile.
    ///
    /// Callers that override fields after extraction finish with
    /// [`RoadgraphConfig::validated`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source cannot be read or extracted.
    pub fn extract(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Checks the effective delimiter profile.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProfile` if the profile is unusable.
    pub fn validated(self) -> Result<Self> {
        self.profile().validate()?;
        tracing::debug!(
            backend = %self.backend,
            preset = %self.preset,
            custom_delimiters = self.delimiters.is_some(),
            "Configuration loaded"
        );
        Ok(self)
    }

    /// Switches to a built-in preset, dropping any custom delimiters.
    #[must_use]
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self.delimiters = None;
        self
    }

    /// The delimiter profile to parse with.
    #[must_use]
    pub fn profile(&self) -> DelimiterProfile {
        self.delimiters
            .clone()
            .unwrap_or_else(|| self.preset.profile())
    }
}
