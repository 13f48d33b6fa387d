//! Root configuration record with load-time derivation and validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::dnn::{DnnDataConfig, DnnTrainConfig};
use super::features::FeatureSchema;
use super::paths::ProjectPaths;
use super::programs::ExternalPrograms;
use super::run_flags::RunFlags;
use crate::error::{ConfigError, Result};

/// The full settings record consumed by the pipeline.
///
/// Constructed once at process start and treated as read-only thereafter;
/// consumers receive it by reference. Loading runs in two steps, in order:
/// derived paths are resolved, then every schema invariant is checked.
/// A record that fails validation is never returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stage toggles
    pub run: RunFlags,
    /// Project directory layout
    pub paths: ProjectPaths,
    /// Corpus sampling frequency in Hz
    pub sampling_frequency: u32,
    /// All-pass warping coefficient for the spectral envelope, `0 <= λ < 1`
    pub warping_lambda: f64,
    /// Use externally supplied glottal closure instants instead of estimating them
    pub use_external_gci: bool,
    /// External tool invocations
    pub programs: ExternalPrograms,
    /// DNN input/output feature layout
    pub features: FeatureSchema,
    /// Training data packing settings
    pub dnn_data: DnnDataConfig,
    /// Network shape and optimizer settings
    pub dnn_train: DnnTrainConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let mut cfg = Self {
            run: RunFlags::default(),
            paths: ProjectPaths::default(),
            sampling_frequency: 48000,
            warping_lambda: 0.42,
            use_external_gci: false,
            programs: ExternalPrograms::default(),
            features: FeatureSchema::default(),
            dnn_data: DnnDataConfig::default(),
            dnn_train: DnnTrainConfig::default(),
        };
        cfg.resolve_derived();
        cfg
    }
}

impl PipelineConfig {
    /// Recompute every derived path from `prjdir` and the DNN name.
    pub fn resolve_derived(&mut self) {
        self.paths.resolve(&self.dnn_data.dnn_name);
    }

    /// Parse a JSON document, resolve derived paths, and validate.
    ///
    /// Groups absent from the document keep their default values, so a
    /// document may override as little as a single field.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut cfg: PipelineConfig = serde_json::from_str(json)?;
        cfg.resolve_derived();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a JSON config from disk.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading pipeline configuration");
        let txt = fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_json_str(&txt)
    }

    /// Save to disk (pretty-printed). Derived fields are not written;
    /// they are recomputed on the next load.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| ConfigError::io_error(path, e))
    }

    /// Validate the configuration.
    ///
    /// Every check here is fatal except train/val/test overlap, which the
    /// original pipeline tolerated and which is therefore only warned.
    pub fn validate(&self) -> Result<()> {
        if self.paths.prjdir.is_empty() {
            return Err(ConfigError::Invariant(
                "prjdir must not be empty".to_string(),
            ));
        }
        if self.dnn_data.dnn_name.is_empty() {
            return Err(ConfigError::Invariant(
                "dnn_name must not be empty".to_string(),
            ));
        }
        if self.sampling_frequency == 0 {
            return Err(ConfigError::Invariant(
                "sampling_frequency must be > 0".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.warping_lambda) {
            return Err(ConfigError::Invariant(format!(
                "warping_lambda must be in [0, 1), got {}",
                self.warping_lambda
            )));
        }
        self.features.validate()?;
        if self.dnn_data.data_buffer_size == 0 {
            return Err(ConfigError::Invariant(
                "data_buffer_size must be > 0".to_string(),
            ));
        }
        if self.dnn_train.batch_size == 0 {
            return Err(ConfigError::Invariant(
                "batch_size must be > 0".to_string(),
            ));
        }
        if self.dnn_train.max_epochs == 0 {
            return Err(ConfigError::Invariant(
                "max_epochs must be > 0".to_string(),
            ));
        }
        if self.dnn_train.learning_rate <= 0.0 {
            return Err(ConfigError::Invariant(format!(
                "learning_rate must be > 0, got {}",
                self.dnn_train.learning_rate
            )));
        }
        if self.dnn_train.n_hidden.iter().any(|w| *w == 0) {
            return Err(ConfigError::Invariant(
                "n_hidden layer widths must all be > 0".to_string(),
            ));
        }

        let overlap = self.dnn_data.overlapping_utterances();
        if !overlap.is_empty() {
            warn!(
                utterances = ?overlap,
                "train/val/test sets overlap; results will not be held-out"
            );
        }
        Ok(())
    }
}
