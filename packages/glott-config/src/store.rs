//! Write-once configuration store.
//!
//! [`ConfigurationStore`] exists only in the loaded state: every
//! constructor resolves derived paths and validates before a value is
//! handed out, so holding a store proves the record passed validation.
//! There is no mutation API and no way back to an unloaded state.

use std::path::Path;

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::{ConfigError, Result};

/// A single configuration value, preserving the schema's type.
///
/// Lookups by name cross a stringly-typed boundary (the orchestration
/// layer addresses options by their historical names), so the value comes
/// back tagged rather than stringified.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    UInt(u64),
    Float(f64),
    Str(String),
    StrList(Vec<String>),
    UIntList(Vec<u64>),
}

/// Loaded, immutable source of truth for all pipeline parameters.
#[derive(Debug, Clone)]
pub struct ConfigurationStore {
    config: PipelineConfig,
}

impl ConfigurationStore {
    /// Load the built-in default record.
    pub fn load() -> Result<Self> {
        Self::load_from(PipelineConfig::default())
    }

    /// Load from an explicit record, resolving derived paths and
    /// validating before the store becomes visible.
    pub fn load_from(mut config: PipelineConfig) -> Result<Self> {
        config.resolve_derived();
        config.validate()?;
        info!(
            dnn_name = %config.dnn_data.dnn_name,
            inputs = config.features.inputs.len(),
            outputs = config.features.outputs.len(),
            "pipeline configuration loaded"
        );
        Ok(Self { config })
    }

    /// Load from a JSON document on disk.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from(PipelineConfig::load_json(path)?)
    }

    /// Typed access for consumers that know the schema.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Read-only lookup by historical option name.
    ///
    /// Recognizes every option of the schema, including the derived
    /// paths under their original spellings (`Analysis`, `Synthesis`).
    /// Unknown names fail with [`ConfigError::FieldNotFound`].
    pub fn get(&self, name: &str) -> Result<FieldValue> {
        use FieldValue::*;

        let cfg = &self.config;
        let value = match name {
            // run flags
            "make_dirs" => Bool(cfg.run.make_dirs),
            "make_scp" => Bool(cfg.run.make_scp),
            "do_sptk_pitch_analysis" => Bool(cfg.run.do_sptk_pitch_analysis),
            "do_reaper_pitch_analysis" => Bool(cfg.run.do_reaper_pitch_analysis),
            "do_glott_vocoder_analysis" => Bool(cfg.run.do_glott_vocoder_analysis),
            "make_dnn_train_data" => Bool(cfg.run.make_dnn_train_data),
            "make_dnn_infofile" => Bool(cfg.run.make_dnn_infofile),
            "do_dnn_training" => Bool(cfg.run.do_dnn_training),
            "do_glott_vocoder_synthesis" => Bool(cfg.run.do_glott_vocoder_synthesis),

            // directories and derived paths
            "prjdir" => Str(cfg.paths.prjdir.clone()),
            "datadir" => Str(cfg.paths.datadir.clone()),
            "Analysis" => Str(cfg.paths.analysis.clone()),
            "Synthesis" => Str(cfg.paths.synthesis.clone()),
            "config_default" => Str(cfg.paths.config_default.clone()),
            "train_data_dir" => Str(cfg.paths.train_data_dir.clone()),
            "weights_data_dir" => Str(cfg.paths.weights_data_dir.clone()),

            // general parameters
            "sampling_frequency" => UInt(cfg.sampling_frequency.into()),
            "warping_lambda" => Float(cfg.warping_lambda),
            "use_external_gci" => Bool(cfg.use_external_gci),

            // external programs
            "reaper" => Str(cfg.programs.reaper.clone()),
            "sox" => Str(cfg.programs.sox.clone()),
            "pitch" => Str(cfg.programs.pitch.clone()),
            "x2x" => Str(cfg.programs.x2x.clone()),

            // feature schema
            "inputs" => StrList(cfg.features.inputs.clone()),
            "input_exts" => StrList(cfg.features.input_exts.clone()),
            "input_dims" => UIntList(cfg.features.input_dims.iter().map(|d| *d as u64).collect()),
            "outputs" => StrList(cfg.features.outputs.clone()),
            "output_exts" => StrList(cfg.features.output_exts.clone()),
            "output_dims" => {
                UIntList(cfg.features.output_dims.iter().map(|d| *d as u64).collect())
            }

            // dnn data conf
            "dnn_name" => Str(cfg.dnn_data.dnn_name.clone()),
            "data_buffer_size" => UInt(cfg.dnn_data.data_buffer_size as u64),
            "remove_unvoiced_frames" => Bool(cfg.dnn_data.remove_unvoiced_frames),
            "train_set" => UIntList(cfg.dnn_data.train_set.iter().map(|u| (*u).into()).collect()),
            "val_set" => UIntList(cfg.dnn_data.val_set.iter().map(|u| (*u).into()).collect()),
            "test_set" => UIntList(cfg.dnn_data.test_set.iter().map(|u| (*u).into()).collect()),

            // dnn train conf
            "n_hidden" => UIntList(cfg.dnn_train.n_hidden.iter().map(|w| *w as u64).collect()),
            "learning_rate" => Float(cfg.dnn_train.learning_rate),
            "batch_size" => UInt(cfg.dnn_train.batch_size as u64),
            "max_epochs" => UInt(cfg.dnn_train.max_epochs as u64),

            _ => return Err(ConfigError::FieldNotFound(name.to_string())),
        };
        Ok(value)
    }
}
