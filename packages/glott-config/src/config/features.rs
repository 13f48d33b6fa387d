//! Acoustic feature schema.
//!
//! The schema is three parallel arrays per direction: feature name, file
//! extension, and per-frame dimensionality, aligned index-for-index. The
//! arrays come straight from the configuration document, so alignment is
//! checked by [`FeatureSchema::validate`] before anything iterates them.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// One aligned `(name, extension, dimension)` entry of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpec<'a> {
    /// Feature name (e.g. `f0`, `lsf`)
    pub name: &'a str,
    /// File extension of the per-utterance feature files (e.g. `.LSF`)
    pub ext: &'a str,
    /// Per-frame dimensionality; 0 disables the feature
    pub dim: usize,
}

/// Input and output feature layout of the DNN excitation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSchema {
    /// Input feature names, in network input order
    pub inputs: Vec<String>,
    /// Input feature file extensions, aligned with `inputs`
    pub input_exts: Vec<String>,
    /// Input feature dimensions, aligned with `inputs`; 0 disables a feature
    pub input_dims: Vec<usize>,
    /// Output feature names
    pub outputs: Vec<String>,
    /// Output feature file extensions, aligned with `outputs`
    pub output_exts: Vec<String>,
    /// Output feature dimensions, aligned with `outputs`
    pub output_dims: Vec<usize>,
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self {
            inputs: vec![
                "f0".to_string(),
                "gain".to_string(),
                "hnr".to_string(),
                "lsfg".to_string(),
                "lsf".to_string(),
            ],
            input_exts: vec![
                ".F0".to_string(),
                ".Gain".to_string(),
                ".HNR".to_string(),
                ".LSFglot".to_string(),
                ".LSF".to_string(),
            ],
            input_dims: vec![1, 1, 25, 10, 50],
            outputs: vec!["paf".to_string()],
            output_exts: vec![".PAF".to_string()],
            output_dims: vec![1200],
        }
    }
}

impl FeatureSchema {
    /// Check the parallel-array alignment invariants.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.len() != self.input_exts.len() || self.inputs.len() != self.input_dims.len()
        {
            return Err(ConfigError::Invariant(format!(
                "input feature arrays must be aligned: {} names, {} extensions, {} dims",
                self.inputs.len(),
                self.input_exts.len(),
                self.input_dims.len()
            )));
        }
        if self.outputs.len() != self.output_exts.len()
            || self.outputs.len() != self.output_dims.len()
        {
            return Err(ConfigError::Invariant(format!(
                "output feature arrays must be aligned: {} names, {} extensions, {} dims",
                self.outputs.len(),
                self.output_exts.len(),
                self.output_dims.len()
            )));
        }
        for (name, dim) in self.inputs.iter().zip(&self.input_dims) {
            if *dim == 0 {
                tracing::debug!(feature = %name, "input feature disabled (dim 0)");
            }
        }
        Ok(())
    }

    /// Aligned input triples. Call [`validate`](Self::validate) first;
    /// on a misaligned schema the iterator stops at the shortest array.
    pub fn input_features(&self) -> impl Iterator<Item = FeatureSpec<'_>> {
        self.inputs
            .iter()
            .zip(&self.input_exts)
            .zip(&self.input_dims)
            .map(|((name, ext), dim)| FeatureSpec {
                name,
                ext,
                dim: *dim,
            })
    }

    /// Aligned output triples.
    pub fn output_features(&self) -> impl Iterator<Item = FeatureSpec<'_>> {
        self.outputs
            .iter()
            .zip(&self.output_exts)
            .zip(&self.output_dims)
            .map(|((name, ext), dim)| FeatureSpec {
                name,
                ext,
                dim: *dim,
            })
    }

    /// Total input dimensionality (the DNN input layer width).
    pub fn input_dim_total(&self) -> usize {
        self.input_dims.iter().sum()
    }

    /// Total output dimensionality (the DNN output layer width).
    pub fn output_dim_total(&self) -> usize {
        self.output_dims.iter().sum()
    }
}
