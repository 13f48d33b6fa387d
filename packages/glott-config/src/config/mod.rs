//! Configuration schema for the GlottDNN pipeline
//!
//! This module defines the typed settings record the pipeline consumes:
//! stage toggles, the project directory layout (with derived paths), the
//! external tool invocations, the parallel-array feature schema, and the
//! DNN data/training parameters. Validation runs at load time and is
//! fail-fast; see [`PipelineConfig::validate`].

pub mod dnn;
pub mod features;
pub mod main_config;
pub mod paths;
pub mod programs;
pub mod run_flags;

// Re-export main types for public API
pub use dnn::{DnnDataConfig, DnnTrainConfig};
pub use features::{FeatureSchema, FeatureSpec};
pub use main_config::PipelineConfig;
pub use paths::ProjectPaths;
pub use programs::ExternalPrograms;
pub use run_flags::RunFlags;
