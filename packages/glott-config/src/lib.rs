//! glott-config – typed settings for the GlottDNN pipeline
//! ========================================================
//! Immutable-after-load configuration record for the glottal vocoder
//! analysis / DNN training / synthesis pipeline.
//!
//! * Load the built-in defaults or a JSON document, get back a validated
//!   [`PipelineConfig`] (derived paths resolved, invariants checked).
//! * Hand consumers either the typed record or a [`ConfigurationStore`]
//!   for lookup by historical option name.
//!
//! The pipeline stages themselves (analysis and synthesis binaries, pitch
//! extractors, the training loop) are external programs that consume the
//! values held here; nothing in this crate invokes them.

pub mod config;
pub mod error;
pub mod store;

pub use config::{
    DnnDataConfig, DnnTrainConfig, ExternalPrograms, FeatureSchema, FeatureSpec, PipelineConfig,
    ProjectPaths, RunFlags,
};
pub use error::ConfigError;
pub use store::{ConfigurationStore, FieldValue};

/// Result alias used across the public API.
pub type Result<T> = std::result::Result<T, ConfigError>;
