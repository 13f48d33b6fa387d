//! External tool invocations.

use serde::{Deserialize, Serialize};

/// Command strings for the external signal-processing tools.
///
/// Each value is either a bare program name resolved on `PATH` or an
/// absolute path, optionally with baked-in arguments (`pitch` carries the
/// full SPTK argument list). Resolvability is deliberately not checked at
/// load time: a configuration is often authored on a different host than
/// the one that runs the tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalPrograms {
    /// REAPER pitch/GCI estimator
    pub reaper: String,
    /// sox audio converter
    pub sox: String,
    /// SPTK pitch tool with its analysis arguments
    pub pitch: String,
    /// SPTK x2x binary format converter
    pub x2x: String,
}

impl Default for ExternalPrograms {
    fn default() -> Self {
        Self {
            reaper: "reaper".to_string(),
            sox: "sox".to_string(),
            pitch: "pitch -a 0 -s 48.0 -o 1 -p 240 -T 0.0 -L 50 -H 500".to_string(),
            x2x: "x2x".to_string(),
        }
    }
}
