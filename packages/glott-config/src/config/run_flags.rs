//! Pipeline stage toggles.

use serde::{Deserialize, Serialize};

/// Which stages of the pipeline a run executes.
///
/// The flags are independent toggles: nothing prevents enabling synthesis
/// without analysis, for example. Consumers are expected to skip stages
/// whose inputs are missing on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunFlags {
    /// Create the project directory tree before anything else
    pub make_dirs: bool,
    /// Write file-list (.scp) indices for the corpus
    pub make_scp: bool,
    /// Pitch analysis with the SPTK `pitch` tool
    pub do_sptk_pitch_analysis: bool,
    /// Pitch analysis with REAPER
    pub do_reaper_pitch_analysis: bool,
    /// Acoustic feature extraction with the glottal vocoder
    pub do_glott_vocoder_analysis: bool,
    /// Pack extracted features into DNN training matrices
    pub make_dnn_train_data: bool,
    /// Emit the DNN info file describing the feature layout
    pub make_dnn_infofile: bool,
    /// Run DNN training
    pub do_dnn_training: bool,
    /// Resynthesize audio through the glottal vocoder
    pub do_glott_vocoder_synthesis: bool,
}

impl Default for RunFlags {
    fn default() -> Self {
        Self {
            make_dirs: true,
            make_scp: true,
            do_sptk_pitch_analysis: false,
            do_reaper_pitch_analysis: true,
            do_glott_vocoder_analysis: true,
            make_dnn_train_data: false,
            make_dnn_infofile: false,
            do_dnn_training: false,
            do_glott_vocoder_synthesis: false,
        }
    }
}
