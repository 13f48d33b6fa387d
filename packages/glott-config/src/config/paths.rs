//! Project directory layout.
//!
//! Only `prjdir` is authored; every other path is derived from it (and the
//! DNN name) by plain string concatenation when the configuration is
//! loaded. Paths are kept as `String` so the derived values are exactly
//! the concatenations downstream shell invocations expect, with no
//! normalization applied.

use serde::{Deserialize, Serialize};

/// Project-root-relative locations of the pipeline's fixed assets.
const DATA_SUBDIR: &str = "/data/slt48";
const ANALYSIS_BIN: &str = "/src/Analysis";
const SYNTHESIS_BIN: &str = "/src/Synthesis";
const VOCODER_CONFIG: &str = "/config/config_48_2.cfg";
const TRAIN_DATA_SUBDIR: &str = "/nndata/traindata/";
const WEIGHTS_SUBDIR: &str = "/nndata/weights/";

/// Filesystem layout of a pipeline project.
///
/// Derived fields are recomputed from `prjdir` on every load and are never
/// read from a configuration document; a document that supplies them is
/// silently overridden. Changing `prjdir` on a copy of this struct does
/// not update the derived fields — derivation happens once, at load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPaths {
    /// Project install directory; root of every derived path
    pub prjdir: String,

    /// Corpus audio directory (`{prjdir}/data/slt48`)
    #[serde(skip)]
    pub datadir: String,

    /// Vocoder analysis executable (`{prjdir}/src/Analysis`)
    #[serde(skip)]
    pub analysis: String,

    /// Vocoder synthesis executable (`{prjdir}/src/Synthesis`)
    #[serde(skip)]
    pub synthesis: String,

    /// Default vocoder configuration file (`{prjdir}/config/config_48_2.cfg`)
    #[serde(skip)]
    pub config_default: String,

    /// Packed DNN training matrices (`{prjdir}/nndata/traindata/{dnn_name}`)
    #[serde(skip)]
    pub train_data_dir: String,

    /// Trained network weights (`{prjdir}/nndata/weights/{dnn_name}`)
    #[serde(skip)]
    pub weights_data_dir: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            prjdir: "/opt/glott".to_string(),
            datadir: String::new(),
            analysis: String::new(),
            synthesis: String::new(),
            config_default: String::new(),
            train_data_dir: String::new(),
            weights_data_dir: String::new(),
        }
    }
}

impl ProjectPaths {
    /// Fill in every derived path from `prjdir` and the DNN name.
    pub fn resolve(&mut self, dnn_name: &str) {
        self.datadir = format!("{}{}", self.prjdir, DATA_SUBDIR);
        self.analysis = format!("{}{}", self.prjdir, ANALYSIS_BIN);
        self.synthesis = format!("{}{}", self.prjdir, SYNTHESIS_BIN);
        self.config_default = format!("{}{}", self.prjdir, VOCODER_CONFIG);
        self.train_data_dir = format!("{}{}{}", self.prjdir, TRAIN_DATA_SUBDIR, dnn_name);
        self.weights_data_dir = format!("{}{}{}", self.prjdir, WEIGHTS_SUBDIR, dnn_name);
    }
}
