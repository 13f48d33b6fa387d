//! DNN data packing and training parameters.

use serde::{Deserialize, Serialize};

/// How feature files are packed into training data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnnDataConfig {
    /// Network name; keys the traindata/weights directories
    pub dnn_name: String,
    /// Frames buffered per write when packing matrices
    pub data_buffer_size: usize,
    /// Drop frames whose F0 is zero before packing
    pub remove_unvoiced_frames: bool,
    /// Utterance indices used for training
    pub train_set: Vec<u32>,
    /// Utterance indices used for validation
    pub val_set: Vec<u32>,
    /// Utterance indices held out for testing
    pub test_set: Vec<u32>,
}

impl Default for DnnDataConfig {
    fn default() -> Self {
        Self {
            dnn_name: "nancy48_legacy_same".to_string(),
            data_buffer_size: 1000,
            remove_unvoiced_frames: true,
            train_set: vec![1],
            val_set: vec![6],
            test_set: vec![7],
        }
    }
}

impl DnnDataConfig {
    /// Utterance indices appearing in more than one of the three sets.
    ///
    /// Overlap is suspicious but not fatal: the original pipeline was
    /// routinely smoke-tested with a single utterance in every set.
    pub fn overlapping_utterances(&self) -> Vec<u32> {
        let mut overlap: Vec<u32> = self
            .train_set
            .iter()
            .copied()
            .filter(|id| self.val_set.contains(id) || self.test_set.contains(id))
            .chain(
                self.val_set
                    .iter()
                    .copied()
                    .filter(|id| self.test_set.contains(id)),
            )
            .collect();
        overlap.sort_unstable();
        overlap.dedup();
        overlap
    }
}

/// Network shape and optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnnTrainConfig {
    /// Hidden layer widths, input to output
    pub n_hidden: Vec<usize>,
    /// SGD learning rate
    pub learning_rate: f64,
    /// Minibatch size in frames
    pub batch_size: usize,
    /// Upper bound on training epochs
    pub max_epochs: usize,
}

impl Default for DnnTrainConfig {
    fn default() -> Self {
        Self {
            n_hidden: vec![250, 250, 250],
            learning_rate: 0.1,
            batch_size: 100,
            max_epochs: 20000,
        }
    }
}
