use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Plain nested-array form of a network's parameters.
///
/// `weights[l]` is a `sizes[l+1] × sizes[l]` grid and `biases[l]` a
/// `sizes[l+1] × 1` column, one entry per layer. The layer sizes are implied
/// by the shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub weights: Vec<Vec<Vec<f64>>>,
    pub biases: Vec<Vec<Vec<f64>>>,
}

impl ModelSnapshot {
    /// Serializes the snapshot to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        debug!("Wrote {} layers to {path}", self.weights.len());
        Ok(())
    }

    /// Deserializes a snapshot from a JSON file previously written by `save_json`.
    ///
    /// Only the document structure is checked here; shapes are validated by
    /// `Network::load`.
    pub fn load_json(path: &str) -> Result<ModelSnapshot> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let snapshot: ModelSnapshot = serde_json::from_reader(reader)?;
        debug!("Read {} layers from {path}", snapshot.weights.len());
        Ok(snapshot)
    }
}
