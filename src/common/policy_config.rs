use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Grid geometry for the detector whose predictions are being scored.
/// Validated once at policy construction; scoring calls can rely on the
/// cell counts being positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub horizontal_cells: usize,
    pub vertical_cells: usize,
    pub boxes_per_cell: usize,
    pub confidence_threshold: f32,
}

impl PolicyConfig {
    pub fn new(horizontal_cells: usize, vertical_cells: usize, boxes_per_cell: usize) -> Self {
        Self {
            horizontal_cells,
            vertical_cells,
            boxes_per_cell,
            confidence_threshold: 0.2,
        }
    }

    /// Reads the grid geometry from a structured configuration object.
    ///
    /// `horizontal_cells`, `vertical_cells` and `boxes_per_cell` are
    /// required numeric fields. `confidence_threshold` is optional and
    /// defaults to `0.2`.
    pub fn from_json(config: &Value) -> Result<Self> {
        let horizontal_cells = required_count(config, "horizontal_cells")?;
        let vertical_cells = required_count(config, "vertical_cells")?;
        let boxes_per_cell = required_count(config, "boxes_per_cell")?;

        let confidence_threshold = match config.get("confidence_threshold").and_then(Value::as_f64) {
            Some(threshold) => threshold as f32,
            None => 0.2,
        };

        Ok(Self {
            horizontal_cells,
            vertical_cells,
            boxes_per_cell,
            confidence_threshold,
        })
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Number of grid cells per sample.
    pub fn cell_count(&self) -> usize {
        self.horizontal_cells * self.vertical_cells
    }
}

fn required_count(config: &Value, key: &str) -> Result<usize> {
    match config.get(key).and_then(Value::as_f64) {
        None => bail!("grid configuration property {key} missing or not a number"),
        Some(value) if value < 1.0 => {
            bail!("grid configuration property {key} must be a positive count, got {value}")
        }
        Some(value) => Ok(value as usize),
    }
}
