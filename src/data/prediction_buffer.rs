use anyhow::Result;
use ndarray::{Array2, ArrayView2};

/// Flat, read-only view of a detector's output tensor, one row per sample.
/// Each row holds `maps` values in the grid layout decoded by
/// [`GridLayout`](crate::data::GridLayout).
#[derive(Debug, Clone)]
pub struct PredictionBuffer {
    data: Array2<f32>,
}

impl PredictionBuffer {
    pub fn from_array(data: Array2<f32>) -> Self {
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().to_owned()
        };
        Self { data }
    }

    /// Builds a buffer from a flat value vector of length `samples * maps`.
    pub fn from_shape_vec(samples: usize, maps: usize, values: Vec<f32>) -> Result<Self> {
        let data = Array2::from_shape_vec((samples, maps), values)?;
        Ok(Self { data })
    }

    /// Number of samples in the buffer.
    pub fn samples(&self) -> usize {
        self.data.nrows()
    }

    /// Number of output maps per sample.
    pub fn maps(&self) -> usize {
        self.data.ncols()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat element access across the whole buffer, sample-major.
    pub fn get(&self, index: usize) -> f32 {
        let maps = self.data.ncols();
        self.data[[index / maps, index % maps]]
    }

    pub fn view(&self) -> ArrayView2<f32> {
        self.data.view()
    }

    /// Makes the buffer readable from the host before indexed access. A
    /// no-op for this CPU-resident implementation.
    pub fn ensure_host(&self) {
        log::trace!(
            "prediction buffer host-resident ({} samples x {} maps)",
            self.samples(),
            self.maps()
        );
    }
}

impl From<Array2<f32>> for PredictionBuffer {
    fn from(data: Array2<f32>) -> Self {
        Self::from_array(data)
    }
}
