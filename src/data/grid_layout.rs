use std::ops::Range;
use anyhow::{bail, Result};
use crate::common::PolicyConfig;

/// Decoded addressing for one sample's slice of a prediction buffer.
///
/// Each sample holds `vertical_cells * horizontal_cells` grid cells. A cell
/// starts with `boxes_per_cell` box records of 5 values (4 geometry plus one
/// confidence/IoU estimate), followed by per-class probability maps laid out
/// map-major across the whole grid.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub horizontal_cells: usize,
    pub vertical_cells: usize,
    pub boxes_per_cell: usize,
    /// Class count derived from the buffer width; the remainder of each
    /// cell after its box records.
    pub classes: usize,
    box_base: usize,
    class_base: usize,
}

impl GridLayout {
    /// Component index of the confidence/IoU estimate within a box record.
    pub const CONFIDENCE: usize = 4;

    /// Decodes the layout of sample `index` inside a buffer with
    /// `total_maps` maps per sample. A buffer too small to hold the
    /// configured box records is a caller bug and fails here.
    pub fn for_sample(config: &PolicyConfig, index: usize, total_maps: usize) -> Result<Self> {
        let cell_count = config.cell_count();
        if cell_count == 0 {
            bail!("grid configured with zero cells");
        }

        let maps_per_cell = total_maps / cell_count;
        if maps_per_cell < 5 * config.boxes_per_cell {
            bail!(
                "prediction buffer holds {maps_per_cell} maps per cell, fewer than the {} required for {} boxes per cell",
                5 * config.boxes_per_cell,
                config.boxes_per_cell
            );
        }
        let classes = maps_per_cell - 5 * config.boxes_per_cell;

        let sample_base = index * total_maps;
        Ok(Self {
            horizontal_cells: config.horizontal_cells,
            vertical_cells: config.vertical_cells,
            boxes_per_cell: config.boxes_per_cell,
            classes,
            box_base: sample_base,
            class_base: sample_base + cell_count * config.boxes_per_cell * 5,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.horizontal_cells * self.vertical_cells
    }

    /// Row-major cell ids, vertical outer loop / horizontal inner loop.
    /// Matches the buffer layout and the proposal `cell_id` field.
    pub fn cell_ids(&self) -> Range<usize> {
        0..self.cell_count()
    }

    pub fn cell_id(&self, vcell: usize, hcell: usize) -> usize {
        vcell * self.horizontal_cells + hcell
    }

    /// Flat offset of one class-probability value.
    pub fn class_offset(&self, class_idx: usize, cell_id: usize) -> usize {
        self.class_base + self.cell_count() * class_idx + cell_id
    }

    /// Flat offset of one component of one box record.
    pub fn box_offset(&self, cell_id: usize, box_idx: usize, component: usize) -> usize {
        self.box_base + (cell_id * self.boxes_per_cell + box_idx) * 5 + component
    }
}
