use std::cmp::Ordering;
use serde::{Deserialize, Serialize};

/// Center-coordinate bounding box. `x`/`y` are the box center, `w`/`h` the
/// full extents, in whatever coordinate system the caller works in.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BvrBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,

    pub score: f32,
    pub class_id: usize,
    /// Grid cell that produced this box, row-major
    /// (`vcell * horizontal_cells + hcell`).
    pub cell_id: usize,

    /// Scratch flag for calculations, always reset it after use.
    pub flag1: bool,
    /// Owned by certain datasets, don't ever change it.
    pub flag2: bool,

    pub unknown: bool,
}

impl BvrBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            ..Default::default()
        }
    }

    /// Returns the minimum x-coordinate of the bounding box.
    pub fn x_min(&self) -> f32 {
        self.x - self.w / 2.
    }

    /// Returns the maximum x-coordinate of the bounding box.
    pub fn x_max(&self) -> f32 {
        self.x + self.w / 2.
    }

    /// The minimum y-coordinate of the bounding box.
    pub fn y_min(&self) -> f32 {
        self.y - self.h / 2.
    }

    /// The maximum y-coordinate of the bounding box.
    pub fn y_max(&self) -> f32 {
        self.y + self.h / 2.
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f32 {
        self.h * self.w
    }

    /// Signed overlap of two centered 1-D intervals. Negative when the
    /// intervals do not touch; callers clamp at zero.
    pub fn overlap_1d(center1: f32, size1: f32, center2: f32, size2: f32) -> f32 {
        (center1 + size1 / 2.).min(center2 + size2 / 2.)
            - (center1 - size1 / 2.).max(center2 - size2 / 2.)
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &BvrBox) -> f32 {
        Self::overlap_1d(self.x, self.w, other.x, other.w).max(0.)
            * Self::overlap_1d(self.y, self.h, other.y, other.h).max(0.)
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &BvrBox) -> f32 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Computes the intersection over union (IoU) between this bounding box
    /// and another. Zero-area unions yield 0 rather than a division by zero.
    pub fn iou(&self, other: &BvrBox) -> f32 {
        let union = self.union(other);
        if union <= 0. {
            return 0.;
        }
        self.intersect(other) / union
    }

    /// Ordering by `score`, highest first. For sorting candidate lists
    /// before suppression or ranking.
    pub fn compare_score(box1: &BvrBox, box2: &BvrBox) -> Ordering {
        box2.score.total_cmp(&box1.score)
    }

    /// Sets the bounding box's coordinates and dimensions using `(cx, cy, w, h)`.
    ///
    /// # Arguments
    ///
    /// * `cx` - The x-coordinate of the horizontal center.
    /// * `cy` - The y-coordinate of the vertical center.
    /// * `w` - The width of the bounding box.
    /// * `h` - The height of the bounding box.
    ///
    /// # Returns
    ///
    /// A `BvrBox` instance with updated coordinates and dimensions.
    pub fn with_cxcy_wh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x = cx;
        self.y = cy;
        self.w = w;
        self.h = h;
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = class_id;
        self
    }

    pub fn with_cell_id(mut self, cell_id: usize) -> Self {
        self.cell_id = cell_id;
        self
    }
}
