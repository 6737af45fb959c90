use crate::raster::PixelBuffer;

/// How much of a difference image is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSummary {
    pub changed_pixels: u64,
    pub total_pixels: u64,
}

impl DiffSummary {
    /// Count pixels whose R, G or B difference is non-zero. Alpha is ignored.
    pub fn from_difference(diff: &PixelBuffer) -> Self {
        let changed = diff.pixels().iter().filter(|p| !p.rgb_is_zero()).count();

        DiffSummary {
            changed_pixels: changed as u64,
            total_pixels: diff.pixels().len() as u64,
        }
    }

    pub fn changed_ratio(&self) -> f64 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        self.changed_pixels as f64 / self.total_pixels as f64
    }
}
