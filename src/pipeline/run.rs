use crate::codec::{load, save};
use crate::pipeline::{DiffConfig, DiffSummary};
use crate::raster::PixelBuffer;
use crate::transform::{apply, difference, resize};
use anyhow::{Context, Result};
use std::time::Instant;

/// Buffers produced by one run, after both have been written to disk.
#[derive(Debug)]
pub struct PipelineOutput {
    pub diff: PixelBuffer,
    pub applied: PixelBuffer,
    pub summary: DiffSummary,
}

/// Load both images, fit the base onto the target's canvas, then write the
/// difference and the target rebuilt from it. Stops at the first error.
pub fn run(cfg: &DiffConfig) -> Result<PipelineOutput> {
    let started = Instant::now();

    let base = load(&cfg.base).context("loading base image")?;
    let target = load(&cfg.target).context("loading target image")?;
    log::debug!("Decoded inputs in {:?}", started.elapsed());

    let t = Instant::now();
    let resized = resize(&base, target.width(), target.height())
        .context("base image must not be larger than the target")?;
    log::debug!("Resized base in {:?}", t.elapsed());

    let t = Instant::now();
    let diff = difference(&target, &resized).context("computing difference")?;
    let applied = apply(&resized, &diff).context("applying difference")?;
    log::debug!("Computed difference and reconstruction in {:?}", t.elapsed());

    let summary = DiffSummary::from_difference(&diff);
    log::info!(
        "{} of {} pixels differ ({:.2}%)",
        summary.changed_pixels,
        summary.total_pixels,
        summary.changed_ratio() * 100.0
    );

    save(&cfg.mask_output, &diff).context("writing difference image")?;
    save(&cfg.applied_output, &applied).context("writing reconstructed image")?;
    log::debug!("Pipeline finished in {:?}", started.elapsed());

    Ok(PipelineOutput {
        diff,
        applied,
        summary,
    })
}
