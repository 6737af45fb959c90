use clap::Parser;
use std::path::PathBuf;

const ABOUT: &str = "Resize the base image onto the target's canvas, write the \
wraparound RGB difference between them, and write the target rebuilt from that \
difference.";

/// Input and output locations for one comparison run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = ABOUT, long_about = None)]
pub struct DiffConfig {
    /// The smaller image, upsampled to the target's dimensions.
    #[arg(long, default_value = DEFAULT_BASE)]
    pub base: PathBuf,

    /// The image the difference is taken against.
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// Where the difference image is written.
    #[arg(long, default_value = DEFAULT_MASK_OUTPUT)]
    pub mask_output: PathBuf,

    /// Where the rebuilt target image is written.
    #[arg(long, default_value = DEFAULT_APPLIED_OUTPUT)]
    pub applied_output: PathBuf,
}

pub const DEFAULT_BASE: &str = "githubsmall.png";
pub const DEFAULT_TARGET: &str = "githubfull.png";
pub const DEFAULT_MASK_OUTPUT: &str = "diffmask.png";
pub const DEFAULT_APPLIED_OUTPUT: &str = "diffapplied.png";

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            base: DEFAULT_BASE.into(),
            target: DEFAULT_TARGET.into(),
            mask_output: DEFAULT_MASK_OUTPUT.into(),
            applied_output: DEFAULT_APPLIED_OUTPUT.into(),
        }
    }
}
