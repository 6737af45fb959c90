mod file;
pub mod png;
mod stage;

pub use file::{load, save};
pub use stage::{DecoderStage, EncoderStage};
