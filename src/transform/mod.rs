mod difference;
mod resize;

pub use difference::{apply, difference};
pub use resize::resize;
