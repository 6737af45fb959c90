mod as_usize;

pub use as_usize::AsUsize;
