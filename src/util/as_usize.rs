use cfg_if::cfg_if;

/// Lossless widening of pixel coordinates and dimensions into `usize`.
pub trait AsUsize: Copy {
    /// Convert number into usize, panic if out of range
    fn as_usize(self) -> usize;
}

impl AsUsize for u32 {
    #[inline(always)]
    fn as_usize(self) -> usize {
        cfg_if! {
            if #[cfg(target_pointer_width = "16")] {
                self.try_into()
                    .unwrap_or_else(|_| panic!("unable to convert {self}u32 into usize"))
            } else {
                self as usize
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AsUsize;

    #[test]
    fn widens_u32() {
        assert_eq!(0u32.as_usize(), 0);
        assert_eq!(u32::MAX.as_usize(), u32::MAX as usize);
    }
}
