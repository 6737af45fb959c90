use bytemuck::{Pod, Zeroable};

/// One 8-bit straight-alpha RGBA pixel. Byte layout matches `ExtendedColorType::Rgba8`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Zeroable, Pod)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: u8::MAX }
    }

    /// Per-channel `(self - rhs) mod 256` on color channels. Alpha is always 255.
    #[inline]
    pub fn wrapping_sub_rgb(self, rhs: Rgba) -> Rgba {
        Rgba::opaque(
            self.r.wrapping_sub(rhs.r),
            self.g.wrapping_sub(rhs.g),
            self.b.wrapping_sub(rhs.b),
        )
    }

    /// Per-channel `(self + rhs) mod 256` on color channels. Alpha is always 255.
    #[inline]
    pub fn wrapping_add_rgb(self, rhs: Rgba) -> Rgba {
        Rgba::opaque(
            self.r.wrapping_add(rhs.r),
            self.g.wrapping_add(rhs.g),
            self.b.wrapping_add(rhs.b),
        )
    }

    pub fn rgb_is_zero(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        [px.r, px.g, px.b, px.a]
    }
}
