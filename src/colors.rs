//! Packed 32-bit RGBA colors.
//!
//! A packed color is a `u32` whose bytes in memory read R, G, B, A. Since the
//! byte order of a `u32` in memory depends on the host, the bit layout of the
//! packed value does too:
//!
//! ```text
//! little-endian: 0xAABBGGRR
//! big-endian:    0xRRGGBBAA
//! ```
//!
//! The layout is picked once from a [`ByteOrder`] and carried by a
//! [`ColorCodec`] value. Alpha is always 255.

/// Host byte order, as it affects how a `u32` is laid out in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Probes the host: store 1 in a `u32` and see which byte holds it.
    pub fn detect() -> Self {
        if 1u32.to_ne_bytes()[0] == 1 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "little"),
            ByteOrder::BigEndian => write!(f, "big"),
        }
    }
}

/// Packs and unpacks colors for one byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCodec {
    order: ByteOrder,
}

impl ColorCodec {
    pub const fn new(order: ByteOrder) -> Self {
        Self { order }
    }

    /// Codec for the byte order of the running host.
    pub fn native() -> Self {
        let order = ByteOrder::detect();
        log::debug!("Endianness: {order}");
        Self::new(order)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Packs three channels with full alpha.
    ///
    /// Channels are expected in `[0, 255]` but are not checked: wider values
    /// spill into the neighbouring channel bits (or are shifted out) exactly
    /// as the plain shift-and-or produces.
    #[inline]
    pub fn pack(&self, r: u32, g: u32, b: u32) -> u32 {
        match self.order {
            ByteOrder::BigEndian => (r << 24) | (g << 16) | (b << 8) | 0xFF,
            ByteOrder::LittleEndian => (0xFF << 24) | (b << 16) | (g << 8) | r,
        }
    }

    #[inline]
    pub fn pack_rgb(&self, [r, g, b]: [u8; 3]) -> u32 {
        self.pack(r as u32, g as u32, b as u32)
    }

    /// A grey with all three channels at `level`.
    #[inline]
    pub fn grey(&self, level: u32) -> u32 {
        self.pack(level, level, level)
    }

    /// Inverse of [`ColorCodec::pack`] for in-range channels.
    #[inline]
    pub fn unpack(&self, color: u32) -> (u8, u8, u8) {
        match self.order {
            ByteOrder::BigEndian => (
                (color >> 24) as u8,
                (color >> 16) as u8,
                (color >> 8) as u8,
            ),
            ByteOrder::LittleEndian => (color as u8, (color >> 8) as u8, (color >> 16) as u8),
        }
    }
}

impl Default for ColorCodec {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LITTLE: ColorCodec = ColorCodec::new(ByteOrder::LittleEndian);
    const BIG: ColorCodec = ColorCodec::new(ByteOrder::BigEndian);

    #[test]
    fn detect_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };
        assert_eq!(ByteOrder::detect(), expected);
    }

    #[test]
    fn native_bytes_read_rgba() {
        let codec = ColorCodec::native();
        let packed = codec.pack(0x12, 0x34, 0x56);
        assert_eq!(packed.to_ne_bytes(), [0x12, 0x34, 0x56, 0xFF]);
    }

    #[test]
    fn little_endian_layout() {
        assert_eq!(LITTLE.pack(0xFF, 0, 0), 0xFF0000FF);
        assert_eq!(LITTLE.pack(0, 0xFF, 0), 0xFF00FF00);
        assert_eq!(LITTLE.pack(0, 0, 0xFF), 0xFFFF0000);
        assert_eq!(LITTLE.pack(0, 0, 0), 0xFF000000);
    }

    #[test]
    fn big_endian_layout() {
        assert_eq!(BIG.pack(0xFF, 0, 0), 0xFF0000FF);
        assert_eq!(BIG.pack(0, 0xFF, 0), 0x00FF00FF);
        assert_eq!(BIG.pack(0, 0, 0xFF), 0x0000FFFF);
        assert_eq!(BIG.pack(0, 0, 0), 0x000000FF);
    }

    #[test]
    fn out_of_range_channel_spills_into_neighbour() {
        // 0x100 red lands in the green bits on little-endian.
        assert_eq!(LITTLE.pack(0x100, 0, 0), 0xFF000100);
        assert_eq!(LITTLE.unpack(LITTLE.pack(0x100, 0, 0)), (0, 1, 0));
    }

    #[test]
    fn grey_fills_all_channels() {
        assert_eq!(LITTLE.unpack(LITTLE.grey(200)), (200, 200, 200));
        assert_eq!(BIG.unpack(BIG.grey(7)), (7, 7, 7));
        assert_eq!(LITTLE.pack_rgb([1, 2, 3]), LITTLE.pack(1, 2, 3));
    }

    proptest! {
        #[test]
        fn unpack_inverts_pack(r in 0u32..=255, g in 0u32..=255, b in 0u32..=255) {
            let expected = (r as u8, g as u8, b as u8);
            prop_assert_eq!(LITTLE.unpack(LITTLE.pack(r, g, b)), expected);
            prop_assert_eq!(BIG.unpack(BIG.pack(r, g, b)), expected);
        }
    }
}
