use rand::Rng;

/// Reserved on-disk marker for an empty cell. Sits above the 24-bit color
/// range (0..=16_777_215) so it can never collide with a packed color.
pub const EMPTY_SENTINEL: u32 = 100_000_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack the three channels into the low 24 bits, red highest.
    pub fn pack(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Inverse of [`pack`](Self::pack) over the low 24 bits.
    pub fn unpack(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }
}

/// One cell of the grid or palette: either a solid color or nothing.
/// The numeric sentinel only exists at the file-format boundary; in memory
/// emptiness is this variant, so it can never be mistaken for a color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CellColor {
    #[default]
    Empty,
    Solid(Rgb),
}

impl CellColor {
    pub fn is_empty(self) -> bool {
        self == CellColor::Empty
    }

    /// Numeric form used by the save files.
    pub fn to_packed(self) -> u32 {
        match self {
            CellColor::Empty => EMPTY_SENTINEL,
            CellColor::Solid(rgb) => rgb.pack(),
        }
    }

    /// Inverse of [`to_packed`](Self::to_packed). Values that are neither the
    /// sentinel nor a 24-bit color are a format violation and yield `None`.
    pub fn from_packed(value: u32) -> Option<Self> {
        if value == EMPTY_SENTINEL {
            Some(CellColor::Empty)
        } else if value <= 0x00FF_FFFF {
            Some(CellColor::Solid(Rgb::unpack(value)))
        } else {
            None
        }
    }
}

/// Perturb a color by one random offset drawn uniformly from
/// [-variance, +variance], applied to all three channels and clamped to the
/// valid channel range. Variance zero returns the input untouched.
pub fn jitter<R: Rng>(rng: &mut R, color: Rgb, variance: i32) -> Rgb {
    if variance <= 0 {
        return color;
    }
    let offset = rng.gen_range(-variance..=variance);
    let shift = |channel: u8| (i32::from(channel) + offset).clamp(0, 255) as u8;
    Rgb::new(shift(color.r), shift(color.g), shift(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pack_unpack_roundtrip() {
        let color = Rgb::new(12, 200, 255);
        assert_eq!(Rgb::unpack(color.pack()), color);
        assert_eq!(Rgb::new(255, 255, 255).pack(), 0x00FF_FFFF);
        assert_eq!(Rgb::new(0, 0, 0).pack(), 0);
    }

    #[test]
    fn sentinel_outside_color_range() {
        assert!(EMPTY_SENTINEL > 0x00FF_FFFF);
        assert_eq!(CellColor::Empty.to_packed(), EMPTY_SENTINEL);
        assert_eq!(CellColor::from_packed(EMPTY_SENTINEL), Some(CellColor::Empty));
    }

    #[test]
    fn from_packed_rejects_out_of_range() {
        assert_eq!(CellColor::from_packed(0x0100_0000), None);
        assert_eq!(CellColor::from_packed(u32::MAX), None);
        assert_eq!(
            CellColor::from_packed(0x00FF_FFFF),
            Some(CellColor::Solid(Rgb::new(255, 255, 255)))
        );
    }

    #[test]
    fn jitter_zero_variance_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let color = Rgb::new(10, 128, 250);
        assert_eq!(jitter(&mut rng, color, 0), color);
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let color = Rgb::new(3, 128, 252);
        for _ in 0..500 {
            let out = jitter(&mut rng, color, 20);
            assert!((i32::from(out.r) - i32::from(color.r)).abs() <= 20);
            assert!((i32::from(out.g) - i32::from(color.g)).abs() <= 20);
            assert!((i32::from(out.b) - i32::from(color.b)).abs() <= 20);
        }
    }

    #[test]
    fn jitter_applies_one_offset_to_all_channels() {
        // Away from the clamp edges every channel moves by the same amount.
        let mut rng = StdRng::seed_from_u64(99);
        let color = Rgb::new(100, 120, 140);
        for _ in 0..100 {
            let out = jitter(&mut rng, color, 30);
            let dr = i32::from(out.r) - i32::from(color.r);
            let dg = i32::from(out.g) - i32::from(color.g);
            let db = i32::from(out.b) - i32::from(color.b);
            assert_eq!(dr, dg);
            assert_eq!(dg, db);
        }
    }
}
