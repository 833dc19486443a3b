use std::fmt;

/// Straight-alpha sRGB color, one byte per channel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Validates an RGB triple given as floating point channels.
    ///
    /// The sequence must have exactly three elements and every channel must be
    /// an integer value in `0..=255`.
    pub fn from_channels(channels: &[f64]) -> Result<Self, ColorError> {
        if channels.len() != 3 {
            return Err(ColorError::WrongLength(channels.len()));
        }
        let mut out = [0u8; 3];
        for (index, &value) in channels.iter().enumerate() {
            if !value.is_finite() || value.fract() != 0.0 {
                return Err(ColorError::NotInteger { index, value });
            }
            if !(0.0..=255.0).contains(&value) {
                return Err(ColorError::OutOfRange { index, value: value as i64 });
            }
            out[index] = value as u8;
        }
        Ok(Self::rgb(out[0], out[1], out[2]))
    }

    /// Validates an RGB triple given as integer channels.
    pub fn from_int_channels(channels: &[i64]) -> Result<Self, ColorError> {
        if channels.len() != 3 {
            return Err(ColorError::WrongLength(channels.len()));
        }
        let mut out = [0u8; 3];
        for (index, &value) in channels.iter().enumerate() {
            out[index] = u8::try_from(value).map_err(|_| ColorError::OutOfRange { index, value })?;
        }
        Ok(Self::rgb(out[0], out[1], out[2]))
    }

    /// Parses `#rrggbb`, `rrggbb` or a comma separated `r,g,b` triple.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
            return Ok(Self::rgb(byte(0), byte(2), byte(4)));
        }

        let mut channels = Vec::with_capacity(3);
        for part in s.split(',') {
            let part = part.trim();
            let value: f64 = part
                .parse()
                .map_err(|_| ColorError::Malformed(s.to_string()))?;
            channels.push(value);
        }
        Self::from_channels(&channels)
    }

    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Packs the color as `0x00RRGGBB`, the layout expected by softbuffer.
    #[inline]
    pub fn to_xrgb(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Rejected color input.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The channel sequence did not have exactly three elements.
    WrongLength(usize),
    /// A channel was fractional, NaN or infinite.
    NotInteger { index: usize, value: f64 },
    /// A channel was outside `0..=255`.
    OutOfRange { index: usize, value: i64 },
    /// The string form could not be parsed at all.
    Malformed(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::WrongLength(n) => write!(f, "expected 3 color channels, got {n}"),
            ColorError::NotInteger { index, value } => {
                write!(f, "color channel {index} is not an integer: {value}")
            }
            ColorError::OutOfRange { index, value } => {
                write!(f, "color channel {index} out of range 0..=255: {value}")
            }
            ColorError::Malformed(s) => write!(f, "malformed color {s:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

// ── IntoColor ─────────────────────────────────────────────────────────────

/// Anything that can be validated into a [`Color`].
///
/// Widget builders accept `impl IntoColor` so that raw triples are checked at
/// construction time.
pub trait IntoColor {
    fn into_color(self) -> Result<Color, ColorError>;
}

impl IntoColor for Color {
    fn into_color(self) -> Result<Color, ColorError> {
        Ok(self)
    }
}

impl IntoColor for (u8, u8, u8) {
    fn into_color(self) -> Result<Color, ColorError> {
        Ok(Color::rgb(self.0, self.1, self.2))
    }
}

impl IntoColor for [u8; 3] {
    fn into_color(self) -> Result<Color, ColorError> {
        Ok(Color::rgb(self[0], self[1], self[2]))
    }
}

impl IntoColor for (i32, i32, i32) {
    fn into_color(self) -> Result<Color, ColorError> {
        Color::from_int_channels(&[self.0 as i64, self.1 as i64, self.2 as i64])
    }
}

impl IntoColor for [i32; 3] {
    fn into_color(self) -> Result<Color, ColorError> {
        Color::from_int_channels(&self.map(i64::from))
    }
}

impl IntoColor for &[i64] {
    fn into_color(self) -> Result<Color, ColorError> {
        Color::from_int_channels(self)
    }
}

impl IntoColor for &[f64] {
    fn into_color(self) -> Result<Color, ColorError> {
        Color::from_channels(self)
    }
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color, ColorError> {
        Color::parse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn every_valid_triple_is_accepted() {
        for r in (0..=255).step_by(17) {
            for g in 0..=255 {
                let b = 255 - g;
                let c = Color::from_int_channels(&[r, g, b]).unwrap();
                assert_eq!(c, Color::rgb(r as u8, g as u8, b as u8));
                assert!(Color::from_channels(&[r as f64, g as f64, b as f64]).is_ok());
            }
        }
    }

    #[test]
    fn out_of_range_channels_are_rejected() {
        for bad in [-1, 256, 1000, i64::MIN] {
            for index in 0..3 {
                let mut ch = [10, 20, 30];
                ch[index] = bad;
                assert_eq!(
                    Color::from_int_channels(&ch),
                    Err(ColorError::OutOfRange { index, value: bad })
                );
            }
        }
        assert!(matches!(
            Color::from_channels(&[0.0, 255.5 + 0.5, 0.0]),
            Err(ColorError::OutOfRange { index: 1, .. })
        ));
        assert!(Color::from_channels(&[-1.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn non_integer_channels_are_rejected() {
        for bad in [0.5, 254.999, f64::NAN, f64::INFINITY] {
            let err = Color::from_channels(&[bad, 0.0, 0.0]).unwrap_err();
            assert!(matches!(err, ColorError::NotInteger { index: 0, .. }), "{bad}");
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(Color::from_int_channels(&[]), Err(ColorError::WrongLength(0)));
        assert_eq!(Color::from_int_channels(&[1, 2]), Err(ColorError::WrongLength(2)));
        assert_eq!(Color::from_channels(&[1.0, 2.0, 3.0, 4.0]), Err(ColorError::WrongLength(4)));
    }

    // ── parsing / conversion ──────────────────────────────────────────────

    #[test]
    fn parse_hex_and_triples() {
        assert_eq!(Color::parse("#22b14c").unwrap(), Color::rgb(34, 177, 76));
        assert_eq!(Color::parse("2040ff").unwrap(), Color::rgb(32, 64, 255));
        assert_eq!(Color::parse(" 255, 255 ,255").unwrap(), Color::white());
        assert!(matches!(Color::parse("red"), Err(ColorError::Malformed(_))));
        assert!(matches!(Color::parse("1,2,300"), Err(ColorError::OutOfRange { index: 2, .. })));
    }

    #[test]
    fn into_color_from_literals() {
        assert_eq!((255i32, 255, 255).into_color().unwrap(), Color::white());
        assert_eq!([34i32, 177, 76].into_color().unwrap(), Color::rgb(34, 177, 76));
        assert!((0i32, -3, 0).into_color().is_err());
        assert!([0.0f64, 1.5, 2.0][..].into_color().is_err());
    }

    #[test]
    fn xrgb_packing() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_xrgb(), 0x0012_3456);
    }
}
