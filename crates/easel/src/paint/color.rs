use crate::error::Error;

/// Straight-alpha RGBA color, 8 bits per channel.
///
/// Hex literals and user-facing color strings produce straight RGBA bytes,
/// so that is the stored form; any premultiplication is backend policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').ok_or_else(|| {
            Error::invalid("hex", format!("expected a leading '#', got {hex:?}"))
        })?;

        if !digits.is_ascii() {
            return Err(Error::invalid("hex", format!("bad hex digits in {hex:?}")));
        }

        let byte = |i: usize| -> Result<u8, Error> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::invalid("hex", format!("bad hex digits in {hex:?}")))
        };

        match digits.len() {
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            n => Err(Error::invalid(
                "hex",
                format!("expected 6 or 8 hex digits, got {n} in {hex:?}"),
            )),
        }
    }

    /// Channels as an RGBA byte array, matching bitmap pixel layout.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_six_digits() {
        assert_eq!(Color::from_hex("#FFFF00").unwrap(), Color::YELLOW);
    }

    #[test]
    fn hex_eight_digits_carries_alpha() {
        assert_eq!(Color::from_hex("#00000080").unwrap(), Color::rgba(0, 0, 0, 0x80));
    }

    #[test]
    fn hex_rejects_missing_hash_and_bad_length() {
        assert!(Color::from_hex("FFFF00").is_err());
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }
}
