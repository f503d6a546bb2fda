//! Color utilities: hex parsing, lightening, and the lightening ramps that
//! differentiate ordered items (process steps, milestones, pyramid levels)
//! without arbitrary palettes.

use super::error::{Result, VbaConversionError};

/// An opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Formats as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Moves each channel toward 255 by `amount` of its remaining distance,
    /// truncated, clamped to 255. `amount` 0.0 is the identity; 1.0 is white.
    pub fn lighten(self, amount: f64) -> Rgb {
        fn channel(c: u8, amount: f64) -> u8 {
            let lifted = f64::from(c) + (255.0 - f64::from(c)) * amount;
            lifted.floor().min(255.0).max(0.0) as u8
        }
        Rgb {
            r: channel(self.r, amount),
            g: channel(self.g, amount),
            b: channel(self.b, amount),
        }
    }
}

/// Parses a 6-hex-digit color string with an optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(VbaConversionError::InvalidColor(hex.to_string()));
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| VbaConversionError::InvalidColor(hex.to_string()))
    };
    Ok(Rgb {
        r: parse(0..2)?,
        g: parse(2..4)?,
        b: parse(4..6)?,
    })
}

/// Hex-string form of [`Rgb::lighten`].
pub fn lighten(hex: &str, amount: f64) -> Result<String> {
    Ok(hex_to_rgb(hex)?.lighten(amount).to_hex())
}

/// A descending lightening ramp: index 0 is the most lightened color
/// (`lighten(base, max_lighten)`), the last index is the unmodified base.
/// Used for process-step and timeline coloring, where intensity builds up
/// toward the final item. Safe for `n == 1`.
pub fn descending_ramp(base: Rgb, n: usize, max_lighten: f64) -> Vec<Rgb> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| base.lighten(max_lighten * (1.0 - i as f64 / denom)))
        .collect()
}

/// The mirrored ascending ramp: index 0 is the unmodified base, lightening
/// increases toward the last index. Used for pyramid shading (apex = base
/// color, foundation = lightest).
pub fn ascending_ramp(base: Rgb, n: usize, max_lighten: f64) -> Vec<Rgb> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| base.lighten(max_lighten * (i as f64 / denom)))
        .collect()
}

/// Cycle diagrams use the unmodified base color at every position.
pub fn cycle_colors(base: Rgb, n: usize) -> Vec<Rgb> {
    vec![base; n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let rgb = hex_to_rgb("#4285F4").unwrap();
        assert_eq!(rgb, Rgb { r: 0x42, g: 0x85, b: 0xF4 });
        assert_eq!(hex_to_rgb("4285f4").unwrap(), rgb);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#fff", "#12345", "#12345g", "not a color", "#1234567"] {
            assert!(matches!(
                hex_to_rgb(bad),
                Err(VbaConversionError::InvalidColor(_))
            ));
        }
    }

    #[test]
    fn lighten_endpoints() {
        assert_eq!(lighten("#4285f4", 0.0).unwrap(), "#4285f4");
        assert_eq!(lighten("#4285f4", 1.0).unwrap(), "#ffffff");
        assert_eq!(lighten("#000000", 1.0).unwrap(), "#ffffff");
    }

    #[test]
    fn lighten_moves_channels_toward_white() {
        // c' = floor(c + (255 - c) * amount)
        let rgb = hex_to_rgb("#102030").unwrap().lighten(0.5);
        assert_eq!(rgb, Rgb { r: 135, g: 143, b: 151 });
    }

    #[test]
    fn ramps_have_expected_length_and_endpoints() {
        let base = hex_to_rgb("#4285f4").unwrap();
        for n in 1..=6 {
            let down = descending_ramp(base, n, 0.5);
            let up = ascending_ramp(base, n, 0.6);
            assert_eq!(down.len(), n);
            assert_eq!(up.len(), n);
            assert_eq!(down[0], base.lighten(0.5));
            assert_eq!(up[0], base);
            // With a single entry the ramp collapses to its index-0 endpoint.
            if n > 1 {
                assert_eq!(*down.last().unwrap(), base);
                assert_eq!(*up.last().unwrap(), base.lighten(0.6));
            }
        }
    }

    #[test]
    fn single_entry_ramp_does_not_divide_by_zero() {
        let base = hex_to_rgb("#4285f4").unwrap();
        assert_eq!(descending_ramp(base, 1, 0.5), vec![base.lighten(0.5)]);
        assert_eq!(ascending_ramp(base, 1, 0.6), vec![base]);
    }

    #[test]
    fn cycle_colors_are_constant() {
        let base = hex_to_rgb("#4285f4").unwrap();
        assert_eq!(cycle_colors(base, 4), vec![base; 4]);
    }
}
