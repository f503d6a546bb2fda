//! String-safety helpers for embedding user text and colors into VBA source.

use super::colors::{hex_to_rgb, Rgb};

/// Escapes a user-supplied string for embedding inside a VBA string literal:
/// double quotes are doubled and line breaks become the explicit
/// `" & vbCr & "` concatenation idiom. Applied to every text field
/// immediately before emission; unescaped quotes or newlines would produce a
/// syntactically broken macro.
pub fn escape_vba(text: &str) -> String {
    text.replace('"', "\"\"")
        .replace("\r\n", "\n")
        .replace(['\n', '\r'], "\" & vbCr & \"")
}

/// Formats an [`Rgb`] as the VBA `RGB(r, g, b)` call.
pub fn rgb_call(color: Rgb) -> String {
    format!("RGB({}, {}, {})", color.r, color.g, color.b)
}

/// Formats a hex color as a VBA `RGB(...)` call, falling back to black on
/// malformed input so a bad color never breaks the emitted script.
pub fn rgb_literal(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Ok(rgb) => rgb_call(rgb),
        Err(_) => "RGB(0, 0, 0)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses `escape_vba` the way the VBA runtime would evaluate the
    /// literal, for round-trip checking.
    fn unescape_vba(text: &str) -> String {
        text.replace("\" & vbCr & \"", "\n").replace("\"\"", "\"")
    }

    #[test]
    fn quotes_are_doubled_and_newlines_become_concatenation() {
        assert_eq!(escape_vba(r#"say "hi""#), r#"say ""hi"""#);
        assert_eq!(escape_vba("a\nb"), "a\" & vbCr & \"b");
        assert_eq!(escape_vba("a\r\nb"), "a\" & vbCr & \"b");
    }

    #[test]
    fn escaping_round_trips_through_literal_embedding() {
        let original = "line \"one\"\nline two";
        assert_eq!(unescape_vba(&escape_vba(original)), original);
    }

    #[test]
    fn bad_hex_falls_back_to_black() {
        assert_eq!(rgb_literal("#4285F4"), "RGB(66, 133, 244)");
        assert_eq!(rgb_literal("nonsense"), "RGB(0, 0, 0)");
    }
}
