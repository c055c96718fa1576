//! `#rgb` and `#rrggbb` hex strings.

/// Parses a hex color into its three channels. Digits are case-insensitive and the leading `#`
/// is required.
pub fn parse(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut rgb = [0; 3];
            for (channel, digit) in rgb.iter_mut().zip(digits.chars()) {
                let value = digit.to_digit(16)? as u8;
                *channel = value * 16 + value;
            }
            Some(rgb)
        }
        6 => {
            let mut rgb = [0; 3];
            for (i, channel) in rgb.iter_mut().enumerate() {
                *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(rgb)
        }
        _ => None,
    }
}

/// Formats three channels as lowercase `#rrggbb`.
pub fn format([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form() {
        assert_eq!(parse("#ff8000"), Some([255, 128, 0]));
        assert_eq!(parse("#FF8000"), Some([255, 128, 0]));
        assert_eq!(parse("#0a0B0c"), Some([10, 11, 12]));
    }

    #[test]
    fn short_form_doubles_digits() {
        assert_eq!(parse("#abc"), Some([0xaa, 0xbb, 0xcc]));
        assert_eq!(parse("#F00"), Some([255, 0, 0]));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("#"), None);
        assert_eq!(parse("ff0000"), None);
        assert_eq!(parse("#ff00"), None);
        assert_eq!(parse("#ff00000"), None);
        assert_eq!(parse("#gg0000"), None);
        assert_eq!(parse("#+f0000"), None);
        assert_eq!(parse("#ä0000"), None);
    }

    #[test]
    fn formats_zero_padded_lowercase() {
        assert_eq!(format([255, 128, 0]), "#ff8000");
        assert_eq!(format([0, 10, 1]), "#000a01");
    }
}
