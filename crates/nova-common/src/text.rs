//! Legacy single-byte text decoding.
//!
//! Strings inside resource records are stored one byte per character in the
//! classic Mac OS Roman encoding. Two decodings are offered:
//!
//! - [`TextEncoding::Latin1`] maps every byte to the Unicode code point of the
//!   same value. This is lossy for bytes above 0x7F (a stored `0x8A` comes
//!   back as U+008A rather than `ä`) but reproduces the byte-for-byte output
//!   existing consumers were built against, so it is the default.
//! - [`TextEncoding::MacRoman`] runs the bytes through the Mac OS Roman table.

use encoding_rs::MACINTOSH;

/// How legacy text bytes become Unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEncoding {
    /// Each byte is its own code point.
    #[default]
    Latin1,
    /// Mac OS Roman.
    MacRoman,
}

impl TextEncoding {
    /// Decode legacy bytes to a string.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            TextEncoding::MacRoman => {
                let (text, _) = MACINTOSH.decode_without_bom_handling(bytes);
                text.into_owned()
            }
        }
    }

    /// Encode a string back to legacy bytes.
    ///
    /// Characters the encoding cannot represent become `?`.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            TextEncoding::MacRoman => text
                .chars()
                .map(|c| {
                    let mut buf = [0u8; 4];
                    let (bytes, _, unmappable) = MACINTOSH.encode(c.encode_utf8(&mut buf));
                    match (unmappable, bytes.first()) {
                        (false, Some(&b)) if bytes.len() == 1 => b,
                        _ => b'?',
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_is_byte_for_codepoint() {
        let bytes = [b'b', 0x9A, 0x9A, b'm'];
        let text = TextEncoding::Latin1.decode(&bytes);

        assert_eq!(text.chars().count(), 4);
        assert_eq!(text.chars().nth(1), Some('\u{9A}'));
        assert_eq!(TextEncoding::Latin1.encode(&text), bytes);
    }

    #[test]
    fn test_mac_roman_table() {
        let bytes = [b'b', 0x9A, 0x9A, b'm'];

        assert_eq!(TextEncoding::MacRoman.decode(&bytes), "bööm");
        assert_eq!(TextEncoding::MacRoman.encode("bööm"), bytes);
        assert_eq!(TextEncoding::MacRoman.decode(&[0x8A, 0x91, 0x95, 0x9F, 0xD8]), "äëïüÿ");
    }

    #[test]
    fn test_encode_unmappable() {
        assert_eq!(TextEncoding::Latin1.encode("a\u{263A}"), b"a?");
        assert_eq!(TextEncoding::MacRoman.encode("a\u{263A}"), b"a?");
    }
}
