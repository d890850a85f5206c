// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Byte buffer rendering

use base64::{engine::general_purpose, Engine};

/// Render raw bytes as standard base64
///
/// Standard alphabet (`+` and `/`), `=` padding to a multiple of four
/// characters, no line wrapping.
///
/// # Examples
///
/// ```
/// use coinfmt::format_bytes;
///
/// assert_eq!(format_bytes(b"foo"), "Zm9v");
/// assert_eq!(format_bytes(b"fo"), "Zm8=");
/// assert_eq!(format_bytes(&[]), "");
/// ```
pub fn format_bytes(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_by_length() {
        assert_eq!(format_bytes(b""), "");
        assert_eq!(format_bytes(b"f"), "Zg==");
        assert_eq!(format_bytes(b"fo"), "Zm8=");
        assert_eq!(format_bytes(b"foo"), "Zm9v");
        assert_eq!(format_bytes(b"foob"), "Zm9vYg==");
        assert_eq!(format_bytes(b"fooba"), "Zm9vYmE=");
        assert_eq!(format_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_standard_alphabet() {
        assert_eq!(format_bytes(&[0xfb, 0xff]), "+/8=");
        assert_eq!(format_bytes(&[0x00, 0x00, 0x00]), "AAAA");
    }

    #[test]
    fn test_no_line_wrapping() {
        let data = vec![0xabu8; 120];
        let encoded = format_bytes(&data);
        assert_eq!(encoded.len(), 160);
        assert!(!encoded.contains('\n'));
    }
}
