//! Text encodings used to turn strings into payload bytes and back.
//!
//! Every conversion is strict: characters that do not fit the target
//! encoding and byte sequences that are invalid under it are reported as
//! errors instead of being replaced.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Encoding applied to text payloads when none is given.
pub const DEFAULT_ENCODING: TextEncoding = TextEncoding::Utf8;

/// Character encodings supported for text payloads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Ascii,
    Latin1,
}

impl TextEncoding {
    /// Canonical label of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Ascii => "us-ascii",
            TextEncoding::Latin1 => "iso-8859-1",
        }
    }

    /// Encodes `text` into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] for the first character outside the
    /// encoding's repertoire.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            TextEncoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            TextEncoding::Ascii => self.encode_narrow(text, 0x7f),
            TextEncoding::Latin1 => self.encode_narrow(text, 0xff),
        }
    }

    /// Decodes `bytes` into a string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] with the byte offset of the first
    /// invalid sequence.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| CodecError::decode(self.name(), e.valid_up_to(), e.to_string())),
            TextEncoding::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes),
            TextEncoding::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes),
            TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(position) => Err(CodecError::decode(
                    self.name(),
                    position,
                    format!("byte {:#04x} is outside the ASCII range", bytes[position]),
                )),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    fn encode_narrow(self, text: &str, max: u32) -> Result<Vec<u8>> {
        text.chars()
            .enumerate()
            .map(|(position, ch)| match u8::try_from(ch as u32) {
                Ok(b) if u32::from(b) <= max => Ok(b),
                _ => Err(CodecError::Encode {
                    encoding: self.name(),
                    position,
                    ch,
                }),
            })
            .collect()
    }

    fn decode_utf16(self, bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
        if bytes.len() % 2 != 0 {
            return Err(CodecError::decode(
                self.name(),
                bytes.len() - 1,
                "odd number of bytes",
            ));
        }

        let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
        let mut text = String::with_capacity(bytes.len() / 2);
        let mut position = 0;
        for decoded in char::decode_utf16(units) {
            match decoded {
                Ok(ch) => {
                    position += ch.len_utf16() * 2;
                    text.push(ch);
                }
                Err(e) => {
                    return Err(CodecError::decode(
                        self.name(),
                        position,
                        format!("unpaired surrogate {:#06x}", e.unpaired_surrogate()),
                    ));
                }
            }
        }
        Ok(text)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = CodecError;

    fn from_str(label: &str) -> Result<Self> {
        let encoding = match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => TextEncoding::Utf8,
            "utf-16" | "utf16" | "utf-16le" | "utf16le" | "unicode" => TextEncoding::Utf16Le,
            "utf-16be" | "utf16be" | "unicodefffe" | "bigendianunicode" => TextEncoding::Utf16Be,
            "ascii" | "us-ascii" => TextEncoding::Ascii,
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => TextEncoding::Latin1,
            _ => return Err(CodecError::UnknownEncoding(label.to_string())),
        };
        Ok(encoding)
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = CodecError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl From<TextEncoding> for &'static str {
    fn from(encoding: TextEncoding) -> Self {
        encoding.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_roundtrip() {
        let text = "Hello World! 你好！";
        let bytes = TextEncoding::Utf8.encode(text).expect("Encoding should succeed");
        assert_eq!(bytes, text.as_bytes());
        let decoded = TextEncoding::Utf8.decode(&bytes).expect("Decoding should succeed");
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_utf16_byte_order() {
        let le = TextEncoding::Utf16Le.encode("A你").unwrap();
        assert_eq!(le, vec![0x41, 0x00, 0x60, 0x4f]);
        let be = TextEncoding::Utf16Be.encode("A你").unwrap();
        assert_eq!(be, vec![0x00, 0x41, 0x4f, 0x60]);
        assert_eq!(TextEncoding::Utf16Be.decode(&be).unwrap(), "A你");
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        let text = "x😀";
        let bytes = TextEncoding::Utf16Le.encode(text).unwrap();
        assert_eq!(bytes.len(), 6);
        assert_eq!(TextEncoding::Utf16Le.decode(&bytes).unwrap(), text);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = TextEncoding::Utf8.decode(&[b'o', b'k', 0xff]).unwrap_err();
        match err {
            CodecError::Decode { position, .. } => assert_eq!(position, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_utf16_odd_length_and_lone_surrogate() {
        assert!(TextEncoding::Utf16Le.decode(&[0x41, 0x00, 0x42]).is_err());

        let err = TextEncoding::Utf16Le
            .decode(&[0x41, 0x00, 0x00, 0xd8, 0x41, 0x00])
            .unwrap_err();
        match err {
            CodecError::Decode { position, .. } => assert_eq!(position, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_narrow_encodings() {
        assert_eq!(TextEncoding::Latin1.encode("café").unwrap(), b"caf\xe9");
        assert_eq!(TextEncoding::Latin1.decode(b"caf\xe9").unwrap(), "café");

        let err = TextEncoding::Ascii.encode("café").unwrap_err();
        match err {
            CodecError::Encode { position, ch, .. } => {
                assert_eq!(position, 3);
                assert_eq!(ch, 'é');
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(TextEncoding::Latin1.encode("你").is_err());
        assert!(TextEncoding::Ascii.decode(b"caf\xe9").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("unicode".parse::<TextEncoding>().unwrap(), TextEncoding::Utf16Le);
        assert_eq!(" ISO-8859-1 ".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert!("ebcdic".parse::<TextEncoding>().is_err());
        assert_eq!(TextEncoding::default(), DEFAULT_ENCODING);
        assert_eq!(TextEncoding::Ascii.to_string(), "us-ascii");
    }
}
