//! # Text Codec
//!
//! Base64 encode/decode for text typed into the converter page.
//!
//! ## Character ⇄ Byte Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  encode:  "Hi!"  ──chars as bytes──►  48 69 21  ──base64──►  "SGkh"    │
//! │  decode:  "SGkh" ──base64──►  48 69 21  ──bytes as Latin-1──►  "Hi!"   │
//! │                                                                         │
//! │  One character is exactly one byte. There is no UTF-8 expansion:      │
//! │  "é" (U+00E9) encodes as the single byte E9, and "中" is rejected.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decode Validation
//! Input is checked before the engine sees it, so every failure is one of
//! two kinds:
//! - a symbol outside the alphabet, or misplaced `=` → `InvalidAlphabet`
//! - a length that is not a multiple of 4 → `InvalidLength`
//!
//! Trailing bits in the last symbol are ignored (`"QR=="` decodes like
//! `"QQ=="`), matching what browsers accept.
//!
//! ## Usage
//! ```rust
//! use storefront_core::codec::{decode, encode};
//!
//! let encoded = encode("hello").unwrap();
//! assert_eq!(encoded, "aGVsbG8=");
//! assert_eq!(decode(&encoded).unwrap(), "hello");
//! ```

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine as _};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{DecodingError, EncodingError};

/// Padding symbol.
const PAD: char = '=';

/// At most two `=` may close a 4-symbol group.
const MAX_PADDING: usize = 2;

/// Shown in place of the encoded view when the input can't be encoded.
pub const ENCODE_FALLBACK: &str = "Invalid input for encoding";

/// Shown in place of the decoded view when the input isn't Base64.
pub const DECODE_FALLBACK: &str = "Invalid base64 input";

/// Standard alphabet, padded output, canonical padding required on decode.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

// =============================================================================
// Encode
// =============================================================================

/// Encodes text as standard, padded Base64.
///
/// ## Errors
/// `EncodingError::OutOfRange` for the first character above U+00FF.
///
/// ## Example
/// ```rust
/// use storefront_core::codec::encode;
/// use storefront_core::EncodingError;
///
/// assert_eq!(encode("foob").unwrap(), "Zm9vYg==");
/// assert_eq!(encode("").unwrap(), "");
/// assert!(matches!(encode("中"), Err(EncodingError::OutOfRange { .. })));
/// ```
pub fn encode(plain: &str) -> Result<String, EncodingError> {
    let bytes = latin1_bytes(plain)?;
    Ok(encode_bytes(&bytes))
}

/// Encodes raw bytes as standard, padded Base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}

/// Maps each character to its code point as a byte.
fn latin1_bytes(plain: &str) -> Result<Vec<u8>, EncodingError> {
    plain
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character).map_err(|_| EncodingError::OutOfRange {
                character,
                position,
            })
        })
        .collect()
}

// =============================================================================
// Decode
// =============================================================================

/// Decodes standard, padded Base64 back to text, one character per byte.
///
/// ## Errors
/// - `DecodingError::InvalidAlphabet` for the first bad symbol
/// - `DecodingError::InvalidLength` when the length is not a multiple of 4
///
/// ## Example
/// ```rust
/// use storefront_core::codec::decode;
/// use storefront_core::DecodingError;
///
/// assert_eq!(decode("Zm9vYmFy").unwrap(), "foobar");
/// assert_eq!(decode("6Q==").unwrap(), "é");
/// assert_eq!(
///     decode("Zm9v!"),
///     Err(DecodingError::InvalidAlphabet { character: '!', position: 4 })
/// );
/// assert_eq!(decode("Zm9vY"), Err(DecodingError::InvalidLength { length: 5 }));
/// ```
pub fn decode(encoded: &str) -> Result<String, DecodingError> {
    let bytes = decode_bytes(encoded)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Decodes standard, padded Base64 to raw bytes.
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, DecodingError> {
    validate(encoded)?;
    ENGINE
        .decode(encoded)
        .map_err(|err| from_engine_error(encoded, err))
}

/// Checks alphabet, padding placement and length, in that order.
fn validate(encoded: &str) -> Result<(), DecodingError> {
    let padding = encoded.chars().rev().take_while(|&c| c == PAD).count();
    // `=` is one byte, so this slice ends on a char boundary.
    let body = &encoded[..encoded.len() - padding];

    if let Some((position, character)) = body
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_base64_symbol(c))
    {
        return Err(DecodingError::InvalidAlphabet {
            character,
            position,
        });
    }

    // Body is ASCII from here on, so byte length == char count.
    if padding > MAX_PADDING {
        return Err(DecodingError::InvalidAlphabet {
            character: PAD,
            position: body.len(),
        });
    }

    if encoded.len() % 4 != 0 {
        return Err(DecodingError::InvalidLength {
            length: encoded.len(),
        });
    }

    Ok(())
}

#[inline]
fn is_base64_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

/// Input has already passed `validate`, so none of these arms are expected
/// to fire; they keep the mapping total.
fn from_engine_error(encoded: &str, err: DecodeError) -> DecodingError {
    match err {
        DecodeError::InvalidLength(length) => DecodingError::InvalidLength { length },
        DecodeError::InvalidByte(position, byte) | DecodeError::InvalidLastSymbol(position, byte) => {
            DecodingError::InvalidAlphabet {
                character: char::from(byte),
                position,
            }
        }
        DecodeError::InvalidPadding => DecodingError::InvalidAlphabet {
            character: PAD,
            position: encoded
                .chars()
                .position(|c| c == PAD)
                .unwrap_or_else(|| encoded.chars().count()),
        },
    }
}

// =============================================================================
// Side-by-side View
// =============================================================================

/// Both readings of one input: as text to encode, and as Base64 to decode.
///
/// The converter page re-derives this on every keystroke and shows both
/// panes; whichever side fails shows its fallback message instead.
///
/// ## Example
/// ```rust
/// use storefront_core::codec::{transcode, DECODE_FALLBACK};
///
/// let view = transcode("hello");
/// assert_eq!(view.encoded_display(), "aGVsbG8=");
/// assert_eq!(view.decoded_display(), DECODE_FALLBACK); // 5 chars
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecView {
    pub encoded: Result<String, EncodingError>,
    pub decoded: Result<String, DecodingError>,
}

impl CodecView {
    /// Encoded text, or `ENCODE_FALLBACK`.
    pub fn encoded_display(&self) -> &str {
        self.encoded.as_deref().unwrap_or(ENCODE_FALLBACK)
    }

    /// Decoded text, or `DECODE_FALLBACK`.
    pub fn decoded_display(&self) -> &str {
        self.decoded.as_deref().unwrap_or(DECODE_FALLBACK)
    }

    /// Flattens to the two strings the UI renders.
    pub fn to_display(&self) -> CodecDisplay {
        CodecDisplay {
            encoded: self.encoded_display().to_string(),
            decoded: self.decoded_display().to_string(),
            encode_ok: self.encoded.is_ok(),
            decode_ok: self.decoded.is_ok(),
        }
    }
}

/// Serializable form of [`CodecView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CodecDisplay {
    pub encoded: String,
    pub decoded: String,
    pub encode_ok: bool,
    pub decode_ok: bool,
}

/// Reads `input` both ways at once.
pub fn transcode(input: &str) -> CodecView {
    CodecView {
        encoded: encode(input),
        decoded: decode(input),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let vectors = [
            ("", ""),
            ("f", "Zg=="),
            ("fo", "Zm8="),
            ("foo", "Zm9v"),
            ("foob", "Zm9vYg=="),
            ("fooba", "Zm9vYmE="),
            ("foobar", "Zm9vYmFy"),
        ];
        for (plain, encoded) in vectors {
            assert_eq!(encode(plain).unwrap(), encoded, "encode {plain:?}");
            assert_eq!(decode(encoded).unwrap(), plain, "decode {encoded:?}");
        }
    }

    #[test]
    fn test_round_trip_full_latin1_range() {
        let all: String = (0u8..=255).map(char::from).collect();
        let encoded = encode(&all).unwrap();
        assert_eq!(decode(&encoded).unwrap(), all);
    }

    #[test]
    fn test_latin1_character_is_one_byte() {
        // U+00E9 becomes the single byte E9, not the UTF-8 pair C3 A9
        assert_eq!(encode("é").unwrap(), "6Q==");
        assert_eq!(encode_bytes(&[0xE9]), "6Q==");
    }

    #[test]
    fn test_encode_rejects_above_latin1() {
        assert_eq!(
            encode("中"),
            Err(EncodingError::OutOfRange {
                character: '中',
                position: 0
            })
        );
        assert_eq!(
            encode("ab€"),
            Err(EncodingError::OutOfRange {
                character: '€',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_rejects_bad_symbols() {
        assert_eq!(
            decode("Zm9v YmFy"),
            Err(DecodingError::InvalidAlphabet {
                character: ' ',
                position: 4
            })
        );
        assert_eq!(
            decode("Zm-v"),
            Err(DecodingError::InvalidAlphabet {
                character: '-',
                position: 2
            })
        );
        assert_eq!(
            decode("中文AA"),
            Err(DecodingError::InvalidAlphabet {
                character: '中',
                position: 0
            })
        );
    }

    #[test]
    fn test_decode_rejects_misplaced_padding() {
        // interior `=`
        assert_eq!(
            decode("Zg==Zm8="),
            Err(DecodingError::InvalidAlphabet {
                character: '=',
                position: 2
            })
        );
        // three pad symbols
        assert_eq!(
            decode("Z==="),
            Err(DecodingError::InvalidAlphabet {
                character: '=',
                position: 1
            })
        );
        assert_eq!(
            decode("===="),
            Err(DecodingError::InvalidAlphabet {
                character: '=',
                position: 0
            })
        );
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert_eq!(decode("Zg="), Err(DecodingError::InvalidLength { length: 3 }));
        assert_eq!(decode("Zg"), Err(DecodingError::InvalidLength { length: 2 }));
        assert_eq!(decode("Z"), Err(DecodingError::InvalidLength { length: 1 }));
    }

    #[test]
    fn test_decode_alphabet_checked_before_length() {
        assert!(matches!(
            decode("ab!"),
            Err(DecodingError::InvalidAlphabet { .. })
        ));
    }

    #[test]
    fn test_decode_errors_are_repeatable() {
        for _ in 0..3 {
            assert_eq!(decode("hello"), Err(DecodingError::InvalidLength { length: 5 }));
        }
    }

    #[test]
    fn test_decode_ignores_trailing_bits() {
        assert_eq!(decode("QR==").unwrap(), "A");
        assert_eq!(decode("QQ==").unwrap(), "A");
    }

    #[test]
    fn test_engine_padding_error_points_at_first_pad() {
        assert_eq!(
            from_engine_error("QUJD=A==", DecodeError::InvalidPadding),
            DecodingError::InvalidAlphabet {
                character: '=',
                position: 4
            }
        );
        assert_eq!(
            from_engine_error("QUJD", DecodeError::InvalidPadding),
            DecodingError::InvalidAlphabet {
                character: '=',
                position: 4
            }
        );
    }

    #[test]
    fn test_decode_maps_bytes_to_latin1() {
        assert_eq!(decode("/w==").unwrap(), "\u{ff}");
        assert_eq!(decode_bytes("AAEC").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_transcode_both_sides() {
        let view = transcode("Zm9v");
        assert_eq!(view.encoded_display(), "Wm05dg==");
        assert_eq!(view.decoded_display(), "foo");

        let view = transcode("中");
        assert_eq!(view.encoded_display(), ENCODE_FALLBACK);
        assert_eq!(view.decoded_display(), DECODE_FALLBACK);
    }

    #[test]
    fn test_codec_display_shape() {
        let display = transcode("hi").to_display();
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["encoded"], "aGk=");
        assert_eq!(json["decoded"], DECODE_FALLBACK);
        assert_eq!(json["encodeOk"], true);
        assert_eq!(json["decodeOk"], false);
    }
}
