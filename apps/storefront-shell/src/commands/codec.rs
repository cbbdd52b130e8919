//! # Codec Commands
//!
//! Commands behind the Base64 converter page.
//!
//! The page re-runs [`transcode`] on every keystroke and renders both panes;
//! the single-direction commands serve the copy buttons, which want the
//! error rather than a fallback message.

use storefront_core::codec::{self, CodecDisplay};
use storefront_core::CoreError;
use tracing::debug;

use crate::error::ApiError;

/// Reads the input both as text to encode and as Base64 to decode.
pub fn transcode(input: &str) -> CodecDisplay {
    let view = codec::transcode(input);
    debug!(
        input_len = input.len(),
        encode_ok = view.encoded.is_ok(),
        decode_ok = view.decoded.is_ok(),
        "transcode command"
    );
    view.to_display()
}

/// Encodes text as Base64.
pub fn encode_text(input: &str) -> Result<String, ApiError> {
    debug!(input_len = input.len(), "encode_text command");
    codec::encode(input).map_err(|e| CoreError::from(e).into())
}

/// Decodes Base64 back to text.
pub fn decode_text(input: &str) -> Result<String, ApiError> {
    debug!(input_len = input.len(), "decode_text command");
    codec::decode(input).map_err(|e| CoreError::from(e).into())
}

#[cfg(test)]
mod tests {
    use storefront_core::codec::{DECODE_FALLBACK, ENCODE_FALLBACK};

    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_transcode_renders_both_panes() {
        let display = transcode("SGkh");
        assert_eq!(display.encoded, "U0draA==");
        assert_eq!(display.decoded, "Hi!");
        assert!(display.encode_ok && display.decode_ok);
    }

    #[test]
    fn test_transcode_fallbacks() {
        let display = transcode("中");
        assert_eq!(display.encoded, ENCODE_FALLBACK);
        assert_eq!(display.decoded, DECODE_FALLBACK);
        assert!(!display.encode_ok && !display.decode_ok);
    }

    #[test]
    fn test_encode_text_error_code() {
        let err = encode_text("中").unwrap_err();
        assert_eq!(err.code, ErrorCode::EncodingError);
    }

    #[test]
    fn test_decode_text_error_code() {
        let err = decode_text("abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidBase64);
        assert_eq!(decode_text("YWJj").unwrap(), "abc");
    }
}
