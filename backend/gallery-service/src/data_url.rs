//! Data-URL handling for inline image payloads
//!
//! The ingestion endpoint transports image bytes inside JSON as a data URL
//! (`data:<mime>;base64,<payload>`). This module strips the prefix and
//! decodes the payload; a bare base64 string without a prefix is accepted
//! and assumed to be PNG.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

const DEFAULT_MIME: &str = "image/png";

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("Invalid base64 image payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// An inline image decoded from a data URL
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    /// File-extension hint derived from the MIME type, for storage keys
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

/// Decode a data-URL (or bare base64) image payload
pub fn parse(payload: &str) -> Result<DecodedImage, DataUrlError> {
    let (mime_type, encoded) = match payload.split_once(";base64,") {
        Some((prefix, rest)) => {
            let mime = prefix.strip_prefix("data:").unwrap_or(prefix);
            let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
            (mime.to_string(), rest)
        }
        None => (DEFAULT_MIME.to_string(), payload),
    };

    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(DecodedImage { mime_type, bytes })
}

/// Encode raw image bytes as a data URL
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_prefix_and_decodes() {
        let image = parse("data:image/png;base64,AAAA").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, vec![0u8, 0, 0]);
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let original: Vec<u8> = (0u8..=255).cycle().take(1024).collect();
        let encoded = encode("image/png", &original);
        let decoded = parse(&encoded).unwrap();
        assert_eq!(decoded.bytes, original);
        assert_eq!(decoded.mime_type, "image/png");
    }

    #[test]
    fn test_parse_accepts_bare_base64() {
        let image = parse("AAAA").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes.len(), 3);
    }

    #[test]
    fn test_parse_rejects_invalid_base64() {
        assert!(parse("data:image/png;base64,%%not-base64%%").is_err());
    }

    #[test]
    fn test_extension_follows_mime_type() {
        let jpeg = parse("data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(jpeg.extension(), "jpg");
        let png = parse("data:image/png;base64,AAAA").unwrap();
        assert_eq!(png.extension(), "png");
    }
}
