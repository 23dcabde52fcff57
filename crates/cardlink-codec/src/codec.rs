//! Encode and decode between payloads and URL-safe share tokens.

use std::io::{Read, Write};

use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use cardlink_entity::ShareableCardPayload;

use crate::error::ShareLinkError;

/// Decompressed payloads larger than this are rejected as malformed.
const MAX_DECODED_BYTES: u64 = 1024 * 1024;

/// Decoder that accepts tokens with or without base64 padding. Encoding
/// always strips padding; padded tokens still appear in the wild when a
/// link has been re-encoded by hand.
const TOKEN_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a payload into a URL-safe share token.
///
/// The payload is serialized to JSON, gzip-compressed, and encoded with
/// the URL-safe base64 alphabet without padding. The resulting token
/// never contains `+`, `/`, or `=`.
pub fn encode(payload: &ShareableCardPayload) -> Result<String, ShareLinkError> {
    let json = serde_json::to_vec(payload)
        .map_err(|e| ShareLinkError::EncodingFailure(format!("serialization: {e}")))?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&json)
        .map_err(|e| ShareLinkError::EncodingFailure(format!("compression: {e}")))?;
    let compressed = encoder
        .finish()
        .map_err(|e| ShareLinkError::EncodingFailure(format!("compression: {e}")))?;

    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Decode a share token back into a payload.
///
/// Fails with [`ShareLinkError::MalformedShareLink`] on invalid base64, a
/// corrupt or truncated gzip stream, or JSON that does not match the
/// payload structure. The transform is stateless; decoding the same token
/// twice yields the same payload.
pub fn decode(token: &str) -> Result<ShareableCardPayload, ShareLinkError> {
    let compressed = TOKEN_DECODER
        .decode(token.trim())
        .map_err(|e| ShareLinkError::MalformedShareLink(format!("base64: {e}")))?;

    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .take(MAX_DECODED_BYTES + 1)
        .read_to_end(&mut json)
        .map_err(|e| ShareLinkError::MalformedShareLink(format!("decompression: {e}")))?;
    if json.len() as u64 > MAX_DECODED_BYTES {
        return Err(ShareLinkError::MalformedShareLink(
            "decompressed payload exceeds size limit".to_string(),
        ));
    }

    serde_json::from_slice(&json)
        .map_err(|e| ShareLinkError::MalformedShareLink(format!("payload structure: {e}")))
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use cardlink_entity::{CardData, ContactEntry, ShareableCardPayload, ThemePalette};

    use super::*;

    fn jane_doe() -> ShareableCardPayload {
        ShareableCardPayload {
            card_data: CardData {
                name: "Jane Doe".to_string(),
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                bio: "Builds things.".to_string(),
                contact_info: vec![ContactEntry {
                    contact_type: "email".to_string(),
                    value: "jane@acme.com".to_string(),
                }],
                social_links: vec![],
                career_history: vec![],
            },
            theme: ThemePalette {
                background: "#FFFFFF".to_string(),
                text: "#000000".to_string(),
                primary: "#111111".to_string(),
                accent: "#EEEEEE".to_string(),
            },
        }
    }

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).expect("write");
        encoder.finish().expect("finish")
    }

    #[test]
    fn test_round_trip_is_exact() {
        let payload = jane_doe();
        let token = encode(&payload).expect("encodes");
        let decoded = decode(&token).expect("decodes");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode(&jane_doe()).expect("encodes");
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_decode_is_stateless() {
        let token = encode(&jane_doe()).expect("encodes");
        let first = decode(&token).expect("decodes");
        let second = decode(&token).expect("decodes");
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_accepts_padded_token() {
        let token = encode(&jane_doe()).expect("encodes");
        let padding = (4 - token.len() % 4) % 4;
        let padded = format!("{}{}", token, "=".repeat(padding));
        let decoded = decode(&padded).expect("decodes padded token");
        assert_eq!(decoded, jane_doe());
    }

    #[test]
    fn test_invalid_base64_character_is_malformed() {
        // Scenario: the 5th character is replaced with a symbol outside
        // the URL-safe alphabet.
        let mut token = encode(&jane_doe()).expect("encodes");
        token.replace_range(4..5, "!");
        let err = decode(&token).expect_err("must fail");
        assert!(matches!(err, ShareLinkError::MalformedShareLink(_)));
    }

    #[test]
    fn test_corrupted_middle_byte_is_malformed() {
        let token = encode(&jane_doe()).expect("encodes");
        let mid = token.len() / 2;
        let original = token.as_bytes()[mid];
        let replacement = if original == b'A' { b'B' } else { b'A' };
        let mut corrupted = token.into_bytes();
        corrupted[mid] = replacement;
        let corrupted = String::from_utf8(corrupted).expect("still ascii");

        let err = decode(&corrupted).expect_err("must fail");
        assert!(matches!(err, ShareLinkError::MalformedShareLink(_)));
    }

    #[test]
    fn test_truncated_gzip_stream_is_malformed() {
        // Scenario: valid base64 whose content is a gzip stream cut short.
        let token = encode(&jane_doe()).expect("encodes");
        let mut compressed = URL_SAFE_NO_PAD.decode(&token).expect("valid base64");
        compressed.truncate(compressed.len() / 2);
        let truncated = URL_SAFE_NO_PAD.encode(compressed);

        let err = decode(&truncated).expect_err("must fail");
        assert!(matches!(err, ShareLinkError::MalformedShareLink(_)));
    }

    #[test]
    fn test_non_json_plaintext_is_malformed() {
        // Valid base64 and valid gzip, but the plaintext is not a payload.
        let token = URL_SAFE_NO_PAD.encode(gzip(b"certainly not json"));
        let err = decode(&token).expect_err("must fail");
        assert!(matches!(err, ShareLinkError::MalformedShareLink(_)));
    }

    #[test]
    fn test_json_missing_required_fields_is_malformed() {
        // Parses as JSON but lacks the theme block.
        let token = URL_SAFE_NO_PAD.encode(gzip(br#"{"cardData": {}}"#));
        let err = decode(&token).expect_err("must fail");
        assert!(matches!(err, ShareLinkError::MalformedShareLink(_)));
    }

    #[test]
    fn test_raw_uncompressed_json_is_malformed() {
        // Skipping the gzip layer entirely is not a valid token.
        let json = serde_json::to_vec(&jane_doe()).expect("serializes");
        let token = URL_SAFE_NO_PAD.encode(json);
        let err = decode(&token).expect_err("must fail");
        assert!(matches!(err, ShareLinkError::MalformedShareLink(_)));
    }

    #[test]
    fn test_decode_defaults_absent_card_fields() {
        // A reduced payload with only a name still decodes; the other
        // content fields come back empty.
        let token = URL_SAFE_NO_PAD.encode(gzip(
            br##"{"cardData": {"name": "Jane Doe"}, "theme": {"background": "#FFF", "text": "#000", "primary": "#111", "accent": "#EEE"}}"##,
        ));
        let payload = decode(&token).expect("decodes");
        assert_eq!(payload.card_data.name, "Jane Doe");
        assert_eq!(payload.card_data.bio, "");
        assert!(payload.card_data.contact_info.is_empty());
        assert!(payload.card_data.social_links.is_empty());
        assert!(payload.card_data.career_history.is_empty());
    }

    #[test]
    fn test_unicode_content_round_trips() {
        let mut payload = jane_doe();
        payload.card_data.name = "Jäne Döe 山田".to_string();
        payload.card_data.bio = "Construit des choses — שלום".to_string();
        let token = encode(&payload).expect("encodes");
        assert_eq!(decode(&token).expect("decodes"), payload);
    }

    #[test]
    fn test_compression_keeps_repetitive_payloads_small() {
        let mut payload = jane_doe();
        payload.card_data.bio = "ship early, ship often. ".repeat(200);
        let token = encode(&payload).expect("encodes");
        // 4800 characters of bio must compress far below their raw size.
        assert!(token.len() < 1000, "token unexpectedly large: {}", token.len());
    }
}
