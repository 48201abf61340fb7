use crate::errors::DecodeError;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Decodes an upload payload of the form `"<content-type>,<base64-data>"`
/// into UTF-8 text. The content type before the first comma is ignored.
pub fn decode_upload(payload: &str) -> Result<String, DecodeError> {
    let (_content_type, data) = payload
        .split_once(',')
        .ok_or(DecodeError::MissingSeparator)?;
    let bytes = STANDARD.decode(data)?;
    let text = String::from_utf8(bytes)?;
    Ok(text)
}

/// Builds an upload payload the way the browser does, for the CLI and tests.
pub fn encode_upload(content_type: &str, text: &str) -> String {
    format!("{},{}", content_type, STANDARD.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_round_trip() {
        let csv = "Datetime,Chan 1 - Deg C,Chan 2 - %RH\n2024-01-01T00:00,20.5,45.0\n";
        let payload = encode_upload("data:text/csv;base64", csv);
        assert_eq!(decode_upload(&payload).unwrap(), csv);
    }

    #[test]
    fn test_decode_missing_separator() {
        assert!(matches!(
            decode_upload("no-comma-here"),
            Err(DecodeError::MissingSeparator)
        ));
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(matches!(
            decode_upload("data:text/csv;base64,!!!not-base64!!!"),
            Err(DecodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let payload = format!("data:text/csv;base64,{}", STANDARD.encode([0xff, 0xfe, 0xfd]));
        assert!(matches!(
            decode_upload(&payload),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_content_type_is_ignored() {
        let payload = format!("anything at all,{}", STANDARD.encode("a,b\n1,2\n"));
        assert_eq!(decode_upload(&payload).unwrap(), "a,b\n1,2\n");
    }
}
