//! JSON decoding of the status endpoint's response body.

use serde_json::Value;

use crate::error::PollError;

/// Decodes the raw response body into a generic JSON value.
///
/// # Errors
///
/// Returns [`PollError::Parse`] if the bytes are not valid JSON.
pub fn parse_payload(bytes: &[u8]) -> Result<Value, PollError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_connectors_object() {
        let payload = parse_payload(br#"{"connectors":[{"status":2}]}"#).unwrap();
        assert_eq!(payload["connectors"][0]["status"], 2);
    }

    #[test]
    fn test_parse_html_error_page_fails() {
        let result = parse_payload(b"<html><body>Forbidden</body></html>");
        assert!(matches!(result, Err(PollError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_body_fails() {
        assert!(parse_payload(&[]).is_err());
    }
}
