//! `st` column decoding.

use crate::error::FormatError;

/// Decode the two-hex-digit connection state.
///
/// The value is passed through opaquely; no check is made that it is a state
/// the kernel actually defines.
pub fn parse_state(token: &str) -> Result<u8, FormatError> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatError::InvalidState(token.to_string()));
    }

    u8::from_str_radix(token, 16).map_err(|_| FormatError::InvalidState(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state() {
        assert_eq!(parse_state("01"), Ok(1));
        assert_eq!(parse_state("0A"), Ok(10));
        assert_eq!(parse_state("0a"), Ok(10));
        assert_eq!(parse_state("FF"), Ok(255));
    }

    #[test]
    fn test_unknown_state_passes_through() {
        assert_eq!(parse_state("7E"), Ok(0x7E));
    }

    #[test]
    fn test_malformed_state() {
        assert_eq!(
            parse_state("ZZ"),
            Err(FormatError::InvalidState("ZZ".to_string()))
        );
        assert!(parse_state("A").is_err());
        assert!(parse_state("0A0").is_err());
        assert!(parse_state("+A").is_err());
        assert!(parse_state("").is_err());
    }
}
