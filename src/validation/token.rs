/// Activation token generation and validation
///
/// Activation tokens mark accounts that have not yet confirmed their email
/// address. A token is 16 random bytes rendered as 32 lowercase hex
/// characters; it is cleared (set to NULL) once the account is activated.

use crate::error::AuthorError;
use rand::RngCore;

/// Generates a fresh activation token from OS randomness
///
/// # Example
///
/// ```
/// use author_store::validation::token::new_activation_token;
///
/// let token = new_activation_token();
/// assert_eq!(token.len(), 32);
/// ```
pub fn new_activation_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Validates and normalizes an activation token
///
/// The token is trimmed and lowercased before checking.
///
/// # Errors
///
/// Returns `OutOfRange` unless the result is exactly 32 hexadecimal
/// characters.
pub fn validate_activation_token(value: &str) -> Result<String, AuthorError> {
    let token = value.trim().to_lowercase();

    if token.len() != 32 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AuthorError::OutOfRange(
            "activation token must be exactly 32 hexadecimal characters".to_string(),
        ));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_token_is_32_lowercase_hex() {
        let token = new_activation_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn test_generated_token_round_trips_through_validation() {
        let token = new_activation_token();
        assert_eq!(validate_activation_token(&token).unwrap(), token);
    }

    #[test]
    fn test_uppercase_input_is_normalized() {
        let token = validate_activation_token("ABCDEF0123456789ABCDEF0123456789").unwrap();
        assert_eq!(token, "abcdef0123456789abcdef0123456789");
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(validate_activation_token("abc123").is_err());
        assert!(validate_activation_token(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_non_hex_characters_are_rejected() {
        let err = validate_activation_token(&"g".repeat(32)).unwrap_err();
        assert!(matches!(err, AuthorError::OutOfRange(_)));
    }
}
