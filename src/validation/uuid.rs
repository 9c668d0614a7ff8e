/// Identifier validation
///
/// Normalizes a caller-supplied value into a `Uuid`. Callers may hold an
/// identifier as a native `Uuid`, as its canonical string form (from a URL
/// or an API payload), or as the raw 16-byte form (from a binary column);
/// all three converge here.
///
/// # Example
///
/// ```
/// use author_store::validation::uuid::validate_uuid;
///
/// let id = validate_uuid("6f2b8c1a-9d3e-4f5a-8b7c-0d1e2f3a4b5c").unwrap();
/// assert_eq!(id.to_string(), "6f2b8c1a-9d3e-4f5a-8b7c-0d1e2f3a4b5c");
///
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```

use crate::error::AuthorError;
use uuid::Uuid;

/// A value that can be validated into a `Uuid`
#[derive(Debug, Clone)]
pub enum UuidInput {
    /// A native identifier, already well-formed
    Id(Uuid),

    /// A textual form: canonical hyphenated or simple hex
    Text(String),

    /// The raw 16-byte form
    Bytes(Vec<u8>),
}

impl From<Uuid> for UuidInput {
    fn from(id: Uuid) -> Self {
        UuidInput::Id(id)
    }
}

impl From<&str> for UuidInput {
    fn from(text: &str) -> Self {
        UuidInput::Text(text.to_string())
    }
}

impl From<String> for UuidInput {
    fn from(text: String) -> Self {
        UuidInput::Text(text)
    }
}

impl From<&[u8]> for UuidInput {
    fn from(bytes: &[u8]) -> Self {
        UuidInput::Bytes(bytes.to_vec())
    }
}

impl From<[u8; 16]> for UuidInput {
    fn from(bytes: [u8; 16]) -> Self {
        UuidInput::Bytes(bytes.to_vec())
    }
}

/// Validates and normalizes an identifier
///
/// # Errors
///
/// - `InvalidArgument` if a textual form is not a well-formed UUID
/// - `TypeMismatch` if a byte form is not exactly 16 bytes
pub fn validate_uuid(input: impl Into<UuidInput>) -> Result<Uuid, AuthorError> {
    match input.into() {
        UuidInput::Id(id) => Ok(id),
        UuidInput::Text(text) => Uuid::parse_str(text.trim()).map_err(|_| {
            AuthorError::InvalidArgument(format!("`{}` is not a well-formed uuid", text.trim()))
        }),
        UuidInput::Bytes(bytes) => {
            let raw: [u8; 16] = bytes.as_slice().try_into().map_err(|_| {
                AuthorError::TypeMismatch(format!(
                    "uuid byte form must be exactly 16 bytes, got {}",
                    bytes.len()
                ))
            })?;
            Ok(Uuid::from_bytes(raw))
        }
    }
}
