/// Author model and database operations
///
/// The author is a top-level entity carrying two unique keys, email and
/// username. Every field is validated on the way in: the constructor runs
/// all field mutators and fails atomically, so no partially valid author is
/// ever observable, and each mutator re-validates on its own when a field
/// changes later. Uniqueness of email and username is enforced by the
/// store's constraints, never by this type.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE authors (
///     id UUID PRIMARY KEY,
///     avatar_url VARCHAR(255) NOT NULL,
///     activation_token CHAR(32),
///     email VARCHAR(128) NOT NULL UNIQUE,
///     password_hash CHAR(97) NOT NULL,
///     username VARCHAR(32) NOT NULL UNIQUE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use author_store::models::author::Author;
/// use author_store::db::pool::{create_pool, DatabaseConfig};
/// use author_store::validation::token::new_activation_token;
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let token = new_activation_token();
/// let author = Author::new(
///     Uuid::new_v4(),
///     "https://cdn.example.com/avatars/42.png",
///     Some(&token),
///     "author@example.com",
///     "$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
///     "wordsmith",
/// )?;
///
/// author.insert(&pool).await?;
///
/// let found = Author::find_by_id(&pool, author.id()).await?;
/// assert_eq!(found.as_ref(), Some(&author));
/// # Ok(())
/// # }
/// ```

use crate::error::AuthorError;
use crate::validation::sanitize;
use crate::validation::token::validate_activation_token;
use crate::validation::uuid::{validate_uuid, UuidInput};
use argon2::password_hash::PasswordHash;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// Validated author record
///
/// Fields are private; use the accessor/mutator pairs. There is no mutator
/// for `id`: the identifier is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Primary key, fixed at construction
    id: Uuid,

    /// Avatar URL, non-empty, at most 255 bytes
    avatar_url: String,

    /// Account activation token, 32 lowercase hex chars; None once activated
    activation_token: Option<String>,

    /// Email address, unique key, at most 128 bytes
    email: String,

    /// Argon2 password hash in PHC string form, exactly 97 bytes
    password_hash: String,

    /// Username, unique key, non-empty, at most 32 bytes
    username: String,
}

/// Row shape as it comes back from the store
#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    avatar_url: String,
    activation_token: Option<String>,
    email: String,
    password_hash: String,
    username: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = AuthorError;

    // Loaded rows go back through the constructor, so a row that no longer
    // satisfies the field constraints surfaces as a validation error
    // instead of a silently invalid record.
    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Author::new(
            row.id,
            &row.avatar_url,
            row.activation_token.as_deref(),
            &row.email,
            &row.password_hash,
            &row.username,
        )
    }
}

impl Author {
    /// Constructs a validated author
    ///
    /// Runs every field mutator in sequence; the first failure aborts
    /// construction and nothing partial escapes.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for empty, insecure, or malformed input
    /// - `OutOfRange` for length or format violations
    /// - `TypeMismatch` for an identifier byte form of the wrong width
    ///
    /// # Example
    ///
    /// ```
    /// use author_store::models::author::Author;
    /// use uuid::Uuid;
    ///
    /// let author = Author::new(
    ///     Uuid::new_v4(),
    ///     "https://cdn.example.com/avatars/42.png",
    ///     None,
    ///     "author@example.com",
    ///     "$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    ///     "wordsmith",
    /// ).unwrap();
    /// assert_eq!(author.username(), "wordsmith");
    /// ```
    pub fn new(
        id: impl Into<UuidInput>,
        avatar_url: &str,
        activation_token: Option<&str>,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> Result<Self, AuthorError> {
        let mut author = Author {
            id: validate_uuid(id)?,
            avatar_url: String::new(),
            activation_token: None,
            email: String::new(),
            password_hash: String::new(),
            username: String::new(),
        };

        author.set_avatar_url(avatar_url)?;
        author.set_activation_token(activation_token)?;
        author.set_email(email)?;
        author.set_password_hash(password_hash)?;
        author.set_username(username)?;

        Ok(author)
    }

    /// Accessor for the author id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Accessor for the avatar URL
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Mutator for the avatar URL
    ///
    /// The value is trimmed and stripped of control characters before the
    /// emptiness and length checks.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the URL is empty after sanitizing
    /// - `OutOfRange` if the URL exceeds 255 bytes
    pub fn set_avatar_url(&mut self, new_avatar_url: &str) -> Result<(), AuthorError> {
        let avatar_url = sanitize(new_avatar_url);
        if avatar_url.is_empty() {
            return Err(AuthorError::InvalidArgument(
                "author avatar url is empty or insecure".to_string(),
            ));
        }
        if avatar_url.len() > 255 {
            return Err(AuthorError::OutOfRange(
                "author avatar url must be at most 255 bytes".to_string(),
            ));
        }
        self.avatar_url = avatar_url;
        Ok(())
    }

    /// Accessor for the activation token
    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    /// Mutator for the activation token
    ///
    /// `None` clears the token (the account is activated). A present token
    /// is trimmed and lowercased, then must be exactly 32 hex characters.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if a present token is not 32 hexadecimal characters.
    pub fn set_activation_token(
        &mut self,
        new_activation_token: Option<&str>,
    ) -> Result<(), AuthorError> {
        self.activation_token = match new_activation_token {
            None => None,
            Some(token) => Some(validate_activation_token(token)?),
        };
        Ok(())
    }

    /// Accessor for the email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Mutator for the email address
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the value is empty or not a valid address
    /// - `OutOfRange` if the address exceeds 128 bytes
    pub fn set_email(&mut self, new_email: &str) -> Result<(), AuthorError> {
        let email = new_email.trim().to_string();
        if email.is_empty() || !email.validate_email() {
            return Err(AuthorError::InvalidArgument(
                "author email is empty or not a valid address".to_string(),
            ));
        }
        if email.len() > 128 {
            return Err(AuthorError::OutOfRange(
                "author email must be at most 128 bytes".to_string(),
            ));
        }
        self.email = email;
        Ok(())
    }

    /// Accessor for the password hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Mutator for the password hash
    ///
    /// The value must be a PHC-format argon2 hash and exactly 97 bytes
    /// long. Plaintext passwords are never accepted here; hash them first.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the value is empty or not an argon2 PHC string
    /// - `OutOfRange` if the value is not exactly 97 bytes
    pub fn set_password_hash(&mut self, new_password_hash: &str) -> Result<(), AuthorError> {
        let password_hash = new_password_hash.trim().to_string();
        if password_hash.is_empty() {
            return Err(AuthorError::InvalidArgument(
                "author password hash is empty".to_string(),
            ));
        }

        let parsed = PasswordHash::new(&password_hash).map_err(|_| {
            AuthorError::InvalidArgument("author password hash is not a valid hash".to_string())
        })?;
        if !matches!(parsed.algorithm.as_str(), "argon2i" | "argon2id" | "argon2d") {
            return Err(AuthorError::InvalidArgument(
                "author password hash is not an argon2 hash".to_string(),
            ));
        }

        if password_hash.len() != 97 {
            return Err(AuthorError::OutOfRange(
                "author password hash must be exactly 97 bytes".to_string(),
            ));
        }

        self.password_hash = password_hash;
        Ok(())
    }

    /// Accessor for the username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Mutator for the username
    ///
    /// The value is trimmed and stripped of control characters before the
    /// emptiness and length checks.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the username is empty after sanitizing
    /// - `OutOfRange` if the username exceeds 32 bytes
    pub fn set_username(&mut self, new_username: &str) -> Result<(), AuthorError> {
        let username = sanitize(new_username);
        if username.is_empty() {
            return Err(AuthorError::InvalidArgument(
                "author username is empty or insecure".to_string(),
            ));
        }
        if username.len() > 32 {
            return Err(AuthorError::OutOfRange(
                "author username must be at most 32 bytes".to_string(),
            ));
        }
        self.username = username;
        Ok(())
    }

    /// Serializes the record as a column-name-to-value mapping
    ///
    /// The id is rendered in canonical string form; everything else as
    /// stored. This is the external representation used in API responses.
    ///
    /// # Example
    ///
    /// ```
    /// # use author_store::models::author::Author;
    /// # use uuid::Uuid;
    /// # let author = Author::new(
    /// #     Uuid::new_v4(), "https://cdn.example.com/a.png", None, "a@example.com",
    /// #     "$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    /// #     "wordsmith",
    /// # ).unwrap();
    /// let json = author.to_json();
    /// assert_eq!(json["username"], "wordsmith");
    /// assert_eq!(json["id"], author.id().to_string());
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id.to_string(),
            "avatar_url": self.avatar_url,
            "activation_token": self.activation_token,
            "email": self.email,
            "password_hash": self.password_hash,
            "username": self.username,
        })
    }

    /// Inserts this author as a new row
    ///
    /// # Errors
    ///
    /// Returns a `Store` error on a duplicate email or username (unique
    /// constraint violation) or on connectivity failure; check with
    /// [`AuthorError::is_unique_violation`].
    pub async fn insert(&self, pool: &PgPool) -> Result<(), AuthorError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, avatar_url, activation_token, email, password_hash, username)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(self.id)
        .bind(&self.avatar_url)
        .bind(self.activation_token.as_deref())
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(&self.username)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Overwrites the row matching this author's id
    ///
    /// Whether an update of a non-existent id is an error is left to the
    /// store; the affected-row count is not inspected here.
    ///
    /// # Errors
    ///
    /// Returns a `Store` error on constraint violation or connectivity
    /// failure.
    pub async fn update(&self, pool: &PgPool) -> Result<(), AuthorError> {
        sqlx::query(
            r#"
            UPDATE authors
            SET avatar_url = $2, activation_token = $3, email = $4, password_hash = $5, username = $6
            WHERE id = $1
            "#,
        )
        .bind(self.id)
        .bind(&self.avatar_url)
        .bind(self.activation_token.as_deref())
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(&self.username)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes the row matching this author's id
    ///
    /// Returns true if a row was deleted, false if no such row existed.
    ///
    /// # Errors
    ///
    /// Returns a `Store` error on connectivity failure.
    pub async fn delete(&self, pool: &PgPool) -> Result<bool, AuthorError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(self.id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Finds an author by primary key
    ///
    /// The id is validated first, so a malformed identifier fails before
    /// any query is issued.
    ///
    /// # Errors
    ///
    /// - Identifier validation errors, unchanged
    /// - `Store` on connectivity failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use author_store::models::author::Author;
    /// # use sqlx::PgPool;
    /// # async fn example(pool: PgPool) -> Result<(), author_store::error::AuthorError> {
    /// if let Some(author) = Author::find_by_id(&pool, "6f2b8c1a-9d3e-4f5a-8b7c-0d1e2f3a4b5c").await? {
    ///     println!("found {}", author.username());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_by_id(
        pool: &PgPool,
        id: impl Into<UuidInput>,
    ) -> Result<Option<Self>, AuthorError> {
        let id = validate_uuid(id)?;

        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, avatar_url, activation_token, email, password_hash, username
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(Author::try_from).transpose()
    }

    /// Finds an author by email address
    ///
    /// # Errors
    ///
    /// Returns a `Store` error on connectivity failure.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, AuthorError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, avatar_url, activation_token, email, password_hash, username
            FROM authors
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        row.map(Author::try_from).transpose()
    }

    /// Finds an author by username
    ///
    /// # Errors
    ///
    /// Returns a `Store` error on connectivity failure.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, AuthorError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, avatar_url, activation_token, email, password_hash, username
            FROM authors
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        row.map(Author::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_HASH: &str =
        "$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    // Same PHC shape but argon2i, which is one byte shorter
    const SHORT_HASH: &str =
        "$argon2i$v=19$m=65536,t=3,p=4$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    fn valid_author() -> Author {
        Author::new(
            Uuid::new_v4(),
            "https://cdn.example.com/avatars/42.png",
            Some("abcdef0123456789abcdef0123456789"),
            "author@example.com",
            VALID_HASH,
            "wordsmith",
        )
        .expect("valid inputs should construct")
    }

    #[test]
    fn test_hash_fixtures_have_expected_lengths() {
        assert_eq!(VALID_HASH.len(), 97);
        assert_eq!(SHORT_HASH.len(), 96);
    }

    #[test]
    fn test_construction_succeeds_and_getters_return_normalized_values() {
        let id = Uuid::new_v4();
        let author = Author::new(
            id,
            "  https://cdn.example.com/avatars/42.png  ",
            Some("ABCDEF0123456789ABCDEF0123456789"),
            "  author@example.com  ",
            VALID_HASH,
            "  wordsmith  ",
        )
        .unwrap();

        assert_eq!(author.id(), id);
        assert_eq!(author.avatar_url(), "https://cdn.example.com/avatars/42.png");
        assert_eq!(
            author.activation_token(),
            Some("abcdef0123456789abcdef0123456789")
        );
        assert_eq!(author.email(), "author@example.com");
        assert_eq!(author.password_hash(), VALID_HASH);
        assert_eq!(author.username(), "wordsmith");
    }

    #[test]
    fn test_construction_accepts_string_id() {
        let id = Uuid::new_v4();
        let author = Author::new(
            id.to_string(),
            "https://cdn.example.com/a.png",
            None,
            "author@example.com",
            VALID_HASH,
            "wordsmith",
        )
        .unwrap();
        assert_eq!(author.id(), id);
    }

    #[test]
    fn test_construction_fails_atomically_on_any_bad_field() {
        let result = Author::new(
            Uuid::new_v4(),
            "https://cdn.example.com/a.png",
            None,
            "not-an-email",
            VALID_HASH,
            "wordsmith",
        );
        assert!(matches!(result, Err(AuthorError::InvalidArgument(_))));
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let result = Author::new(
            "not-a-uuid",
            "https://cdn.example.com/a.png",
            None,
            "author@example.com",
            VALID_HASH,
            "wordsmith",
        );
        assert!(matches!(result, Err(AuthorError::InvalidArgument(_))));
    }

    #[test]
    fn test_email_longer_than_128_bytes_is_out_of_range() {
        // Syntactically valid address, 129 bytes long
        let long_email = format!("{}@{}.com", "a".repeat(64), "d".repeat(60));
        assert_eq!(long_email.len(), 129);

        let mut author = valid_author();
        let err = author.set_email(&long_email).unwrap_err();
        assert!(matches!(err, AuthorError::OutOfRange(_)));
    }

    #[test]
    fn test_invalid_email_syntax_is_rejected() {
        let mut author = valid_author();
        assert!(matches!(
            author.set_email("no-at-sign.example.com"),
            Err(AuthorError::InvalidArgument(_))
        ));
        // failed mutation leaves the previous value in place
        assert_eq!(author.email(), "author@example.com");
    }

    #[test]
    fn test_empty_username_after_trim_is_invalid() {
        let mut author = valid_author();
        assert!(matches!(
            author.set_username("   "),
            Err(AuthorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_username_longer_than_32_bytes_is_out_of_range() {
        let mut author = valid_author();
        let err = author.set_username(&"x".repeat(33)).unwrap_err();
        assert!(matches!(err, AuthorError::OutOfRange(_)));
    }

    #[test]
    fn test_empty_avatar_url_after_trim_is_invalid() {
        let mut author = valid_author();
        assert!(matches!(
            author.set_avatar_url(" \t "),
            Err(AuthorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_avatar_url_longer_than_255_bytes_is_out_of_range() {
        let mut author = valid_author();
        let long_url = format!("https://cdn.example.com/{}", "a".repeat(240));
        let err = author.set_avatar_url(&long_url).unwrap_err();
        assert!(matches!(err, AuthorError::OutOfRange(_)));
    }

    #[test]
    fn test_avatar_url_control_characters_are_stripped() {
        let mut author = valid_author();
        author
            .set_avatar_url("https://cdn.example.com/\x00a.png")
            .unwrap();
        assert_eq!(author.avatar_url(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_password_hash_not_matching_phc_format_is_invalid() {
        let mut author = valid_author();
        let err = author.set_password_hash(&"x".repeat(97)).unwrap_err();
        assert!(matches!(err, AuthorError::InvalidArgument(_)));
    }

    #[test]
    fn test_password_hash_wrong_length_is_out_of_range() {
        let mut author = valid_author();
        let err = author.set_password_hash(SHORT_HASH).unwrap_err();
        assert!(matches!(err, AuthorError::OutOfRange(_)));
    }

    #[test]
    fn test_activation_token_can_be_cleared() {
        let mut author = valid_author();
        author.set_activation_token(None).unwrap();
        assert_eq!(author.activation_token(), None);
    }

    #[test]
    fn test_activation_token_wrong_length_is_out_of_range() {
        let mut author = valid_author();
        let err = author
            .set_activation_token(Some("abcdef0123456789abcdef012345678"))
            .unwrap_err();
        assert!(matches!(err, AuthorError::OutOfRange(_)));
    }

    #[test]
    fn test_to_json_uses_column_names_and_renders_id_as_string() {
        let author = valid_author();
        let json = author.to_json();

        assert_eq!(json["id"], author.id().to_string());
        assert_eq!(json["avatar_url"], "https://cdn.example.com/avatars/42.png");
        assert_eq!(json["activation_token"], "abcdef0123456789abcdef0123456789");
        assert_eq!(json["email"], "author@example.com");
        assert_eq!(json["password_hash"], VALID_HASH);
        assert_eq!(json["username"], "wordsmith");
    }

    #[test]
    fn test_to_json_renders_cleared_token_as_null() {
        let mut author = valid_author();
        author.set_activation_token(None).unwrap();
        assert!(author.to_json()["activation_token"].is_null());
    }

    // CRUD round-trips require a running database; they live in
    // tests/author_crud_tests.rs
}
