/// Database models
///
/// # Models
///
/// - `author`: the validated author record and its CRUD operations
///
/// # Example
///
/// ```no_run
/// use author_store::models::author::Author;
/// use author_store::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let author = Author::new(
///     Uuid::new_v4(),
///     "https://cdn.example.com/avatars/1.png",
///     None,
///     "author@example.com",
///     "$argon2id$v=19$m=65536,t=3,p=4$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
///     "wordsmith",
/// )?;
/// author.insert(&pool).await?;
/// # Ok(())
/// # }
/// ```

pub mod author;
