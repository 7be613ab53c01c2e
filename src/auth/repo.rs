use crate::auth::{dto::NewUser, repo_types::User};
use crate::error::AppError;
use sqlx::PgPool;

impl User {
    /// Find a user by (normalised) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password.
    ///
    /// A clash on the unique email constraint is reported as
    /// [`AppError::EmailTaken`], whatever check the caller did beforehand.
    pub async fn create(db: &PgPool, new: &NewUser, password_hash: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, password_hash, created_at
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::EmailTaken
            }
            other => AppError::Database(other),
        })?;
        Ok(user)
    }
}
