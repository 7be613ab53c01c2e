use crate::error::AppError;
use crate::posts::dto::NewPost;
use crate::posts::repo_types::Post;
use sqlx::PgPool;

impl Post {
    /// All posts in storage order (oldest first).
    pub async fn list_all(db: &PgPool) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, first_name, last_name, title, content, created_at
            FROM posts
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, new: &NewPost) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (first_name, last_name, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, title, content, created_at
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.title)
        .bind(&new.content)
        .fetch_one(db)
        .await?;
        Ok(post)
    }
}
