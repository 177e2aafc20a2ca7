use sqlx::{FromRow, PgExecutor};
use time::OffsetDateTime;

use crate::error::ApiError;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    // argon2 PHC hash string, never plaintext
    pub password: String,
    pub creation_time: OffsetDateTime,
}

impl User {
    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: i64,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password, creation_time
            FROM app_user
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_name<'e>(
        db: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password, creation_time
            FROM app_user
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user with a hashed password. A duplicate name surfaces
    /// as `ApiError::UserExists` instead of a raw driver error.
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        name: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO app_user (name, password)
            VALUES ($1, $2)
            RETURNING id, name, password, creation_time
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::UserExists
            } else {
                ApiError::Database(e)
            }
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            return code.as_ref() == "23505";
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;

    #[sqlx::test]
    async fn duplicate_name_is_a_conflict_and_leaves_the_row_alone(pool: PgPool) {
        let first = User::create(&pool, "alice", "hash-one").await.unwrap();

        let err = User::create(&pool, "alice", "hash-two").await.unwrap_err();
        assert!(matches!(err, ApiError::UserExists));

        let stored = User::find_by_name(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.password, "hash-one");
        assert_eq!(stored.creation_time, first.creation_time);
    }

    #[sqlx::test]
    async fn find_by_id_is_none_for_unknown_ids(pool: PgPool) {
        assert!(User::find_by_id(&pool, 123_456).await.unwrap().is_none());
    }
}
