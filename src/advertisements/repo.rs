use sqlx::{FromRow, PgExecutor};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub creation_time: OffsetDateTime,
    // nullable at the schema level, always set by the creating handler
    pub user_id: Option<i64>,
}

impl Advertisement {
    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: i64,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        sqlx::query_as::<_, Advertisement>(
            r#"
            SELECT id, title, description, creation_time, user_id
            FROM advertisements
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        title: &str,
        description: &str,
        owner_id: i64,
    ) -> Result<Advertisement, sqlx::Error> {
        sqlx::query_as::<_, Advertisement>(
            r#"
            INSERT INTO advertisements (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, creation_time, user_id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(owner_id)
        .fetch_one(db)
        .await
    }

    /// Delete by id, returning the deleted row's id or `None` when absent.
    pub async fn delete<'e>(
        db: impl PgExecutor<'e>,
        id: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM advertisements
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::users::repo::User;

    #[sqlx::test]
    async fn delete_returns_the_id_once_then_none(pool: PgPool) {
        let owner = User::create(&pool, "carol", "hash").await.unwrap();
        let ad = Advertisement::create(&pool, "Bike", "Red bike", owner.id)
            .await
            .unwrap();

        assert_eq!(
            Advertisement::delete(&pool, ad.id).await.unwrap(),
            Some(ad.id)
        );
        assert_eq!(Advertisement::delete(&pool, ad.id).await.unwrap(), None);
        assert!(Advertisement::find_by_id(&pool, ad.id)
            .await
            .unwrap()
            .is_none());
    }

    #[sqlx::test]
    async fn create_attaches_the_given_owner(pool: PgPool) {
        let owner = User::create(&pool, "dave", "hash").await.unwrap();
        let ad = Advertisement::create(&pool, "Sofa", "Three seats", owner.id)
            .await
            .unwrap();

        assert_eq!(ad.user_id, Some(owner.id));
        assert_eq!(ad.title, "Sofa");
        assert_eq!(ad.description, "Three seats");
    }
}
