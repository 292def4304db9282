use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::pin::models::ImageLink;
use crate::domain::pin::models::ListPinsQuery;
use crate::domain::pin::models::Pin;
use crate::domain::pin::models::PinAuthor;
use crate::domain::pin::models::PinBody;
use crate::domain::pin::models::PinId;
use crate::domain::pin::models::PinTitle;
use crate::domain::pin::ports::PinRepository;
use crate::pin::errors::PinError;

pub struct PostgresPinRepository {
    pool: PgPool,
}

impl PostgresPinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PinRow {
    id: Uuid,
    title: String,
    body: String,
    image_link: String,
    author: String,
    date_created: DateTime<Utc>,
}

impl TryFrom<PinRow> for Pin {
    type Error = PinError;

    fn try_from(row: PinRow) -> Result<Self, Self::Error> {
        Ok(Pin {
            id: PinId(row.id),
            title: PinTitle::new(row.title)?,
            body: PinBody::new(row.body)?,
            image_link: ImageLink::new(row.image_link)?,
            author: PinAuthor::new(row.author)?,
            date_created: row.date_created,
        })
    }
}

/// Build the listing statement. Ordering comes from whitelisted enums only.
fn list_statement(query: &ListPinsQuery) -> String {
    format!(
        r#"
        SELECT id, title, body, image_link, author, date_created
        FROM pins
        WHERE ($1::TEXT IS NULL OR LOWER(author) = LOWER($1))
        ORDER BY {} {}, id ASC
        "#,
        query.order_by.column(),
        query.order_dir.as_sql()
    )
}

#[async_trait]
impl PinRepository for PostgresPinRepository {
    async fn list(&self, query: &ListPinsQuery) -> Result<Vec<Pin>, PinError> {
        let statement = list_statement(query);

        let rows = sqlx::query_as::<_, PinRow>(&statement)
            .bind(query.author.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PinError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Pin::try_from).collect()
    }

    async fn find_by_id(&self, id: &PinId) -> Result<Option<Pin>, PinError> {
        sqlx::query_as::<_, PinRow>(
            r#"
            SELECT id, title, body, image_link, author, date_created
            FROM pins
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PinError::DatabaseError(e.to_string()))?
        .map(Pin::try_from)
        .transpose()
    }

    async fn create(&self, pin: Pin) -> Result<Pin, PinError> {
        sqlx::query(
            r#"
            INSERT INTO pins (id, title, body, image_link, author, date_created)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(pin.id.0)
        .bind(pin.title.as_str())
        .bind(pin.body.as_str())
        .bind(pin.image_link.as_str())
        .bind(pin.author.as_str())
        .bind(pin.date_created)
        .execute(&self.pool)
        .await
        .map_err(|e| PinError::DatabaseError(e.to_string()))?;

        Ok(pin)
    }

    async fn update(&self, pin: Pin) -> Result<Pin, PinError> {
        let result = sqlx::query(
            r#"
            UPDATE pins
            SET title = $2, body = $3, image_link = $4, author = $5
            WHERE id = $1
            "#,
        )
        .bind(pin.id.0)
        .bind(pin.title.as_str())
        .bind(pin.body.as_str())
        .bind(pin.image_link.as_str())
        .bind(pin.author.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| PinError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PinError::NotFound(pin.id.to_string()));
        }

        Ok(pin)
    }

    async fn delete(&self, id: &PinId) -> Result<(), PinError> {
        let result = sqlx::query(
            r#"
            DELETE FROM pins
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PinError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PinError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
