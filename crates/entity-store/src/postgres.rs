use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{Entity, EntityId, Result, StoreError, store::EntityStore};

/// PostgreSQL-backed entity store.
///
/// Records are stored as JSONB rows keyed by `(kind, id)`; ids come from
/// a per-kind row in `entity_sequences`, bumped inside the same
/// transaction as the insert so concurrent creates never share an id.
pub struct PostgresStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PostgresStore<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> PostgresStore<E> {
    /// Creates a new PostgreSQL entity store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        tracing::info!(kind = E::KIND, "running database migrations");
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn decode(data: serde_json::Value) -> Result<E> {
        serde_json::from_value(data).map_err(StoreError::Serialization)
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for PostgresStore<E> {
    async fn create(&self, mut entity: E) -> Result<E> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO entity_sequences (kind, last_id) VALUES ($1, 1)
            ON CONFLICT (kind) DO UPDATE SET last_id = entity_sequences.last_id + 1
            RETURNING last_id
            "#,
        )
        .bind(E::KIND)
        .fetch_one(&mut *tx)
        .await?;

        entity.set_id(EntityId::new(id));
        let data = serde_json::to_value(&entity)?;

        sqlx::query("INSERT INTO entities (kind, id, data) VALUES ($1, $2, $3)")
            .bind(E::KIND)
            .bind(id)
            .bind(data)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(kind = E::KIND, id, "entity created");
        Ok(entity)
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>> {
        let data: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT data FROM entities WHERE kind = $1 AND id = $2")
                .bind(E::KIND)
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await?;

        data.map(Self::decode).transpose()
    }

    async fn list(&self) -> Result<Vec<E>> {
        let rows: Vec<serde_json::Value> =
            sqlx::query_scalar("SELECT data FROM entities WHERE kind = $1 ORDER BY id ASC")
                .bind(E::KIND)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Self::decode).collect()
    }

    async fn update(&self, entity: E) -> Result<E> {
        let id = entity.id().ok_or(StoreError::MissingId { kind: E::KIND })?;
        let data = serde_json::to_value(&entity)?;

        sqlx::query(
            r#"
            INSERT INTO entities (kind, id, data) VALUES ($1, $2, $3)
            ON CONFLICT (kind, id) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(E::KIND)
        .bind(id.as_i64())
        .bind(data)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM entities WHERE kind = $1 AND id = $2")
            .bind(E::KIND)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
