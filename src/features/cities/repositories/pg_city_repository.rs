use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::cities::models::{coordinate_to_columns, City, CityRow};
use crate::features::cities::repositories::{CityMerge, CityRepository};

/// PostgreSQL-backed city store
pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn get(&self, id: &str) -> Result<Option<City>> {
        let row = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, name, description, longitude, latitude, updated_at, created_at
            FROM cities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get city: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(City::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<City>> {
        let rows = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, name, description, longitude, latitude, updated_at, created_at
            FROM cities
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cities: {:?}", e);
            AppError::Database(e)
        })?;

        rows.into_iter().map(City::try_from).collect()
    }

    async fn save(&self, city: City) -> Result<City> {
        let (longitude, latitude) = coordinate_to_columns(&city.location)?;

        let row = sqlx::query_as::<_, CityRow>(
            r#"
            INSERT INTO cities (id, name, description, longitude, latitude, updated_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                longitude = EXCLUDED.longitude,
                latitude = EXCLUDED.latitude,
                updated_at = EXCLUDED.updated_at,
                created_at = EXCLUDED.created_at
            RETURNING id, name, description, longitude, latitude, updated_at, created_at
            "#,
        )
        .bind(&city.id)
        .bind(&city.name)
        .bind(&city.description)
        .bind(longitude)
        .bind(latitude)
        .bind(city.updated_at)
        .bind(city.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save city: {:?}", e);
            AppError::Database(e)
        })?;

        City::try_from(row)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete city: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::debug!("Deleted {} city row(s) for id={}", result.rows_affected(), id);
        Ok(())
    }

    async fn modify(&self, id: &str, merge: CityMerge) -> Result<Option<City>> {
        // Dropping `tx` on any early return rolls the transaction back
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let current = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, name, description, longitude, latitude, updated_at, created_at
            FROM cities
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock city for update: {:?}", e);
            AppError::Database(e)
        })?;

        let Some(current) = current else {
            return Ok(None);
        };

        let merged = merge(City::try_from(current)?);
        let (longitude, latitude) = coordinate_to_columns(&merged.location)?;

        let row = sqlx::query_as::<_, CityRow>(
            r#"
            UPDATE cities
            SET name = $2, description = $3, longitude = $4, latitude = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, name, description, longitude, latitude, updated_at, created_at
            "#,
        )
        .bind(id)
        .bind(&merged.name)
        .bind(&merged.description)
        .bind(longitude)
        .bind(latitude)
        .bind(merged.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update city: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit city update: {:?}", e);
            AppError::Database(e)
        })?;

        City::try_from(row).map(Some)
    }
}
