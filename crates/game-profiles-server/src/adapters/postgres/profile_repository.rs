//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use game_profiles::{DomainError, Profile, ProfileRepository, Stats, StatsFields};

/// PostgreSQL implementation of ProfileRepository
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    external_id: String,
    nickname: String,
    stats: Json<StatsFields>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile::restore(
            row.id,
            row.external_id,
            row.nickname,
            Stats::from_fields(row.stats.0),
            row.created_at,
            row.updated_at,
        )
    }
}

/// Unique violations become `Conflict`; everything else is unexpected
fn map_sqlx_error(e: sqlx::Error) -> DomainError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            DomainError::Conflict("Profile with this external_id already exists".to_string())
        }
        _ => DomainError::Unexpected(e.to_string()),
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn create(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (external_id, nickname, stats)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(profile.external_id())
        .bind(profile.nickname())
        .bind(Json(profile.stats().to_fields()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let id = profile
            .id()
            .ok_or_else(|| DomainError::not_found("Profile", "<unsaved>"))?;

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET external_id = $2, nickname = $3, stats = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(profile.external_id())
        .bind(profile.nickname())
        .bind(Json(profile.stats().to_fields()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| DomainError::not_found("Profile", id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Profile>, DomainError> {
        let row =
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE external_id = $1")
                .bind(external_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            "SELECT * FROM profiles ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
