//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tb_core::domain::entities::user::{User, UserRole};
use tb_core::errors::{AuthError, DomainError};
use tb_core::repositories::UserRepository;

use super::{get_column, get_uuid, is_unique_violation, storage_error};

const USER_COLUMNS: &str = "id, name, email, photo, role, password_hash, password_changed_at, \
     password_reset_token, password_reset_expires, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let role: String = get_column(row, "role")?;
        let role = role
            .parse::<UserRole>()
            .map_err(|e| DomainError::internal(format!("Invalid role in database: {}", e)))?;

        Ok(User {
            id: get_uuid(row, "id")?,
            name: get_column(row, "name")?,
            email: get_column(row, "email")?,
            photo: get_column(row, "photo")?,
            role,
            password_hash: get_column(row, "password_hash")?,
            password_changed_at: get_column::<Option<DateTime<Utc>>>(row, "password_changed_at")?,
            password_reset_token: get_column(row, "password_reset_token")?,
            password_reset_expires: get_column::<Option<DateTime<Utc>>>(row, "password_reset_expires")?,
            created_at: get_column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: get_column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    async fn fetch_optional(
        &self,
        query: sqlx::query::Query<'_, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    ) -> Result<Option<User>, DomainError> {
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("load user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        self.fetch_optional(sqlx::query(&sql).bind(id.to_string())).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);
        self.fetch_optional(sqlx::query(&sql).bind(email)).await
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError> {
        let sql = format!(
            "SELECT {} FROM users WHERE password_reset_token = ? AND password_reset_expires > ?",
            USER_COLUMNS
        );
        self.fetch_optional(sqlx::query(&sql).bind(token_hash).bind(now))
            .await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let sql = format!(
            "INSERT INTO users ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            USER_COLUMNS
        );

        sqlx::query(&sql)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.photo)
            .bind(user.role.as_str())
            .bind(&user.password_hash)
            .bind(user.password_changed_at)
            .bind(&user.password_reset_token)
            .bind(user.password_reset_expires)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(AuthError::UserAlreadyExists)
                } else {
                    storage_error("create user", e)
                }
            })?;

        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        user.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?, email = ?, photo = ?, role = ?, password_hash = ?,
                password_changed_at = ?, password_reset_token = ?,
                password_reset_expires = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.photo)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .bind(user.password_changed_at)
        .bind(&user.password_reset_token)
        .bind(user.password_reset_expires)
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::from(AuthError::UserAlreadyExists)
            } else {
                storage_error("update user", e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }
}
