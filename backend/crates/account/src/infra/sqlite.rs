//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};
use crate::error::{AccountError, AccountResult};

/// SQLite-backed account repository
#[derive(Clone)]
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file behind `database_url`
    pub async fn connect(database_url: &str) -> AccountResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        tracing::info!(database_url = %database_url, "Connected to SQLite");

        Ok(Self::new(pool))
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> AccountResult<()> {
        sqlx::migrate!("../../../database/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AccountError::Internal(format!("Migration failed: {}", e)))?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAccountRepository {
    async fn create(&self, user: NewUser) -> AccountResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                first_name,
                last_name,
                email,
                password_hash,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AccountError::DuplicateEmail,
            other => AccountError::Database(other),
        })?;

        Ok(user.into_user(UserId::from_i64(result.last_insert_rowid())))
    }

    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for SqliteAccountRepository {
    async fn create(&self, session: &AuthSession) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                created_at
            ) VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(session.session_id.to_string())
        .bind(session.user_id.value())
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AccountResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                created_at
            FROM sessions
            WHERE session_id = ?1
            "#,
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn delete(&self, session_id: Uuid) -> AccountResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = ?1")
            .bind(session_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        Ok(User {
            user_id: UserId::from_i64(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::new(self.email),
            password_hash: UserPassword::from_db(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl AuthSessionRow {
    fn into_session(self) -> AccountResult<AuthSession> {
        let session_id = Uuid::parse_str(&self.session_id)
            .map_err(|e| AccountError::Internal(format!("Invalid session_id: {}", e)))?;

        Ok(AuthSession {
            session_id,
            user_id: UserId::from_i64(self.user_id),
            created_at: self.created_at,
        })
    }
}
