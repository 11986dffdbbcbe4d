use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tinylink_core::error::StorageError;
use tinylink_core::repository::{LinkRecord, ReadRepository, Repository, Result};
use tinylink_core::shortcode::ShortCode;
use tracing::info;

/// Schema for the `link_records` table. Safe to apply more than once.
pub const LINK_RECORDS_DDL: &str = include_str!("../ddl/mysql/link_records.sql");

/// MySQL implementation of the repository contract.
///
/// `short_code` is the table's primary key with a binary collation, so the
/// database enforces case-sensitive uniqueness and `create` maps a duplicate
/// key error to [`StorageError::Conflict`].
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `link_records` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(LINK_RECORDS_DDL)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        info!("link_records schema is in place");
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        let row = sqlx::query(
            r#"
            SELECT original_url
            FROM link_records
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;

        Ok(Some(LinkRecord {
            short_code: code.clone(),
            original_url,
        }))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM link_records
            WHERE short_code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn create(&self, record: LinkRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO link_records (short_code, original_url)
            VALUES (?, ?)
            "#,
        )
        .bind(record.short_code.as_str())
        .bind(&record.original_url)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(record.short_code.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}
