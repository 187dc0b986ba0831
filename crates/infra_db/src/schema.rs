//! Claims table bootstrap
//!
//! Creates the `claims` table and its filter indexes when absent. Every
//! statement is `IF NOT EXISTS`, so this runs on every start.

use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// DDL for the claims table and its indexes
pub const CLAIMS_SCHEMA: &str = include_str!("../sql/claims.sql");

/// Ensures the claims table and indexes exist
pub async fn ensure_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::raw_sql(CLAIMS_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    info!("Claims schema ready");
    Ok(())
}
