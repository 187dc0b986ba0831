//! Claims repository implementation
//!
//! This module provides database access for the `claims` table: CRUD,
//! the filtered listing, and the aggregate reads behind stats and charts.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimQuery, StatusCounts};

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str =
    "id, claimant_name, location, area, status, date_submitted, remarks";

/// Database row for a claim
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ClaimRow {
    pub id: String,
    pub claimant_name: String,
    pub location: String,
    pub area: f64,
    pub status: String,
    pub date_submitted: NaiveDate,
    pub remarks: String,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: ClaimId::new(row.id),
            claimant_name: row.claimant_name,
            location: row.location,
            area: row.area,
            status: row.status,
            date_submitted: row.date_submitted,
            remarks: row.remarks,
        }
    }
}

impl From<Claim> for ClaimRow {
    fn from(claim: Claim) -> Self {
        ClaimRow {
            id: claim.id.into_inner(),
            claimant_name: claim.claimant_name,
            location: claim.location,
            area: claim.area,
            status: claim.status,
            date_submitted: claim.date_submitted,
            remarks: claim.remarks,
        }
    }
}

/// Repository for the claims table
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a claim by its identifier
    pub async fn get_by_id(&self, id: &str) -> Result<ClaimRow, DatabaseError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE id = $1");
        sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Claim", id))
    }

    /// Inserts a claim
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` when the id is taken
    pub async fn insert(&self, row: ClaimRow) -> Result<ClaimRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO claims ({CLAIM_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CLAIM_COLUMNS}"
        );
        sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(&row.id)
            .bind(&row.claimant_name)
            .bind(&row.location)
            .bind(row.area)
            .bind(&row.status)
            .bind(row.date_submitted)
            .bind(&row.remarks)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match DatabaseError::from(e) {
                DatabaseError::DuplicateEntry(_) => {
                    DatabaseError::DuplicateEntry(format!("Claim id {} already exists", row.id))
                }
                other => other,
            })
    }

    /// Read-modify-write of one claim under a row lock
    ///
    /// `apply` receives the locked row and returns its replacement. An error
    /// from `apply` rolls the transaction back and leaves the row untouched.
    pub async fn update<F, E>(&self, id: &str, apply: F) -> Result<ClaimRow, E>
    where
        F: FnOnce(ClaimRow) -> Result<ClaimRow, E>,
        E: From<DatabaseError>,
    {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;

        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(DatabaseError::from)?
            .ok_or_else(|| DatabaseError::not_found("Claim", id))?;

        let next = apply(current)?;

        let sql = format!(
            "UPDATE claims SET claimant_name = $2, location = $3, area = $4, status = $5, \
             date_submitted = $6, remarks = $7 WHERE id = $1 RETURNING {CLAIM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id)
            .bind(&next.claimant_name)
            .bind(&next.location)
            .bind(next.area)
            .bind(&next.status)
            .bind(next.date_submitted)
            .bind(&next.remarks)
            .fetch_one(&mut *tx)
            .await
            .map_err(DatabaseError::from)?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;
        Ok(row)
    }

    /// Hard-deletes a claim
    pub async fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Claim", id));
        }
        Ok(())
    }

    /// Runs the filtered, sorted, paginated listing
    ///
    /// Returns the page of rows and the number of rows matching the filters.
    pub async fn find(&self, query: &ClaimQuery) -> Result<(Vec<ClaimRow>, u64), DatabaseError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM claims");
        push_filters(&mut count, query);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {CLAIM_COLUMNS} FROM claims"));
        push_filters(&mut select, query);
        // Sort column comes from a closed enum, never from request text
        select.push(format!(
            " ORDER BY {} {}, id ASC",
            query.sort_by.column(),
            query.order.keyword()
        ));
        select.push(" LIMIT ").push_bind(query.limit() as i64);
        select.push(" OFFSET ").push_bind(query.offset() as i64);

        debug!(sql = select.sql(), "Listing claims");
        let rows = select.build_query_as::<ClaimRow>().fetch_all(&self.pool).await?;

        Ok((rows, total.max(0) as u64))
    }

    /// Most recently submitted claims, newest first
    pub async fn recent(&self, limit: u32) -> Result<Vec<ClaimRow>, DatabaseError> {
        let sql = format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY date_submitted DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Row counts by exact status value
    pub async fn count_by_status(&self) -> Result<StatusCounts, DatabaseError> {
        let (total, approved, pending, rejected): (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE status = 'Approved'),
                COUNT(*) FILTER (WHERE status = 'Pending'),
                COUNT(*) FILTER (WHERE status = 'Rejected')
            FROM claims
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StatusCounts {
            total: total as u64,
            approved: approved as u64,
            pending: pending as u64,
            rejected: rejected as u64,
        })
    }

    /// Every location, in id order
    pub async fn locations(&self) -> Result<Vec<String>, DatabaseError> {
        let locations = sqlx::query_scalar::<_, String>("SELECT location FROM claims ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(locations)
    }

    /// Every id beginning with `prefix`
    pub async fn ids_with_prefix(&self, prefix: &str) -> Result<Vec<String>, DatabaseError> {
        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM claims WHERE strpos(id, $1) = 1")
            .bind(prefix)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    /// Number of stored claims
    pub async fn count(&self) -> Result<u64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM claims")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

/// Appends the WHERE clause for the query's filters
///
/// Substring tests use `strpos` so `%` and `_` in user input match literally.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ClaimQuery) {
    builder.push(" WHERE TRUE");

    if let Some(search) = &query.search {
        builder
            .push(" AND (strpos(lower(claimant_name), lower(")
            .push_bind(search.clone())
            .push(")) > 0 OR strpos(lower(id), lower(")
            .push_bind(search.clone())
            .push(")) > 0)");
    }
    if let Some(status) = &query.status {
        builder.push(" AND status = ").push_bind(status.clone());
    }
    if let Some(location) = &query.location {
        builder
            .push(" AND strpos(location, ")
            .push_bind(location.clone())
            .push(") > 0");
    }
}
