//! Persistence of extracted job records.

use async_trait::async_trait;
use diesel::ExpressionMethods;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::db::{DbPool, PoolError};
use crate::models::JobRecord;
use crate::schema::jobs;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Database error: {0}")]
    DbError(#[from] diesel::result::Error),
    #[error("Database pool error: {0}")]
    DbPoolError(#[from] PoolError),
}

/// Destination for job records, keyed by `job_id`.
#[async_trait]
pub trait JobSink {
    /// Inserts the record, or overwrites every non-key column of the row with the same `job_id`.
    async fn upsert(&mut self, record: &JobRecord) -> Result<(), SinkError>;
}

/// Writes job records into the `jobs` table of a Postgres database.
pub struct PgJobSink {
    pool: DbPool,
}

impl PgJobSink {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl JobSink for PgJobSink {
    async fn upsert(&mut self, record: &JobRecord) -> Result<(), SinkError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(jobs::table)
            .values(record)
            .on_conflict(jobs::job_id)
            .do_update()
            .set((
                jobs::job_title.eq(excluded(jobs::job_title)),
                jobs::company.eq(excluded(jobs::company)),
                jobs::salary_min.eq(excluded(jobs::salary_min)),
                jobs::salary_max.eq(excluded(jobs::salary_max)),
                jobs::yrs_of_exp_min.eq(excluded(jobs::yrs_of_exp_min)),
                jobs::yrs_of_exp_max.eq(excluded(jobs::yrs_of_exp_max)),
                jobs::job_city.eq(excluded(jobs::job_city)),
                jobs::due_date.eq(excluded(jobs::due_date)),
                jobs::jd.eq(excluded(jobs::jd)),
            ))
            .execute(&mut conn)
            .await?;

        tracing::debug!("Upserted job {}", record.job_id);
        Ok(())
    }
}
