use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::{AsyncPgConnection, SimpleAsyncConnection};

pub type PoolError = deadpool::managed::PoolError<diesel_async::pooled_connection::PoolError>;

pub type DbPool = Pool<AsyncPgConnection>;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionPoolError {
    #[error("Failed to build connection pool: {0}")]
    BuildError(#[from] deadpool::managed::BuildError),
    #[error("Failed to establish initial database connection: {0}")]
    ConnectionError(#[from] PoolError),
    #[error("Failed to run setup script: {0}")]
    ScriptError(#[from] diesel::result::Error),
}

pub async fn establish_connection_pool(database_url: &str) -> Result<DbPool, ConnectionPoolError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder(config).max_size(1).build()?;

    // Fail fast if the DB is unavailable.
    let _conn = pool.get().await?;

    Ok(pool)
}

/// Runs a raw SQL setup script (e.g. `sql/init.sql`) against the database.
/// The script may hold several statements.
pub async fn apply_init_script(pool: &DbPool, script: &str) -> Result<(), ConnectionPoolError> {
    let mut conn = pool.get().await?;
    conn.batch_execute(script).await?;
    tracing::info!("Applied setup script ({} bytes)", script.len());
    Ok(())
}
