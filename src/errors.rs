use diesel_async::pooled_connection::deadpool::PoolError;
use thiserror::Error;

/// Failures surfaced by repositories and units of work.
///
/// Errors from diesel and the connection pool are wrapped as-is, so callers
/// can still match on the underlying error (e.g. `diesel::result::Error::NotFound`).
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::Database(diesel::result::Error::NotFound)
        )
    }
}
