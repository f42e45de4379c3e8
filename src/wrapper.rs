use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::types::ToSql;

/// The database handle a [`TableManager`](crate::TableManager) executes on.
///
/// Connection lifecycle, pooling, and deadlines belong to the implementor.
/// Errors are handed back to callers untouched, so `Error` is whatever the
/// underlying driver reports.
#[async_trait::async_trait]
pub trait Wrapper: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;
    /// Executes one statement and returns the row count from its command tag.
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64, Self::Error>;
}

#[async_trait::async_trait]
impl Wrapper for Client {
    type Error = tokio_postgres::Error;
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64, Self::Error> {
        self.execute(sql, params).await
    }
}

#[async_trait::async_trait]
impl<W> Wrapper for Arc<W>
where
    W: Wrapper + ?Sized,
{
    type Error = W::Error;
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64, Self::Error> {
        self.as_ref().exec(sql, params).await
    }
}
