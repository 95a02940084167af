//! # vitrina-store
//!
//! Executes sanitized `SELECT` statements through a remote read-only
//! procedure. The executor keeps no local state and never rewrites the SQL it
//! is handed.

mod error;
mod supabase;

pub use error::ExecutionError;
pub use supabase::SupabaseExecutor;

use std::future::Future;
use vitrina_core::QueryResult;

/// One remote execution of an already-sanitized statement.
///
/// Implementations must be safe for concurrent use by independent requests.
pub trait QueryExecutor: Send + Sync {
    /// Execute `sql` and return its rows.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::Rejected`] with the datastore's message when
    /// the statement fails, and other variants for transport, timeout, or
    /// payload failures.
    fn execute(
        &self,
        sql: &str,
    ) -> impl Future<Output = Result<QueryResult, ExecutionError>> + Send;
}

impl<T: QueryExecutor> QueryExecutor for std::sync::Arc<T> {
    fn execute(
        &self,
        sql: &str,
    ) -> impl Future<Output = Result<QueryResult, ExecutionError>> + Send {
        (**self).execute(sql)
    }
}
