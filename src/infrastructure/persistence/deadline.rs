//! Per-call deadline for store operations.

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Runs a store operation under `timeout`.
///
/// When the deadline fires the operation future is dropped, which cancels the
/// in-flight engine call and returns its connection to the pool.
pub async fn with_deadline<T, F>(
    timeout: Duration,
    op: &'static str,
    fut: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(
                op,
                timeout_ms = timeout.as_millis() as u64,
                "Storage call timed out"
            );
            Err(AppError::storage(format!(
                "{}: query timed out after {}ms",
                op,
                timeout.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let result = with_deadline(Duration::from_secs(1), "test.op", async { Ok(42) }).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_passes_through_inner_error() {
        let result: Result<(), AppError> =
            with_deadline(Duration::from_secs(1), "test.op", async {
                Err(AppError::not_found("ex1"))
            })
            .await;

        assert!(matches!(result, Err(AppError::AliasNotFound { .. })));
    }

    #[tokio::test]
    async fn test_elapsed_deadline_is_a_storage_error() {
        let result: Result<(), AppError> =
            with_deadline(Duration::from_millis(10), "test.op", async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;

        match result {
            Err(AppError::Storage { message }) => assert!(message.contains("timed out")),
            other => panic!("expected storage error, got {:?}", other),
        }
    }
}
