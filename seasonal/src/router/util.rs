use seasonal_core::{SeasonalError, Symbol};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with `crate::core::with_request_deadline`.
/// On timeout, the inner helper returns `SeasonalError::RequestTimeout("request")` which
/// call sites can remap to a more specific capability label as needed.
///
/// # Errors
/// Returns `RequestTimeout` if `deadline` elapses before every task completes.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, SeasonalError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}

/// Collapse the per-source errors for one symbol into a single outcome.
///
/// Rules:
/// - No errors at all, or only `NotFound` → `NotFound("history for {symbol}")`.
/// - Otherwise → the first error that is not `NotFound`, in source order.
#[must_use]
pub fn collapse_errors(symbol: &Symbol, errors: Vec<SeasonalError>) -> SeasonalError {
    errors
        .into_iter()
        .find(|e| !matches!(e, SeasonalError::NotFound { .. }))
        .unwrap_or_else(|| SeasonalError::not_found(format!("history for {symbol}")))
}
