//! Batch dispatch of independent requests.
//!
//! A batch is dispatched in full before any response is inspected. Up to
//! `max_in_flight` requests run at once on scoped threads; results always
//! come back in request order, so a sequential run (`max_in_flight = 1`)
//! is indistinguishable from a concurrent one.

use crate::config::RetryConfig;
use crate::error::{SyncError, SyncResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use std::thread;
use tracing::debug;

/// Executes one request, retrying transient failures per `retry`.
///
/// Transient failures are retryable transport errors and 5xx statuses.
/// The last outcome is returned once attempts are exhausted.
pub fn execute_with_retry<C>(
    client: &C,
    request: &HttpRequest,
    retry: &RetryConfig,
) -> SyncResult<HttpResponse>
where
    C: HttpClient + ?Sized,
{
    let max_attempts = retry.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        let result = client.execute(request);
        let transient = match &result {
            Ok(response) => response.status >= 500,
            Err(err) => err.is_retryable(),
        };
        attempt += 1;
        if !transient || attempt >= max_attempts {
            return result;
        }

        let delay = retry.delay_for_attempt(attempt);
        debug!(
            method = %request.method,
            path = %request.path,
            attempt,
            ?delay,
            "retrying transient failure"
        );
        thread::sleep(delay);
    }
}

/// Executes a batch of independent requests.
///
/// Returns one result per request, in request order.
pub fn dispatch_all<C>(
    client: &C,
    requests: &[HttpRequest],
    max_in_flight: usize,
    retry: &RetryConfig,
) -> Vec<SyncResult<HttpResponse>>
where
    C: HttpClient + ?Sized,
{
    if max_in_flight <= 1 || requests.len() <= 1 {
        return requests
            .iter()
            .map(|request| execute_with_retry(client, request, retry))
            .collect();
    }

    let mut results = Vec::with_capacity(requests.len());
    for chunk in requests.chunks(max_in_flight) {
        thread::scope(|scope| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|request| scope.spawn(move || execute_with_retry(client, request, retry)))
                .collect();

            for handle in handles {
                results.push(handle.join().unwrap_or_else(|_| {
                    Err(SyncError::transport_fatal("request worker panicked"))
                }));
            }
        });
    }
    results
}
