//! Timeout and bounded retry around one backend call.
//!
//! Both helpers take the timer as a parameter: the HTTP client passes
//! `gloo_timers` futures, tests pass ready/pending futures.

use contracts::shared::{ApiError, CallPolicy};
use futures::future::{select, Either};
use std::future::Future;

/// Resolves to [`ApiError::Timeout`] if `deadline` fires first.
pub async fn with_timeout<T, F, D>(timeout_ms: u32, call: F, deadline: D) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(call);
    futures::pin_mut!(deadline);
    match select(call, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}

/// Повторяет вызов по политике: пауза перед каждой следующей попыткой
/// удваивается, неповторяемые ошибки возвращаются сразу.
pub async fn with_retry<T, Op, Fut, Sleep, SleepFut>(
    policy: CallPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<T, ApiError>
where
    Op: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    Sleep: FnMut(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let mut attempt = 1;
    loop {
        let delay = policy.delay_before(attempt);
        if delay > 0 {
            sleep(delay).await;
        }
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if policy.should_retry(attempt, &e) => {
                log::warn!(
                    "attempt {}/{} failed: {}",
                    attempt,
                    policy.max_attempts,
                    e
                );
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn run(
        policy: CallPolicy,
        replies: Vec<Result<u32, ApiError>>,
    ) -> (Result<u32, ApiError>, Vec<u32>, Vec<u32>) {
        let replies = RefCell::new(VecDeque::from(replies));
        let attempts = RefCell::new(Vec::new());
        let sleeps = RefCell::new(Vec::new());

        let outcome = block_on(with_retry(
            policy,
            |attempt| {
                attempts.borrow_mut().push(attempt);
                let reply = replies
                    .borrow_mut()
                    .pop_front()
                    .unwrap_or(Err(ApiError::Network("exhausted".into())));
                ready(reply)
            },
            |ms| {
                sleeps.borrow_mut().push(ms);
                ready(())
            },
        ));
        (outcome, attempts.into_inner(), sleeps.into_inner())
    }

    #[test]
    fn test_retries_until_success() {
        let (outcome, attempts, sleeps) = run(
            CallPolicy::retrying(10_000, 3, 500),
            vec![
                Err(ApiError::Network("reset".into())),
                Err(ApiError::Status { status: 502 }),
                Ok(7),
            ],
        );
        assert_eq!(outcome, Ok(7));
        assert_eq!(attempts, vec![1, 2, 3]);
        assert_eq!(sleeps, vec![500, 1000]);
    }

    #[test]
    fn test_stops_at_max_attempts() {
        let (outcome, attempts, _) = run(
            CallPolicy::retrying(10_000, 3, 500),
            vec![
                Err(ApiError::Timeout(10_000)),
                Err(ApiError::Timeout(10_000)),
                Err(ApiError::Timeout(10_000)),
                Ok(1),
            ],
        );
        assert_eq!(outcome, Err(ApiError::Timeout(10_000)));
        assert_eq!(attempts.len(), 3);
    }

    #[test]
    fn test_client_errors_are_not_retried() {
        let (outcome, attempts, sleeps) = run(
            CallPolicy::retrying(10_000, 3, 500),
            vec![Err(ApiError::Rejected {
                status: 400,
                detail: "bad".into(),
            })],
        );
        assert!(matches!(outcome, Err(ApiError::Rejected { status: 400, .. })));
        assert_eq!(attempts, vec![1]);
        assert!(sleeps.is_empty());
    }

    #[test]
    fn test_single_policy_never_retries() {
        let (outcome, attempts, _) = run(
            CallPolicy::single(90_000),
            vec![Err(ApiError::Status { status: 503 }), Ok(1)],
        );
        assert_eq!(outcome, Err(ApiError::Status { status: 503 }));
        assert_eq!(attempts, vec![1]);
    }

    #[test]
    fn test_timeout_wins_over_pending_call() {
        let outcome: Result<u32, ApiError> =
            block_on(with_timeout(15_000, pending(), ready(())));
        assert_eq!(outcome, Err(ApiError::Timeout(15_000)));

        let outcome = block_on(with_timeout(15_000, ready(Ok(3)), pending()));
        assert_eq!(outcome, Ok(3));
    }
}
