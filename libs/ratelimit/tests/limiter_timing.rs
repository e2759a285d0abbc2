//! Timing behavior of the token bucket under a paused tokio clock
//!
//! All durations here are simulated: the clock only moves when the
//! runtime advances it, so the assertions are exact up to floating-point
//! rounding in the refill arithmetic.

use std::sync::Arc;
use std::time::Duration;

use ratelimit::{create_limiters, LimiterConfig, PoolConfig, TokenBucketLimiter};
use tokio::time::Instant;

fn limiter(tokens_per_period: f64, period_secs: f64) -> Arc<TokenBucketLimiter> {
    Arc::new(TokenBucketLimiter::new(LimiterConfig::new(tokens_per_period, period_secs)).unwrap())
}

#[tokio::test(start_paused = true)]
async fn first_acquire_is_immediate() {
    let limiter = limiter(1.0, 1.0);

    let start = Instant::now();
    limiter.acquire().await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn exhausted_bucket_blocks_for_one_token_time() {
    // 1 token per second: after draining, the next admission costs ~1000ms
    let limiter = limiter(1.0, 1.0);
    limiter.acquire().await;

    let start = Instant::now();
    limiter.acquire().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(1000), "resolved early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(1050), "waited too long: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn waiter_stays_pending_until_refill() {
    let limiter = limiter(1.0, 1.0);
    limiter.acquire().await;

    let waiter = tokio::spawn({
        let limiter = Arc::clone(&limiter);
        async move { limiter.acquire().await }
    });

    // Let the waiter enter its computed sleep before moving the clock
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(500)).await;
    assert!(!waiter.is_finished(), "admitted before a token regenerated");

    tokio::time::advance(Duration::from_millis(600)).await;
    waiter.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn partial_refill_admits_after_one_token_regenerates() {
    // 2 tokens per 2 seconds = 0.001 tokens/ms, so one token takes 500ms
    let limiter = limiter(2.0, 2.0);
    limiter.acquire().await;
    limiter.acquire().await;

    let start = Instant::now();
    limiter.acquire().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(500), "resolved early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(550), "waited too long: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn idle_bucket_never_banks_beyond_capacity() {
    let limiter = limiter(3.0, 1.0);
    limiter.acquire().await;

    // Sit idle for many periods; the balance must clamp at capacity
    tokio::time::advance(Duration::from_secs(60)).await;

    let available = limiter.available_tokens();
    assert!(
        (available - 3.0).abs() < 1e-6,
        "expected a full bucket, got {available}"
    );
}

#[tokio::test(start_paused = true)]
async fn concurrent_acquires_never_double_spend() {
    // Capacity 2, regenerating 1 token/s: of four concurrent callers two
    // are admitted immediately and the rest one token-time apart.
    let limiter = limiter(2.0, 2.0);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let limiter = Arc::clone(&limiter);
        handles.push(tokio::spawn(async move {
            let start = Instant::now();
            limiter.acquire().await;
            start.elapsed()
        }));
    }

    let mut elapsed: Vec<Duration> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    elapsed.sort();

    assert!(elapsed[0] < Duration::from_millis(50), "burst admission: {elapsed:?}");
    assert!(elapsed[1] < Duration::from_millis(50), "burst admission: {elapsed:?}");
    assert!(
        elapsed[2] >= Duration::from_millis(1000) && elapsed[2] < Duration::from_millis(1100),
        "third admission should cost ~1 token-time: {elapsed:?}"
    );
    assert!(
        elapsed[3] >= Duration::from_millis(2000) && elapsed[3] < Duration::from_millis(2200),
        "fourth admission should cost ~2 token-times: {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn pool_members_drain_independently() {
    let pool = create_limiters(&PoolConfig::new(5.0, 3.0, 60.0)).unwrap();

    for _ in 0..5 {
        pool.high_priority().acquire().await;
    }

    assert!(pool.high_priority().available_tokens() < 1.0);
    let low = pool.low_priority().available_tokens();
    assert!((low - 3.0).abs() < 1e-6, "low-priority balance changed: {low}");
}

#[tokio::test(start_paused = true)]
async fn detailed_logging_does_not_change_timing() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    let limiter = Arc::new(
        TokenBucketLimiter::new(
            LimiterConfig::new(1.0, 1.0)
                .with_name("verbose")
                .with_detailed_logging(true),
        )
        .unwrap(),
    );

    let start = Instant::now();
    limiter.acquire().await;
    limiter.acquire().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(1000), "resolved early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(1050), "waited too long: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn run_throttled_passes_success_through_and_consumes_a_token() {
    let limiter = limiter(5.0, 60.0);

    let result: Result<u32, String> = limiter.run_throttled(|| async { Ok(42) }).await;

    assert_eq!(result.unwrap(), 42);
    let available = limiter.available_tokens();
    assert!((available - 4.0).abs() < 1e-6, "expected one token spent, got {available}");
}

#[tokio::test(start_paused = true)]
async fn run_throttled_propagates_failure_and_still_consumes_a_token() {
    let limiter = limiter(5.0, 60.0);

    let result: Result<u32, String> = limiter
        .run_throttled(|| async { Err("upstream exploded".to_string()) })
        .await;

    assert_eq!(result.unwrap_err(), "upstream exploded");
    let available = limiter.available_tokens();
    assert!((available - 4.0).abs() < 1e-6, "expected one token spent, got {available}");
}
