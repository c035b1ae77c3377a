use std::future::Future;
use std::time::Duration;

/// Resolves `fut` no earlier than `floor` after the call.
///
/// The request and the delay run concurrently, so a slow request is not
/// delayed further. A zero floor awaits `fut` directly.
pub async fn with_latency_floor<F: Future>(fut: F, floor: Duration) -> F::Output {
    if floor.is_zero() {
        return fut.await;
    }
    let (output, ()) = tokio::join!(fut, tokio::time::sleep(floor));
    output
}
