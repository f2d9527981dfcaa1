//! Simulated network latency.

use std::time::Duration;

/// Sleep for `delay` on whatever timer the target has. Zero returns at once.
pub async fn simulate(delay: Duration) {
    if delay.is_zero() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
