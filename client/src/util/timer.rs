//! Browser timers.

#![allow(clippy::unused_async)]

/// Resolve after `ms` milliseconds. Resolves immediately outside hydrate.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
