//! Deferred Tasks
//!
//! Fire-and-forget timers on the browser event loop. Tasks cannot be
//! cancelled; everything scheduled here is an idempotent terminal effect.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Run `task` once after `delay_ms`
pub fn defer<F>(delay_ms: u32, task: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        task();
    });
}
