//! Periodic timers bound to a component's lifetime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Call `tick` right away and then every `period_ms` milliseconds.
///
/// The loop ends once the owning component is cleaned up. `tick` is
/// expected to spawn its own request, so a slow request never delays the
/// next tick.
pub fn use_interval(period_ms: u32, tick: impl Fn() + 'static) {
    let stopped = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stopped);
    on_cleanup(move || flag.store(true, Ordering::Relaxed));

    tick();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            if stopped.load(Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });
}
