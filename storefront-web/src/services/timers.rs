//! Runs sequencer timers on the browser event loop.

use gloo_timers::future::TimeoutFuture;
use shared::sequencer::{Timer, TimerToken};

/// Wait `timer.delay_ms`, then hand the token back.
///
/// Nothing is ever cleared here. The sequencer only honors its newest token,
/// so a superseded timer still wakes up but its callback is a no-op.
pub fn schedule(timer: Timer, on_elapsed: impl FnOnce(TimerToken) + 'static) {
    log::trace!("scheduling {:?} in {}ms", timer.token, timer.delay_ms);
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(timer.delay_ms).await;
        on_elapsed(timer.token);
    });
}
