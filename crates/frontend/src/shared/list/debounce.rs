use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Trailing-edge debouncer.
///
/// Each `schedule` replaces the previous pending invocation: the token is
/// bumped first, and the timer callback only fires if its token is still
/// current after the quiet period. No timer handle is ever left dangling;
/// a superseded timer wakes up, fails the token check and exits.
#[derive(Clone, Copy)]
pub struct Debouncer {
    seq: StoredValue<u64>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            seq: StoredValue::new(0),
            delay_ms,
        }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        let token = match self.seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) {
            Some(token) => token,
            None => return,
        };

        let seq = self.seq;
        let delay_ms = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if seq.try_get_value() == Some(token) {
                callback();
            }
        });
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        self.seq.try_update_value(|seq| *seq += 1);
    }
}
