/// Host-driven one-shot timer.
///
/// Nothing runs on its own: the owner asks for [`DelayTimer::deadline_ms`],
/// lets its event loop sleep until then, and calls [`DelayTimer::poll`]. A
/// fired or cancelled timer stays disarmed until the next [`DelayTimer::arm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelayTimer {
    armed: Option<ArmedTimer>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ArmedTimer {
    due_ms: u64,
    token: u32,
}

impl DelayTimer {
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Arms the timer for `now_ms + delay_ms`, tagged with `token`.
    ///
    /// A pending deadline is cancelled first, so at most one is ever armed.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64, token: u32) {
        if let Some(stale) = self.armed.take() {
            log::warn!(
                "timer re-armed while pending (token={} due_ms={})",
                stale.token,
                stale.due_ms
            );
        }
        self.armed = Some(ArmedTimer {
            due_ms: now_ms.saturating_add(delay_ms),
            token,
        });
    }

    /// Returns whether a pending deadline was dropped. Safe to call repeatedly.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.armed.map(|armed| armed.due_ms)
    }

    /// Fires at most once: yields the token when `now_ms` reached the deadline.
    pub fn poll(&mut self, now_ms: u64) -> Option<u32> {
        match self.armed {
            Some(armed) if now_ms >= armed.due_ms => {
                self.armed = None;
                Some(armed.token)
            }
            _ => None,
        }
    }
}
