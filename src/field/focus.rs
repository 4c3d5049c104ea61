use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// Delay between revealing the input and asking the host to focus it. The
/// input has to be laid out before a focus request can land on it.
pub const FOCUS_DELAY: Duration = Duration::from_nanos(1_000_000_000 / 6);

/// Focus change the field asks its host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub focused: bool,
}

/// Fire-once focus requests waiting for their deadline.
///
/// Requests carry no value: the desired focus is read from the field when a
/// deadline passes. Dropping the queue cancels whatever is still pending.
#[derive(Debug, Default)]
pub(crate) struct DeferredFocus {
    deadlines: VecDeque<Instant>,
}

impl DeferredFocus {
    pub(crate) fn schedule(&mut self, now: Instant) -> Instant {
        let due = now + FOCUS_DELAY;
        // Deadlines are monotonic as long as callers pass monotonic `now`.
        self.deadlines.push_back(due);
        tracing::debug!(pending = self.deadlines.len(), "focus request scheduled");
        due
    }

    /// Removes every deadline that has passed and returns how many fired.
    pub(crate) fn take_due(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.deadlines.front().is_some_and(|due| *due <= now) {
            self.deadlines.pop_front();
            fired += 1;
        }
        fired
    }

    pub(crate) fn pending(&self) -> usize {
        self.deadlines.len()
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.front().copied()
    }

    pub(crate) fn cancel(&mut self) {
        if !self.deadlines.is_empty() {
            tracing::debug!(
                cancelled = self.deadlines.len(),
                "pending focus requests cancelled"
            );
            self.deadlines.clear();
        }
    }
}

impl Drop for DeferredFocus {
    fn drop(&mut self) {
        self.cancel();
    }
}
