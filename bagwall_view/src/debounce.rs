// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Holds at most one pending request until it has been quiet for a delay.
///
/// A new request replaces the pending one and restarts the delay. Time is
/// passed in explicitly, so any clock or timer can drive it.
///
/// ```
/// use bagwall_view::Debouncer;
///
/// let mut search = Debouncer::new(200);
/// search.request("ke", 1_000);
/// search.request("kenya", 1_150);
/// assert_eq!(search.poll(1_300), None);
/// assert_eq!(search.poll(1_350), Some("kenya"));
/// assert_eq!(search.poll(2_000), None);
/// ```
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    /// Creates an empty debouncer with the given quiet time.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Quiet time in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedules `value`, replacing any pending request.
    pub fn request(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.delay_ms)));
    }

    /// Returns the pending value once its delay has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now_ms >= *due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drops the pending request.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a request waits.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn fires_once_after_delay() {
        let mut d = Debouncer::new(200);
        d.request(1, 0);
        assert!(d.is_pending());
        assert_eq!(d.poll(199), None);
        assert_eq!(d.poll(200), Some(1));
        assert!(!d.is_pending());
        assert_eq!(d.poll(400), None);
    }

    #[test]
    fn new_request_restarts_delay() {
        let mut d = Debouncer::new(200);
        d.request("a", 0);
        d.request("ab", 150);
        assert_eq!(d.poll(250), None);
        assert_eq!(d.poll(350), Some("ab"));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d = Debouncer::new(10);
        d.request((), 0);
        d.cancel();
        assert_eq!(d.poll(100), None);
    }
}
