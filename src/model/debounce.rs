// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Trailing-edge debounce.
//!
//! The debouncer holds at most one pending value. Every call to
//! [`Debouncer::schedule`] replaces that value and pushes its deadline back,
//! so only the last call of a burst is released once the input has been quiet
//! for the full interval.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct Debouncer<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    pub(crate) fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.interval));
    }

    /// Returns the pending value if its quiet period has elapsed by `now`.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((value, due)) if now >= due => Some(value),
            pending => {
                self.pending = pending;
                None
            }
        }
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_releases_only_the_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(INTERVAL);

        debouncer.schedule("s", start);
        debouncer.schedule("su", start + ms(90));
        debouncer.schedule("sup", start + ms(180));
        debouncer.schedule("supr", start + ms(270));

        let mut fired = vec![];
        for step in (0..=1200).step_by(10) {
            if let Some(value) = debouncer.poll(start + ms(step)) {
                fired.push(value);
            }
        }

        assert_eq!(fired, vec!["supr"]);
    }

    #[test]
    fn nothing_fires_before_the_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(INTERVAL);

        debouncer.schedule(1, start);
        assert_eq!(debouncer.poll(start + ms(299)), None);
        assert_eq!(debouncer.deadline(), Some(start + INTERVAL));
        assert_eq!(debouncer.poll(start + INTERVAL), Some(1));
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn later_call_pushes_the_deadline_back() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(INTERVAL);

        debouncer.schedule(1, start);
        debouncer.schedule(2, start + ms(200));
        assert_eq!(debouncer.poll(start + ms(400)), None);
        assert_eq!(debouncer.poll(start + ms(500)), Some(2));
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(INTERVAL);

        debouncer.schedule(1, start);
        assert_eq!(debouncer.poll(start + ms(300)), Some(1));
        debouncer.schedule(2, start + ms(700));
        assert_eq!(debouncer.poll(start + ms(1000)), Some(2));
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(INTERVAL);

        debouncer.schedule(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + ms(1000)), None);
    }
}
