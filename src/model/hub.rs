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

//! Hub listing state.
//!
//! [`HubState`] owns everything the Hub view shows: the current rows, whether
//! a search is outstanding, and the transient "copied" acknowledgement. It
//! does not talk to the store directly. It hands out [`SearchRequest`]s for
//! the task worker and takes the completions back through
//! [`HubState::complete_search`].
//!
//! Searches are tagged with a generation. Only the completion for the most
//! recently issued request is applied, so a slow search can never overwrite
//! the results of a newer one.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    clipboard::ClipboardService,
    model::{TuneList, TuneRow, debounce::Debouncer, feedback::TimedFlag, rows_from_documents},
    routes::Route,
    util::url::UrlBuilder,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) generation: u64,
    pub(crate) query: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CopyOutcome {
    Copied(String),
    Unavailable,
}

pub(crate) struct HubState {
    rows: Vec<TuneRow>,
    is_loading: bool,
    copied: TimedFlag,
    copied_tune: Option<String>,
    notice: Option<String>,
    debouncer: Debouncer<String>,
    generation: u64,
    initial_load_issued: bool,
}

impl HubState {
    pub(crate) fn new(debounce: Duration, copy_feedback: Duration) -> Self {
        Self {
            rows: vec![],
            // The view shows the loading state until the first listing arrives
            is_loading: true,
            copied: TimedFlag::new(copy_feedback),
            copied_tune: None,
            notice: None,
            debouncer: Debouncer::new(debounce),
            generation: 0,
            initial_load_issued: false,
        }
    }

    pub(crate) fn rows(&self) -> &[TuneRow] {
        &self.rows
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn is_copied(&self, now: Instant) -> bool {
        self.copied.is_set(now)
    }

    /// The tune whose link was copied, while the acknowledgement lasts.
    pub(crate) fn copied_tune(&self, now: Instant) -> Option<&str> {
        if self.is_copied(now) {
            self.copied_tune.as_deref()
        } else {
            None
        }
    }

    /// The generation of the most recently issued search.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Continues numbering searches after `generation`, so completions for
    /// searches issued by an earlier Hub can never match this one.
    pub(crate) fn continue_after(&mut self, generation: u64) {
        self.generation = self.generation.max(generation);
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Issues the unfiltered listing when the view first becomes active.
    ///
    /// Returns `None` on every call after the first.
    pub(crate) fn load_initial(&mut self) -> Option<SearchRequest> {
        if self.initial_load_issued {
            return None;
        }
        self.initial_load_issued = true;

        Some(self.begin_search(None))
    }

    /// Schedules a search for `text` once typing has paused.
    pub(crate) fn on_search_text_changed(&mut self, text: &str, now: Instant) {
        self.debouncer.schedule(text.to_string(), now);
    }

    /// Releases the debounced search if its quiet period is over.
    pub(crate) fn poll_search(&mut self, now: Instant) -> Option<SearchRequest> {
        let text = self.debouncer.poll(now)?;
        let query = Some(text.trim().to_string()).filter(|q| !q.is_empty());

        Some(self.begin_search(query))
    }

    /// Re-runs a search immediately, bypassing the debounce.
    pub(crate) fn search_now(&mut self, text: &str) -> SearchRequest {
        self.debouncer.cancel();
        let query = Some(text.trim().to_string()).filter(|q| !q.is_empty());

        self.begin_search(query)
    }

    fn begin_search(&mut self, query: Option<String>) -> SearchRequest {
        self.generation += 1;
        self.is_loading = true;

        debug!(generation = self.generation, query = ?query, "search issued");

        SearchRequest {
            generation: self.generation,
            query,
        }
    }

    /// Applies the outcome of a search.
    ///
    /// Returns `false`, leaving the state untouched, when a newer search has
    /// been issued since `generation`.
    pub(crate) fn complete_search(&mut self, generation: u64, result: Result<TuneList, String>) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "discarding stale search result");
            return false;
        }

        self.is_loading = false;

        match result {
            Ok(list) => {
                self.rows = rows_from_documents(list);
                self.notice = None;
                info!(generation, rows = self.rows.len(), "search completed");
            }
            Err(e) => {
                warn!(generation, error = %e, "search failed");
                self.notice = Some(format!("Search failed: {}", e));
            }
        }

        true
    }

    /// Copies the deep link for `tune_id` and raises the copied flag.
    ///
    /// With no clipboard available nothing changes and
    /// [`CopyOutcome::Unavailable`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard rejects the write, in which case the
    /// copied flag is left as it was.
    pub(crate) fn copy_share_link(
        &mut self,
        tune_id: &str,
        urls: &UrlBuilder,
        clipboard: Option<&mut dyn ClipboardService>,
        now: Instant,
    ) -> Result<CopyOutcome> {
        let Some(clipboard) = clipboard else {
            return Ok(CopyOutcome::Unavailable);
        };

        let url = share_link(urls, tune_id);
        clipboard.write_text(&url)?;
        self.copied.trigger(now);
        self.copied_tune = Some(tune_id.to_string());

        info!(tune_id, url = %url, "share link copied");

        Ok(CopyOutcome::Copied(url))
    }

    /// Clears expired timed state.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.copied.expire(now);
    }

    /// The earliest instant at which the state changes on its own.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match (self.debouncer.deadline(), self.copied.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancels pending work when the view goes away. Any search still in
    /// flight is invalidated.
    pub(crate) fn teardown(&mut self) {
        self.debouncer.cancel();
        self.copied.clear();
        self.copied_tune = None;
        self.generation += 1;
        self.is_loading = false;
    }
}

/// The absolute URL of a tune's detail view.
pub(crate) fn share_link(urls: &UrlBuilder, tune_id: &str) -> String {
    urls.build_full_url(&[Route::tune(tune_id).path()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clipboard::testing::RecordingClipboard, model::fixtures::tune};

    const DEBOUNCE: Duration = Duration::from_millis(300);
    const FEEDBACK: Duration = Duration::from_millis(1000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hub() -> HubState {
        HubState::new(DEBOUNCE, FEEDBACK)
    }

    fn urls() -> UrlBuilder {
        UrlBuilder::new("https://app.example.com").unwrap()
    }

    fn listing(ids: &[(&str, Option<&str>)]) -> TuneList {
        TuneList {
            documents: ids.iter().map(|(id, name)| tune(id, *name)).collect(),
        }
    }

    fn keys(hub: &HubState) -> Vec<&str> {
        hub.rows().iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn initial_load_is_unfiltered_and_issued_once() {
        let mut hub = hub();

        let request = hub.load_initial().unwrap();
        assert_eq!(request.query, None);
        assert!(hub.is_loading());
        assert_eq!(hub.load_initial(), None);
    }

    #[test]
    fn typing_burst_issues_one_search_with_last_text() {
        let start = Instant::now();
        let mut hub = hub();

        for (i, text) in ["c", "ce", "cel", "celi", "celica"].iter().enumerate() {
            hub.on_search_text_changed(text, start + ms(i as u64 * 50));
        }

        let issued: Vec<SearchRequest> = (0..=2000)
            .step_by(25)
            .filter_map(|t| hub.poll_search(start + ms(t)))
            .collect();

        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].query.as_deref(), Some("celica"));
    }

    #[test]
    fn blank_search_text_lists_everything() {
        let start = Instant::now();
        let mut hub = hub();

        hub.on_search_text_changed("   ", start);
        let request = hub.poll_search(start + DEBOUNCE).unwrap();
        assert_eq!(request.query, None);
    }

    #[test]
    fn completion_filters_unpublished_and_clears_loading() {
        let mut hub = hub();
        let request = hub.load_initial().unwrap();

        let applied = hub.complete_search(
            request.generation,
            Ok(listing(&[("a", Some("Supra")), ("b", None), ("c", Some("MR2"))])),
        );

        assert!(applied);
        assert!(!hub.is_loading());
        assert_eq!(keys(&hub), vec!["a", "c"]);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let start = Instant::now();
        let mut hub = hub();

        hub.on_search_text_changed("sup", start);
        let first = hub.poll_search(start + DEBOUNCE).unwrap();
        hub.on_search_text_changed("supra", start + ms(400));
        let second = hub.poll_search(start + ms(700)).unwrap();
        assert!(second.generation > first.generation);

        assert!(hub.complete_search(second.generation, Ok(listing(&[("new", Some("Supra"))]))));
        assert!(!hub.complete_search(first.generation, Ok(listing(&[("old", Some("Super7"))]))));

        assert_eq!(keys(&hub), vec!["new"]);
        assert!(!hub.is_loading());
    }

    #[test]
    fn loading_stays_on_while_latest_search_is_outstanding() {
        let start = Instant::now();
        let mut hub = hub();

        let first = hub.load_initial().unwrap();
        hub.on_search_text_changed("mx", start);
        let _second = hub.poll_search(start + DEBOUNCE).unwrap();

        hub.complete_search(first.generation, Ok(listing(&[("a", Some("MX-5"))])));
        assert!(hub.is_loading());
        assert!(hub.rows().is_empty());
    }

    #[test]
    fn failed_search_keeps_rows_and_reports_notice() {
        let mut hub = hub();
        let request = hub.load_initial().unwrap();
        hub.complete_search(request.generation, Ok(listing(&[("a", Some("Supra"))])));

        let retry = hub.search_now("supra");
        assert!(hub.complete_search(retry.generation, Err("database is locked".to_string())));

        assert!(!hub.is_loading());
        assert_eq!(keys(&hub), vec!["a"]);
        assert_eq!(hub.notice(), Some("Search failed: database is locked"));
    }

    #[test]
    fn successful_search_clears_previous_notice() {
        let mut hub = hub();
        let request = hub.load_initial().unwrap();
        hub.complete_search(request.generation, Err("boom".to_string()));

        let retry = hub.search_now("");
        hub.complete_search(retry.generation, Ok(TuneList::default()));
        assert_eq!(hub.notice(), None);
    }

    #[test]
    fn copy_writes_deep_link_and_raises_flag_for_one_second() {
        let start = Instant::now();
        let mut hub = hub();
        let mut clipboard = RecordingClipboard::default();

        let outcome = hub
            .copy_share_link("abc123", &urls(), Some(&mut clipboard), start)
            .unwrap();

        let expected = "https://app.example.com/#/t/abc123/tune";
        assert_eq!(outcome, CopyOutcome::Copied(expected.to_string()));
        assert_eq!(clipboard.contents, vec![expected]);
        assert!(hub.is_copied(start));
        assert!(hub.is_copied(start + ms(999)));
        assert!(!hub.is_copied(start + FEEDBACK));
    }

    #[test]
    fn copied_acknowledgement_names_the_copied_tune() {
        let start = Instant::now();
        let mut hub = hub();
        let mut clipboard = RecordingClipboard::default();

        hub.copy_share_link("b", &urls(), Some(&mut clipboard), start).unwrap();
        assert_eq!(hub.copied_tune(start), Some("b"));

        hub.copy_share_link("a", &urls(), Some(&mut clipboard), start + ms(500)).unwrap();
        assert_eq!(hub.copied_tune(start + ms(1200)), Some("a"));
        assert_eq!(hub.copied_tune(start + ms(1500)), None);
    }

    #[test]
    fn numbering_continues_after_an_earlier_hub() {
        let mut hub = hub();
        hub.continue_after(5);

        let request = hub.load_initial().unwrap();
        assert_eq!(request.generation, 6);
        assert!(!hub.complete_search(5, Ok(listing(&[("old", Some("Supra"))]))));
        assert!(hub.rows().is_empty());
    }

    #[test]
    fn copy_without_clipboard_changes_nothing() {
        let start = Instant::now();
        let mut hub = hub();

        let outcome = hub.copy_share_link("abc123", &urls(), None, start).unwrap();

        assert_eq!(outcome, CopyOutcome::Unavailable);
        assert!(!hub.is_copied(start));
        assert_eq!(hub.next_deadline(), None);
    }

    #[test]
    fn failed_clipboard_write_leaves_flag_down() {
        let start = Instant::now();
        let mut hub = hub();
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };

        assert!(hub.copy_share_link("abc123", &urls(), Some(&mut clipboard), start).is_err());
        assert!(!hub.is_copied(start));
    }

    #[test]
    fn next_deadline_is_the_earliest_pending_change() {
        let start = Instant::now();
        let mut hub = hub();
        let mut clipboard = RecordingClipboard::default();

        hub.copy_share_link("a", &urls(), Some(&mut clipboard), start).unwrap();
        assert_eq!(hub.next_deadline(), Some(start + FEEDBACK));

        hub.on_search_text_changed("x", start + ms(100));
        assert_eq!(hub.next_deadline(), Some(start + ms(400)));

        hub.poll_search(start + ms(400));
        hub.tick(start + FEEDBACK);
        assert_eq!(hub.next_deadline(), None);
    }

    #[test]
    fn teardown_cancels_timers_and_in_flight_search() {
        let start = Instant::now();
        let mut hub = hub();
        let mut clipboard = RecordingClipboard::default();

        let request = hub.load_initial().unwrap();
        hub.copy_share_link("a", &urls(), Some(&mut clipboard), start).unwrap();
        hub.on_search_text_changed("x", start);

        hub.teardown();

        assert!(!hub.is_copied(start));
        assert_eq!(hub.next_deadline(), None);
        assert_eq!(hub.poll_search(start + ms(5000)), None);
        assert!(!hub.complete_search(request.generation, Ok(listing(&[("a", Some("Supra"))]))));
    }
}
