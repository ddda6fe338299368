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

//! Photo search state.
//!
//! [`Search`] owns the query text, the current page and the photos received so
//! far. It never performs a request itself: it hands out [`PageRequest`]
//! tickets and merges whatever comes back for them.
//!
//! Every submitted search starts a new generation. A response is only merged
//! if its ticket belongs to the current generation, so results for an older
//! query can never overwrite or extend the results of a newer one. Pages of
//! the same generation are merged in the order they arrive.

use tracing::debug;

use crate::model::Photo;

/// When to stop asking for further pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum PaginationPolicy {
    /// An empty page means the listing is exhausted.
    #[default]
    StopOnEmptyPage,
    /// There is always another page.
    Endless,
}

/// The query and page a request was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageRequest {
    pub(crate) query: String,
    pub(crate) page: u32,
    pub(crate) generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MergeOutcome {
    Replaced,
    Appended,
    /// The response belonged to a superseded search and was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub(crate) struct Search {
    query_text: String,
    page_number: u32,
    results: Vec<Photo>,
    generation: u64,
    exhausted: bool,
    policy: PaginationPolicy,
}

impl Search {
    pub(crate) fn new(policy: PaginationPolicy) -> Self {
        Self {
            page_number: 1,
            policy,
            ..Default::default()
        }
    }

    pub(crate) fn query_text(&self) -> &str {
        &self.query_text
    }

    pub(crate) fn page_number(&self) -> u32 {
        self.page_number
    }

    pub(crate) fn results(&self) -> &[Photo] {
        &self.results
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn has_more(&self) -> bool {
        match self.policy {
            PaginationPolicy::StopOnEmptyPage => !self.exhausted,
            PaginationPolicy::Endless => true,
        }
    }

    /// Replaces the query text. Nothing is requested until the search is
    /// submitted.
    pub(crate) fn set_query(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    /// Starts a new search from page one.
    ///
    /// The current results stay visible until the page one response is merged.
    pub(crate) fn submit_search(&mut self) -> PageRequest {
        self.page_number = 1;
        self.generation += 1;
        self.exhausted = false;

        debug!(query = %self.query_text, generation = self.generation, "search submitted");

        self.ticket()
    }

    /// Advances to the next page, if there is one.
    pub(crate) fn request_next_page(&mut self) -> Option<PageRequest> {
        if !self.has_more() {
            return None;
        }

        self.page_number += 1;

        Some(self.ticket())
    }

    /// Steps back over a next page that never arrived, so that asking for the
    /// next page again requests the same page.
    ///
    /// Only the most recent page of the current search can be taken back.
    pub(crate) fn rewind(&mut self, request: &PageRequest) -> bool {
        if request.generation != self.generation
            || request.page <= 1
            || request.page != self.page_number
        {
            return false;
        }

        self.page_number = request.page - 1;

        debug!(page = request.page, "page will be requested again");

        true
    }

    /// Folds a page of photos into the results.
    pub(crate) fn merge_response(&mut self, request: &PageRequest, photos: Vec<Photo>) -> MergeOutcome {
        if request.generation != self.generation {
            debug!(
                stale = request.generation,
                current = self.generation,
                "discarding stale page"
            );
            return MergeOutcome::Stale;
        }

        if photos.is_empty() {
            self.exhausted = true;
        }

        if request.page == 1 {
            self.results = photos;
            MergeOutcome::Replaced
        } else {
            self.results.extend(photos);
            MergeOutcome::Appended
        }
    }

    fn ticket(&self) -> PageRequest {
        PageRequest {
            query: self.query_text.clone(),
            page: self.page_number,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::fixtures;

    fn ids(search: &Search) -> Vec<&str> {
        search.results().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn submit_resets_to_first_page() {
        let mut search = Search::new(PaginationPolicy::Endless);
        search.set_query("cats");
        search.submit_search();
        search.request_next_page();
        search.request_next_page();
        assert_eq!(search.page_number(), 3);

        let request = search.submit_search();
        assert_eq!(
            request,
            PageRequest {
                query: "cats".to_string(),
                page: 1,
                generation: 2
            }
        );
        assert_eq!(search.page_number(), 1);
    }

    #[test]
    fn set_query_changes_nothing_else() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a"]));

        search.set_query("dogs");

        assert_eq!(search.query_text(), "dogs");
        assert_eq!(search.page_number(), 1);
        assert_eq!(search.generation(), 1);
        assert_eq!(ids(&search), ["a"]);
    }

    #[test]
    fn next_pages_accumulate_in_order() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a", "b"]));

        let second = search.request_next_page().unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(
            search.merge_response(&second, fixtures::photos(&["c"])),
            MergeOutcome::Appended
        );

        let third = search.request_next_page().unwrap();
        search.merge_response(&third, fixtures::photos(&["d", "e"]));

        assert_eq!(ids(&search), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn first_page_merge_replaces_results() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a", "b"]));
        let second = search.request_next_page().unwrap();
        search.merge_response(&second, fixtures::photos(&["c"]));

        search.set_query("dogs");
        let fresh = search.submit_search();
        assert_eq!(ids(&search), ["a", "b", "c"]);

        assert_eq!(
            search.merge_response(&fresh, fixtures::photos(&["x"])),
            MergeOutcome::Replaced
        );
        assert_eq!(ids(&search), ["x"]);
    }

    #[test]
    fn first_page_merge_is_idempotent() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();

        search.merge_response(&first, fixtures::photos(&["a", "b"]));
        search.merge_response(&first, fixtures::photos(&["a", "b"]));

        assert_eq!(ids(&search), ["a", "b"]);
    }

    #[test]
    fn later_page_merge_grows_each_time() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a"]));
        let second = search.request_next_page().unwrap();

        search.merge_response(&second, fixtures::photos(&["b", "c"]));
        search.merge_response(&second, fixtures::photos(&["b", "c"]));

        assert_eq!(search.results().len(), 5);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut search = Search::new(PaginationPolicy::Endless);
        search.set_query("cats");
        let old = search.submit_search();
        search.set_query("dogs");
        let new = search.submit_search();

        search.merge_response(&new, fixtures::photos(&["dog"]));
        assert_eq!(
            search.merge_response(&old, fixtures::photos(&["cat"])),
            MergeOutcome::Stale
        );

        assert_eq!(ids(&search), ["dog"]);
    }

    #[test]
    fn out_of_order_pages_merge_in_arrival_order() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a"]));
        let second = search.request_next_page().unwrap();
        let third = search.request_next_page().unwrap();

        search.merge_response(&third, fixtures::photos(&["c"]));
        search.merge_response(&second, fixtures::photos(&["b"]));

        assert_eq!(ids(&search), ["a", "c", "b"]);
    }

    #[test]
    fn empty_page_stops_pagination() {
        let mut search = Search::new(PaginationPolicy::StopOnEmptyPage);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a"]));
        let second = search.request_next_page().unwrap();

        search.merge_response(&second, vec![]);

        assert!(!search.has_more());
        assert_eq!(search.request_next_page(), None);
        assert_eq!(search.page_number(), 2);

        // a new search makes pages available again
        search.submit_search();
        assert!(search.has_more());
    }

    #[test]
    fn endless_policy_always_has_more() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        search.merge_response(&first, vec![]);

        assert!(search.has_more());
        assert_eq!(search.request_next_page().map(|r| r.page), Some(2));
    }

    #[test]
    fn rewound_page_is_requested_again() {
        let mut search = Search::new(PaginationPolicy::StopOnEmptyPage);
        let first = search.submit_search();
        search.merge_response(&first, fixtures::photos(&["a"]));
        let second = search.request_next_page().unwrap();

        assert!(search.rewind(&second));
        assert_eq!(search.page_number(), 1);
        assert_eq!(search.request_next_page(), Some(second));
    }

    #[test]
    fn only_the_latest_page_of_the_current_search_rewinds() {
        let mut search = Search::new(PaginationPolicy::Endless);
        let first = search.submit_search();
        assert!(!search.rewind(&first));

        let second = search.request_next_page().unwrap();
        search.request_next_page();
        assert!(!search.rewind(&second));
        assert_eq!(search.page_number(), 3);

        let third = PageRequest { page: 3, ..second };
        search.submit_search();
        assert!(!search.rewind(&third));
        assert_eq!(search.page_number(), 1);
    }

    #[test]
    fn stale_empty_page_does_not_exhaust() {
        let mut search = Search::new(PaginationPolicy::StopOnEmptyPage);
        let old = search.submit_search();
        search.submit_search();

        search.merge_response(&old, vec![]);

        assert!(search.has_more());
    }
}
