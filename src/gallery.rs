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

//! The photo gallery.
//!
//! [`Gallery`] ties the search state to the access key and the API address.
//! It turns search tickets into request descriptors and hands them to a
//! [`PageFetcher`], then folds the outcome of each fetch back into the search
//! state when it arrives.
//!
//! Without an access key the gallery refuses to issue any request at all.

use tracing::{info, warn};
use url::Url;

use crate::{
    api::{self, RequestDescriptor},
    config::{AccessKey, AppConfig},
    error::GalleryError,
    model::{
        Photo,
        search::{MergeOutcome, PageRequest, Search},
    },
};

/// Performs page fetches on behalf of the gallery.
///
/// The outcome is delivered later, through [`Gallery::apply_page`]. An error
/// means the fetch was never started and no outcome will follow.
pub(crate) trait PageFetcher {
    fn fetch(&self, request: PageRequest, descriptor: RequestDescriptor)
    -> Result<(), GalleryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GalleryStatus {
    CredentialRequired,
    Ready,
}

pub(crate) struct Gallery {
    search: Search,
    base_url: Url,
    access_key: Option<AccessKey>,
    in_flight: usize,
    load_more_armed: bool,
    last_error: Option<String>,
}

impl Gallery {
    pub(crate) fn new(
        config: &AppConfig,
        access_key: Result<AccessKey, GalleryError>,
    ) -> Result<Self, GalleryError> {
        let base_url = api::parse_base_url(&config.api_url)?;

        let access_key = match access_key {
            Ok(key) => Some(key),
            Err(err) => {
                warn!(error = %err, "no access key, requests are disabled");
                None
            }
        };

        Ok(Self {
            search: Search::new(config.pagination()),
            base_url,
            access_key,
            in_flight: 0,
            load_more_armed: true,
            last_error: None,
        })
    }

    pub(crate) fn status(&self) -> GalleryStatus {
        match self.access_key {
            Some(_) => GalleryStatus::Ready,
            None => GalleryStatus::CredentialRequired,
        }
    }

    pub(crate) fn results(&self) -> &[Photo] {
        self.search.results()
    }

    pub(crate) fn query_text(&self) -> &str {
        self.search.query_text()
    }

    pub(crate) fn page_number(&self) -> u32 {
        self.search.page_number()
    }

    pub(crate) fn has_more(&self) -> bool {
        self.search.has_more()
    }

    /// Number of fetches issued whose outcome has not arrived yet.
    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn set_query(&mut self, text: impl Into<String>) {
        self.search.set_query(text);
    }

    /// Starts a new search for the current query text.
    pub(crate) fn submit_search(
        &mut self,
        fetcher: &impl PageFetcher,
    ) -> Result<PageRequest, GalleryError> {
        let access_key = self.credential()?;

        let request = self.search.submit_search();
        self.load_more_armed = true;
        self.issue(request.clone(), &access_key, fetcher)?;

        Ok(request)
    }

    /// Asks for the page after the last one requested.
    ///
    /// Returns `None` when there are no more pages, or when the previous next
    /// page request has neither changed the results nor failed yet.
    pub(crate) fn request_next_page(
        &mut self,
        fetcher: &impl PageFetcher,
    ) -> Result<Option<PageRequest>, GalleryError> {
        let access_key = self.credential()?;

        if !self.load_more_armed {
            return Ok(None);
        }

        let Some(request) = self.search.request_next_page() else {
            return Ok(None);
        };
        if let Err(err) = self.issue(request.clone(), &access_key, fetcher) {
            self.search.rewind(&request);
            return Err(err);
        }
        self.load_more_armed = false;

        Ok(Some(request))
    }

    /// Applies the outcome of a fetch.
    ///
    /// A failure leaves the results as they were and is kept for display. A
    /// failed next page is requested again the next time more photos are
    /// wanted. Returns the merge outcome for a successful fetch.
    pub(crate) fn apply_page(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Photo>, GalleryError>,
    ) -> Option<MergeOutcome> {
        self.in_flight = self.in_flight.saturating_sub(1);
        let current = request.generation == self.search.generation();

        match result {
            Ok(photos) => {
                let before = self.search.results().len();
                let received = photos.len();
                let outcome = self.search.merge_response(request, photos);

                if outcome != MergeOutcome::Stale {
                    self.last_error = None;
                    if outcome == MergeOutcome::Replaced || self.search.results().len() != before {
                        self.load_more_armed = true;
                    }
                }

                info!(
                    query = %request.query,
                    page = request.page,
                    received,
                    total = self.search.results().len(),
                    ?outcome,
                    "page applied"
                );

                Some(outcome)
            }
            Err(err) => {
                warn!(
                    query = %request.query,
                    page = request.page,
                    error = %err,
                    "page fetch failed"
                );

                if current {
                    self.search.rewind(request);
                    self.load_more_armed = true;
                    self.last_error = Some(err.to_string());
                }

                None
            }
        }
    }

    fn credential(&self) -> Result<AccessKey, GalleryError> {
        self.access_key
            .clone()
            .ok_or(GalleryError::CredentialRequired)
    }

    fn issue(
        &mut self,
        request: PageRequest,
        access_key: &AccessKey,
        fetcher: &impl PageFetcher,
    ) -> Result<(), GalleryError> {
        let descriptor = api::build_request_descriptor(
            &self.base_url,
            &request.query,
            request.page,
            access_key,
        )?;

        info!(request = %descriptor, generation = request.generation, "requesting page");

        fetcher.fetch(request, descriptor)?;
        self.in_flight += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{api::request::Endpoint, model::fixtures, schema::SchemaError};

    #[derive(Default)]
    struct RecordingFetcher {
        requests: RefCell<Vec<(PageRequest, RequestDescriptor)>>,
    }

    impl PageFetcher for RecordingFetcher {
        fn fetch(
            &self,
            request: PageRequest,
            descriptor: RequestDescriptor,
        ) -> Result<(), GalleryError> {
            self.requests.borrow_mut().push((request, descriptor));
            Ok(())
        }
    }

    struct StoppedFetcher;

    impl PageFetcher for StoppedFetcher {
        fn fetch(&self, _: PageRequest, _: RequestDescriptor) -> Result<(), GalleryError> {
            Err(GalleryError::WorkerStopped)
        }
    }

    impl RecordingFetcher {
        fn count(&self) -> usize {
            self.requests.borrow().len()
        }

        fn last(&self) -> (PageRequest, RequestDescriptor) {
            self.requests.borrow().last().cloned().unwrap()
        }
    }

    fn config(stop_on_empty_page: bool) -> AppConfig {
        AppConfig {
            stop_on_empty_page,
            ..AppConfig::default()
        }
    }

    fn gallery() -> Gallery {
        Gallery::new(&config(true), Ok(AccessKey::new("k3y"))).unwrap()
    }

    fn ids(gallery: &Gallery) -> Vec<&str> {
        gallery.results().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn missing_credential_issues_nothing() {
        let fetcher = RecordingFetcher::default();
        let mut gallery =
            Gallery::new(&config(true), Err(GalleryError::CredentialRequired)).unwrap();

        assert_eq!(gallery.status(), GalleryStatus::CredentialRequired);
        assert!(matches!(
            gallery.submit_search(&fetcher),
            Err(GalleryError::CredentialRequired)
        ));
        assert!(matches!(
            gallery.request_next_page(&fetcher),
            Err(GalleryError::CredentialRequired)
        ));

        assert_eq!(fetcher.count(), 0);
        assert_eq!(gallery.in_flight(), 0);
        assert_eq!(gallery.page_number(), 1);
    }

    #[test]
    fn invalid_api_address_is_rejected() {
        let config = AppConfig {
            api_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            Gallery::new(&config, Ok(AccessKey::new("k3y"))),
            Err(GalleryError::Url(_))
        ));
    }

    #[test]
    fn submit_requests_first_page() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        gallery.set_query("cats");

        let request = gallery.submit_search(&fetcher).unwrap();

        let (sent, descriptor) = fetcher.last();
        assert_eq!(sent, request);
        assert_eq!(descriptor.endpoint, Endpoint::SearchPhotos);
        assert_eq!(
            descriptor.url.as_str(),
            "https://api.unsplash.com/search/photos?query=cats&page=1&client_id=k3y"
        );
        assert_eq!(gallery.in_flight(), 1);
    }

    #[test]
    fn loaded_pages_accumulate() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();

        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&first, Ok(fixtures::photos(&["a", "b"])));

        let second = gallery.request_next_page(&fetcher).unwrap().unwrap();
        assert_eq!(fetcher.last().1.endpoint, Endpoint::LatestPhotos);
        assert_eq!(
            gallery.apply_page(&second, Ok(fixtures::photos(&["c"]))),
            Some(MergeOutcome::Appended)
        );

        assert_eq!(ids(&gallery), ["a", "b", "c"]);
        assert_eq!(gallery.in_flight(), 0);
    }

    #[test]
    fn one_trigger_per_result_change() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&first, Ok(fixtures::photos(&["a"])));

        let second = gallery.request_next_page(&fetcher).unwrap().unwrap();
        assert_eq!(gallery.request_next_page(&fetcher).unwrap(), None);
        assert_eq!(fetcher.count(), 2);

        gallery.apply_page(&second, Ok(fixtures::photos(&["b"])));

        let third = gallery.request_next_page(&fetcher).unwrap().unwrap();
        assert_eq!(third.page, 3);
        assert_eq!(fetcher.count(), 3);
    }

    #[test]
    fn failure_keeps_results_and_rearms() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&first, Ok(fixtures::photos(&["a", "b"])));

        let second = gallery.request_next_page(&fetcher).unwrap().unwrap();
        let outcome = gallery.apply_page(
            &second,
            Err(GalleryError::Schema(SchemaError::UnexpectedEnvelope)),
        );

        assert_eq!(outcome, None);
        assert_eq!(ids(&gallery), ["a", "b"]);
        assert!(gallery.last_error().is_some());
        assert_eq!(gallery.page_number(), 1);

        let retry = gallery.request_next_page(&fetcher).unwrap().unwrap();
        assert_eq!(retry, second);
        assert_eq!(fetcher.count(), 3);

        gallery.apply_page(&retry, Ok(fixtures::photos(&["c"])));
        assert_eq!(ids(&gallery), ["a", "b", "c"]);
        assert_eq!(gallery.page_number(), 2);
    }

    #[test]
    fn unsent_request_is_not_counted() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&first, Ok(fixtures::photos(&["a"])));

        assert!(matches!(
            gallery.request_next_page(&StoppedFetcher),
            Err(GalleryError::WorkerStopped)
        ));
        assert_eq!(gallery.in_flight(), 0);
        assert_eq!(gallery.page_number(), 1);

        let second = gallery.request_next_page(&fetcher).unwrap().unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(gallery.in_flight(), 1);

        assert!(matches!(
            gallery.submit_search(&StoppedFetcher),
            Err(GalleryError::WorkerStopped)
        ));
        assert_eq!(gallery.in_flight(), 1);
    }

    #[test]
    fn success_clears_the_last_error() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(
            &first,
            Err(GalleryError::Schema(SchemaError::UnexpectedEnvelope)),
        );
        assert!(gallery.last_error().is_some());

        let again = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&again, Ok(fixtures::photos(&["a"])));
        assert_eq!(gallery.last_error(), None);
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        gallery.set_query("cats");
        let old = gallery.submit_search(&fetcher).unwrap();
        gallery.set_query("dogs");
        let new = gallery.submit_search(&fetcher).unwrap();

        gallery.apply_page(&new, Ok(fixtures::photos(&["dog"])));
        assert_eq!(
            gallery.apply_page(&old, Ok(fixtures::photos(&["cat"]))),
            Some(MergeOutcome::Stale)
        );
        gallery.apply_page(
            &old,
            Err(GalleryError::Schema(SchemaError::UnexpectedEnvelope)),
        );

        assert_eq!(ids(&gallery), ["dog"]);
        assert_eq!(gallery.last_error(), None);
    }

    #[test]
    fn empty_page_ends_the_listing() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = gallery();
        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&first, Ok(fixtures::photos(&["a"])));
        let second = gallery.request_next_page(&fetcher).unwrap().unwrap();

        gallery.apply_page(&second, Ok(vec![]));

        assert!(!gallery.has_more());
        assert_eq!(gallery.request_next_page(&fetcher).unwrap(), None);
        assert_eq!(fetcher.count(), 2);
    }

    #[test]
    fn endless_listing_waits_for_new_results() {
        let fetcher = RecordingFetcher::default();
        let mut gallery = Gallery::new(&config(false), Ok(AccessKey::new("k3y"))).unwrap();
        let first = gallery.submit_search(&fetcher).unwrap();
        gallery.apply_page(&first, Ok(fixtures::photos(&["a"])));
        let second = gallery.request_next_page(&fetcher).unwrap().unwrap();

        gallery.apply_page(&second, Ok(vec![]));

        assert!(gallery.has_more());
        assert_eq!(gallery.request_next_page(&fetcher).unwrap(), None);

        gallery.submit_search(&fetcher).unwrap();
        assert!(gallery.request_next_page(&fetcher).unwrap().is_some());
    }
}
