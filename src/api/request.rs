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

//! Outbound request targets.

use std::fmt;

use url::Url;

use crate::config::AccessKey;

const CLIENT_ID_PARAM: &str = "client_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    /// The editorial feed of most recent photos.
    LatestPhotos,
    SearchPhotos,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::LatestPhotos => "photos",
            Endpoint::SearchPhotos => "search/photos",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::LatestPhotos => f.write_str("latest photos"),
            Endpoint::SearchPhotos => f.write_str("photo search"),
        }
    }
}

/// A fully formed `GET` target, credential included.
///
/// `Display` masks the credential, so a descriptor is safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestDescriptor {
    pub(crate) endpoint: Endpoint,
    pub(crate) url: Url,
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut masked = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(name, value)| {
                let value = if name == CLIENT_ID_PARAM { "***".into() } else { value };
                (name.into_owned(), value.into_owned())
            })
            .collect();
        masked.query_pairs_mut().clear().extend_pairs(pairs);

        write!(f, "{masked}")
    }
}

/// Parses the configured API address, making sure endpoint paths are joined
/// beneath it rather than replacing its last segment.
pub(crate) fn parse_base_url(text: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(text)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Builds the request for one page of results.
///
/// An empty query browses the latest photos; anything else searches for it.
/// The page number and the access key are always attached.
pub(crate) fn build_request_descriptor(
    base: &Url,
    query_text: &str,
    page_number: u32,
    access_key: &AccessKey,
) -> Result<RequestDescriptor, url::ParseError> {
    let endpoint = if query_text.is_empty() {
        Endpoint::LatestPhotos
    } else {
        Endpoint::SearchPhotos
    };

    let mut url = base.join(endpoint.path())?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        if endpoint == Endpoint::SearchPhotos {
            pairs.append_pair("query", query_text);
        }
        pairs.append_pair("page", &page_number.to_string());
        pairs.append_pair(CLIENT_ID_PARAM, access_key.expose());
    }

    Ok(RequestDescriptor { endpoint, url })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base() -> Url {
        parse_base_url("https://api.unsplash.com").unwrap()
    }

    fn key() -> AccessKey {
        AccessKey::new("k3y")
    }

    fn params(descriptor: &RequestDescriptor) -> HashMap<String, String> {
        descriptor.url.query_pairs().into_owned().collect()
    }

    #[test]
    fn empty_query_targets_latest_listing() {
        let descriptor = build_request_descriptor(&base(), "", 1, &key()).unwrap();

        assert_eq!(descriptor.endpoint, Endpoint::LatestPhotos);
        assert_eq!(descriptor.url.path(), "/photos");

        let params = params(&descriptor);
        assert!(!params.contains_key("query"));
        assert_eq!(params["page"], "1");
        assert_eq!(params["client_id"], "k3y");
    }

    #[test]
    fn query_targets_search_endpoint() {
        let descriptor = build_request_descriptor(&base(), "cats", 3, &key()).unwrap();

        assert_eq!(descriptor.endpoint, Endpoint::SearchPhotos);
        assert_eq!(descriptor.url.path(), "/search/photos");
        assert_eq!(
            descriptor.url.query(),
            Some("query=cats&page=3&client_id=k3y")
        );
    }

    #[test]
    fn query_text_is_encoded() {
        let descriptor = build_request_descriptor(&base(), "red & blue", 1, &key()).unwrap();
        assert_eq!(params(&descriptor)["query"], "red & blue");
        assert!(descriptor.url.as_str().contains("query=red+%26+blue"));
    }

    #[test]
    fn base_path_is_kept() {
        let base = parse_base_url("http://localhost:8080/proxy/unsplash").unwrap();
        let descriptor = build_request_descriptor(&base, "", 2, &key()).unwrap();
        assert_eq!(descriptor.url.path(), "/proxy/unsplash/photos");
    }

    #[test]
    fn display_masks_the_credential() {
        let descriptor = build_request_descriptor(&base(), "dogs", 2, &key()).unwrap();
        let shown = descriptor.to_string();
        assert!(!shown.contains("k3y"), "{shown}");
        assert!(shown.contains("client_id=***"), "{shown}");
        assert!(shown.contains("query=dogs"), "{shown}");
    }
}
