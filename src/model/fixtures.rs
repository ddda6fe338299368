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

//! Sample API payloads shared by tests.

use serde_json::{Value, json};

use crate::{
    model::Photo,
    schema::{ExtraKeys, SchemaRegistry},
};

pub(crate) fn user_json(username: &str) -> Value {
    json!({
        "id": format!("user-{username}"),
        "updated_at": "2024-02-11T09:14:02-05:00",
        "username": username,
        "name": "Jordan Reyes",
        "first_name": "Jordan",
        "last_name": null,
        "twitter_username": "jreyes",
        "portfolio_url": "https://jreyes.example",
        "bio": "Coastlines and concrete.",
        "location": null,
        "links": {
            "self": format!("https://api.unsplash.com/users/{username}"),
            "html": format!("https://unsplash.com/@{username}"),
            "photos": format!("https://api.unsplash.com/users/{username}/photos"),
            "likes": format!("https://api.unsplash.com/users/{username}/likes"),
            "portfolio": format!("https://api.unsplash.com/users/{username}/portfolio"),
            "following": format!("https://api.unsplash.com/users/{username}/following"),
            "followers": format!("https://api.unsplash.com/users/{username}/followers"),
        },
        "profile_image": {
            "small": "https://images.unsplash.com/profile-1?w=32",
            "medium": "https://images.unsplash.com/profile-1?w=64",
            "large": "https://images.unsplash.com/profile-1?w=128",
        },
        "instagram_username": "jreyes.photo",
        "total_collections": 3,
        "total_likes": 140,
        "total_photos": 58,
        "accepted_tos": true,
        "for_hire": false,
        "social": {
            "instagram_username": "jreyes.photo",
            "portfolio_url": "https://jreyes.example",
            "twitter_username": "jreyes",
        },
    })
}

/// A well-formed photo with every nullable field explicitly `null` and one
/// undeclared key (`slug`).
pub(crate) fn photo_json(id: &str) -> Value {
    json!({
        "id": id,
        "slug": format!("harbour-at-dawn-{id}"),
        "created_at": "2016-05-03T11:00:28-04:00",
        "updated_at": "2024-03-01T08:12:45-05:00",
        "promoted_at": null,
        "width": 5245,
        "height": 3497,
        "color": "#60544D",
        "blur_hash": "LoC%a7IoIVxZ_NM|M{s:%hRjWAo0",
        "description": null,
        "alt_description": "boats moored in a harbour at dawn",
        "urls": {
            "raw": format!("https://images.unsplash.com/photo-{id}"),
            "full": format!("https://images.unsplash.com/photo-{id}?q=85"),
            "regular": format!("https://images.unsplash.com/photo-{id}?w=1080"),
            "small": format!("https://images.unsplash.com/photo-{id}?w=400"),
            "thumb": format!("https://images.unsplash.com/photo-{id}?w=200"),
        },
        "links": {
            "self": format!("https://api.unsplash.com/photos/{id}"),
            "html": format!("https://unsplash.com/photos/{id}"),
            "download": format!("https://unsplash.com/photos/{id}/download"),
            "download_location": format!("https://api.unsplash.com/photos/{id}/download"),
        },
        "categories": [],
        "likes": 12,
        "liked_by_user": false,
        "current_user_collections": [],
        "sponsorship": null,
        "user": user_json("jreyes"),
    })
}

pub(crate) fn sponsored_photo_json(id: &str) -> Value {
    let mut photo = photo_json(id);
    photo["sponsorship"] = json!({
        "impression_urls": ["https://secure.insightexpressai.com/adServer/adServerESI.aspx"],
        "tagline": "Made to change",
        "tagline_url": "https://brand.example/change",
        "sponsor": user_json("brand"),
    });
    photo
}

pub(crate) fn photo(id: &str) -> Photo {
    Photo::from_value(&photo_json(id), SchemaRegistry::photo(ExtraKeys::Accept))
        .expect("fixture photo must validate")
}

pub(crate) fn photos(ids: &[&str]) -> Vec<Photo> {
    ids.iter().map(|id| photo(id)).collect()
}
