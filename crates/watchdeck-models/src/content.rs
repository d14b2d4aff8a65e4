use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media::{ContentType, Platform};
use crate::rating::Rating;

/// A tracked movie, series or documentary
///
/// Field names on disk are camelCase (`releaseDate`) and the content type is
/// stored under `type`, matching the persisted snapshot layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub platform: Platform,
    #[serde(default)]
    pub genre: Vec<String>,
    pub release_date: DateTime<Utc>,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub rating: Option<Rating>,
    pub image: String,
}

impl ContentItem {
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Favorites are items carrying the top rating
    pub fn is_favorite(&self) -> bool {
        self.rating.map(|r| r.is_top()).unwrap_or(false)
    }

    pub fn release_year(&self) -> i32 {
        use chrono::Datelike;
        self.release_date.year()
    }

    /// Merge the fields present in `update` into this item.
    /// `id`, `content_type` and `image` are never touched.
    pub fn apply(&mut self, update: &ContentUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(platform) = update.platform {
            self.platform = platform;
        }
        if let Some(genre) = &update.genre {
            self.genre = genre.clone();
        }
        if let Some(release_date) = update.release_date {
            self.release_date = release_date;
        }
        if let Some(watched) = update.watched {
            self.watched = watched;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
    }
}

/// User-supplied fields for a new item. The store assigns id, watched, rating and image.
///
/// `platform` and `release_date` are optional here because the add form can be
/// submitted without them; the store rejects such input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewContent {
    pub title: String,
    pub content_type: ContentType,
    pub platform: Option<Platform>,
    pub genre: Vec<String>,
    pub release_date: Option<DateTime<Utc>>,
}

impl NewContent {
    pub fn new(
        title: impl Into<String>,
        content_type: ContentType,
        platform: Platform,
        release_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            content_type,
            platform: Some(platform),
            genre: Vec::new(),
            release_date: Some(release_date),
        }
    }

    /// Names of required fields that are empty or absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.platform.is_none() {
            missing.push("platform");
        }
        if self.release_date.is_none() {
            missing.push("releaseDate");
        }
        missing
    }
}

/// Partial update for an existing item. `None` leaves a field untouched.
///
/// `rating` is tri-state: `None` keeps it, `Some(Some(r))` sets it and
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentUpdate {
    pub title: Option<String>,
    pub platform: Option<Platform>,
    pub genre: Option<Vec<String>>,
    pub release_date: Option<DateTime<Utc>>,
    pub watched: Option<bool>,
    pub rating: Option<Option<Rating>>,
}

impl ContentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn genre(mut self, genre: Vec<String>) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn watched(mut self, watched: bool) -> Self {
        self.watched = Some(watched);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(Some(rating));
        self
    }

    pub fn clear_rating(mut self) -> Self {
        self.rating = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_item() -> ContentItem {
        ContentItem {
            id: Uuid::new_v4(),
            title: "The Bear".to_string(),
            content_type: ContentType::Series,
            platform: Platform::Disney,
            genre: vec!["Comedy".to_string(), "Drama".to_string()],
            release_date: Utc.with_ymd_and_hms(2022, 6, 23, 0, 0, 0).unwrap(),
            watched: false,
            rating: None,
            image: "https://example.com/bear.jpg".to_string(),
        }
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut item = sample_item();
        let before = item.clone();
        item.apply(&ContentUpdate::new().watched(true).rating(Rating::new(4).unwrap()));

        assert!(item.watched);
        assert_eq!(item.rating, Some(Rating::new(4).unwrap()));
        assert_eq!(item.title, before.title);
        assert_eq!(item.genre, before.genre);
        assert_eq!(item.image, before.image);
    }

    #[test]
    fn test_apply_clear_rating() {
        let mut item = sample_item();
        item.rating = Some(Rating::new(5).unwrap());
        assert!(item.is_favorite());

        item.apply(&ContentUpdate::new().clear_rating());
        assert_eq!(item.rating, None);
        assert!(!item.is_favorite());
    }

    #[test]
    fn test_serialized_layout() {
        let item = sample_item();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "series");
        assert_eq!(json["platform"], "disney");
        assert_eq!(json["releaseDate"], "2022-06-23T00:00:00Z");
        assert!(json["rating"].is_null());
        assert_eq!(json["watched"], false);
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "4f7c1f3e-8f1e-4a57-9d47-2f3c1c9b1a11",
            "title": "Free Solo",
            "type": "documentary",
            "platform": "disney",
            "releaseDate": "2018-09-28T00:00:00.000Z",
            "image": "https://example.com/free-solo.jpg"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert!(item.genre.is_empty());
        assert!(!item.watched);
        assert_eq!(item.rating, None);
        assert_eq!(item.release_year(), 2018);
    }

    #[test]
    fn test_missing_fields() {
        let input = NewContent {
            title: "   ".to_string(),
            ..NewContent::default()
        };
        assert_eq!(input.missing_fields(), vec!["title", "platform", "releaseDate"]);

        let complete = NewContent::new(
            "Andor",
            ContentType::Series,
            Platform::Disney,
            Utc.with_ymd_and_hms(2022, 9, 21, 0, 0, 0).unwrap(),
        );
        assert!(complete.missing_fields().is_empty());
    }
}
