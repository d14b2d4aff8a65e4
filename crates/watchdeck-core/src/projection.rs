// Derived views over a catalog snapshot. Everything here is a pure function
// of the items passed in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use watchdeck_models::{ContentItem, ContentType, Platform};

/// Named view computed from item fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagFilter {
    /// Rated 5
    Favorites,
    /// Not yet watched
    WatchLater,
    /// Already watched
    History,
    /// Any rating present
    Rated,
}

impl TagFilter {
    pub const ALL: [TagFilter; 4] = [
        TagFilter::Favorites,
        TagFilter::WatchLater,
        TagFilter::History,
        TagFilter::Rated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagFilter::Favorites => "favorites",
            TagFilter::WatchLater => "watchLater",
            TagFilter::History => "history",
            TagFilter::Rated => "rated",
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            TagFilter::Favorites => item.is_favorite(),
            TagFilter::WatchLater => !item.watched,
            TagFilter::History => item.watched,
            TagFilter::Rated => item.is_rated(),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagFilter {
    type Err = String;

    /// Accepts the camelCase name as well as kebab/snake forms (`watch-later`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        TagFilter::ALL
            .into_iter()
            .find(|tag| tag.as_str().to_lowercase() == key)
            .ok_or_else(|| format!("unknown filter '{}' (expected favorites, watchLater, history or rated)", s))
    }
}

/// Items of the given type; `None` keeps everything
pub fn filter_by_type(items: &[ContentItem], content_type: Option<ContentType>) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| content_type.map_or(true, |t| item.content_type == t))
        .cloned()
        .collect()
}

pub fn filter_by_tag(items: &[ContentItem], tag: TagFilter) -> Vec<ContentItem> {
    items.iter().filter(|item| tag.matches(item)).cloned().collect()
}

/// Case-insensitive substring match on the title or any genre.
/// An empty query matches every item.
pub fn search(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    items.iter().filter(|item| matches_query(item, query)).cloned().collect()
}

fn matches_query(item: &ContentItem, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.genre.iter().any(|g| g.to_lowercase().contains(&needle))
}

/// Combined library query. All present criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub content_type: Option<ContentType>,
    pub search: Option<String>,
    pub tag: Option<TagFilter>,
}

impl ViewQuery {
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.content_type.map_or(true, |t| item.content_type == t)
            && self.search.as_deref().map_or(true, |q| matches_query(item, q))
            && self.tag.map_or(true, |tag| tag.matches(item))
    }
}

/// Apply a [`ViewQuery`]: type, then search, then tag
pub fn apply(items: &[ContentItem], query: &ViewQuery) -> Vec<ContentItem> {
    let by_type = filter_by_type(items, query.content_type);
    let searched = match &query.search {
        Some(q) => search(&by_type, q),
        None => by_type,
    };
    match query.tag {
        Some(tag) => filter_by_tag(&searched, tag),
        None => searched,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchProgress {
    pub watched: usize,
    pub unwatched: usize,
}

impl WatchProgress {
    pub fn total(&self) -> usize {
        self.watched + self.unwatched
    }

    /// False for an empty catalog; render "no data" rather than a chart
    pub fn has_data(&self) -> bool {
        self.total() > 0
    }
}

pub fn watch_progress(items: &[ContentItem]) -> WatchProgress {
    let watched = items.iter().filter(|item| item.watched).count();
    WatchProgress {
        watched,
        unwatched: items.len() - watched,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformShare {
    pub platform: Platform,
    pub count: usize,
    /// Rounded independently per platform; shares may not sum to 100
    pub percentage: u32,
}

/// Share of items per platform present, highest first. Platforms with equal
/// shares keep the order in which they first appear in `items`.
pub fn platform_distribution(items: &[ContentItem]) -> Vec<PlatformShare> {
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<Platform> = Vec::new();
    let mut counts: HashMap<Platform, usize> = HashMap::new();
    for item in items {
        let count = counts.entry(item.platform).or_insert(0);
        if *count == 0 {
            order.push(item.platform);
        }
        *count += 1;
    }

    let mut shares: Vec<PlatformShare> = order
        .into_iter()
        .map(|platform| {
            let count = counts[&platform];
            PlatformShare {
                platform,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();
    shares.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    shares
}

fn percentage(count: usize, total: usize) -> u32 {
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub movies: usize,
    pub series: usize,
    pub documentaries: usize,
}

/// Item counts per content type
pub fn type_breakdown(items: &[ContentItem]) -> TypeBreakdown {
    items.iter().fold(TypeBreakdown::default(), |mut acc, item| {
        match item.content_type {
            ContentType::Movie => acc.movies += 1,
            ContentType::Series => acc.series += 1,
            ContentType::Documentary => acc.documentaries += 1,
        }
        acc
    })
}

/// Mean rating over rated items, `None` when nothing is rated
pub fn average_rating(items: &[ContentItem]) -> Option<f64> {
    let ratings: Vec<u8> = items.iter().filter_map(|item| item.rating.map(|r| r.value())).collect();
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|&r| r as u32).sum();
    Some(sum as f64 / ratings.len() as f64)
}

#[cfg(test)]
mod tests;
