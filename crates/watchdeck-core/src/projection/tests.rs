use super::*;
use chrono::{TimeZone, Utc};
use uuid::Uuid;
use watchdeck_models::Rating;

fn create_item(title: &str, content_type: ContentType, platform: Platform) -> ContentItem {
    ContentItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content_type,
        platform,
        genre: Vec::new(),
        release_date: Utc.with_ymd_and_hms(2023, 7, 21, 0, 0, 0).unwrap(),
        watched: false,
        rating: None,
        image: "https://example.com/poster.jpg".to_string(),
    }
}

fn rated(mut item: ContentItem, value: u8) -> ContentItem {
    item.rating = Some(Rating::new(value).unwrap());
    item
}

fn watched(mut item: ContentItem) -> ContentItem {
    item.watched = true;
    item
}

fn titles(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

#[test]
fn test_filter_by_type() {
    let items = vec![
        create_item("Oppenheimer", ContentType::Movie, Platform::Theaters),
        create_item("Succession", ContentType::Series, Platform::Hbo),
        create_item("Our Planet", ContentType::Documentary, Platform::Netflix),
    ];

    assert_eq!(titles(&filter_by_type(&items, Some(ContentType::Series))), vec!["Succession"]);
    assert_eq!(filter_by_type(&items, None).len(), 3);
}

#[test]
fn test_favorites_excludes_four_stars() {
    let items = vec![
        rated(create_item("Heat", ContentType::Movie, Platform::Hbo), 5),
        rated(create_item("Ronin", ContentType::Movie, Platform::Hbo), 4),
        create_item("Collateral", ContentType::Movie, Platform::Hbo),
    ];

    assert_eq!(titles(&filter_by_tag(&items, TagFilter::Favorites)), vec!["Heat"]);
    assert_eq!(titles(&filter_by_tag(&items, TagFilter::Rated)), vec!["Heat", "Ronin"]);
}

#[test]
fn test_watch_later_and_history() {
    let items = vec![
        watched(create_item("The Wire", ContentType::Series, Platform::Hbo)),
        create_item("Mad Men", ContentType::Series, Platform::Prime),
    ];

    assert_eq!(titles(&filter_by_tag(&items, TagFilter::WatchLater)), vec!["Mad Men"]);
    assert_eq!(titles(&filter_by_tag(&items, TagFilter::History)), vec!["The Wire"]);
}

#[test]
fn test_search_title_or_genre_case_insensitive() {
    let mut crime = create_item("Goodfellas", ContentType::Movie, Platform::Netflix);
    crime.genre = vec!["Crime".to_string(), "Drama".to_string()];
    let mut scifi = create_item("The Matrix", ContentType::Movie, Platform::Hbo);
    scifi.genre = vec!["Science Fiction".to_string()];
    let items = vec![crime, scifi];

    assert_eq!(titles(&search(&items, "MATRIX")), vec!["The Matrix"]);
    assert_eq!(titles(&search(&items, "fiction")), vec!["The Matrix"]);
    assert_eq!(titles(&search(&items, "dra")), vec!["Goodfellas"]);
    assert_eq!(search(&items, "").len(), 2);
    assert!(search(&items, "western").is_empty());
}

#[test]
fn test_apply_uses_and_semantics() {
    let items = vec![
        rated(create_item("The Bear", ContentType::Series, Platform::Disney), 5),
        rated(create_item("The Batman", ContentType::Movie, Platform::Hbo), 5),
        create_item("The Bear Necessities", ContentType::Series, Platform::Disney),
    ];
    let query = ViewQuery {
        content_type: Some(ContentType::Series),
        search: Some("bear".to_string()),
        tag: Some(TagFilter::Favorites),
    };

    let result = apply(&items, &query);
    assert_eq!(titles(&result), vec!["The Bear"]);
    assert_eq!(items.iter().filter(|i| query.matches(i)).count(), 1);
    assert_eq!(apply(&items, &ViewQuery::default()).len(), 3);
}

#[test]
fn test_watch_progress_empty() {
    let progress = watch_progress(&[]);
    assert_eq!(progress, WatchProgress { watched: 0, unwatched: 0 });
    assert!(!progress.has_data());
}

#[test]
fn test_watch_progress_counts() {
    let items = vec![
        watched(create_item("A", ContentType::Movie, Platform::Hbo)),
        watched(create_item("B", ContentType::Movie, Platform::Hbo)),
        create_item("C", ContentType::Movie, Platform::Hbo),
    ];
    let progress = watch_progress(&items);
    assert_eq!(progress, WatchProgress { watched: 2, unwatched: 1 });
    assert!(progress.has_data());
}

#[test]
fn test_platform_distribution_rounds_and_sorts() {
    let items = vec![
        create_item("A", ContentType::Movie, Platform::Netflix),
        create_item("B", ContentType::Movie, Platform::Netflix),
        create_item("C", ContentType::Movie, Platform::Prime),
    ];

    let shares = platform_distribution(&items);
    let summary: Vec<(Platform, u32)> = shares.iter().map(|s| (s.platform, s.percentage)).collect();
    assert_eq!(summary, vec![(Platform::Netflix, 67), (Platform::Prime, 33)]);
}

#[test]
fn test_platform_distribution_not_renormalized() {
    // Three equal shares each round to 33, summing to 99
    let items = vec![
        create_item("A", ContentType::Movie, Platform::Apple),
        create_item("B", ContentType::Movie, Platform::Hbo),
        create_item("C", ContentType::Movie, Platform::Disney),
    ];

    let shares = platform_distribution(&items);
    assert!(shares.iter().all(|s| s.percentage == 33));
    let order: Vec<Platform> = shares.iter().map(|s| s.platform).collect();
    assert_eq!(order, vec![Platform::Apple, Platform::Hbo, Platform::Disney]);
    assert!(platform_distribution(&[]).is_empty());
}

#[test]
fn test_type_breakdown_and_average_rating() {
    let items = vec![
        rated(create_item("A", ContentType::Movie, Platform::Hbo), 5),
        rated(create_item("B", ContentType::Series, Platform::Hbo), 2),
        create_item("C", ContentType::Documentary, Platform::Hbo),
        create_item("D", ContentType::Movie, Platform::Hbo),
    ];

    assert_eq!(
        type_breakdown(&items),
        TypeBreakdown { movies: 2, series: 1, documentaries: 1 }
    );
    assert_eq!(average_rating(&items), Some(3.5));
    assert_eq!(average_rating(&items[2..]), None);
}

#[test]
fn test_tag_filter_parse() {
    assert_eq!("watchLater".parse::<TagFilter>().unwrap(), TagFilter::WatchLater);
    assert_eq!("watch-later".parse::<TagFilter>().unwrap(), TagFilter::WatchLater);
    assert_eq!("Favorites".parse::<TagFilter>().unwrap(), TagFilter::Favorites);
    assert!("queue".parse::<TagFilter>().is_err());
}
