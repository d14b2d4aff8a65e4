pub mod add;
pub mod clear;
pub mod config;
pub mod edit;
pub mod list;
pub mod poster;
pub mod prompts;
pub mod stats;

use chrono::{DateTime, NaiveDate, Utc};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde_json::json;
use uuid::Uuid;
use watchdeck_config::{Config, PathManager};
use watchdeck_core::{CatalogStore, FileBackend, PosterCatalog};
use watchdeck_models::ContentItem;

/// Everything a command needs, loaded once at startup
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
    pub posters: PosterCatalog,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to read {}: {}", config_file.display(), e))?;
        config
            .validate()
            .wrap_err_with(|| format!("Invalid configuration in {}", config_file.display()))?;

        let posters = PosterCatalog::from_config(&config.posters);
        Ok(Self { paths, config, posters })
    }

    pub fn open_store(&self) -> CatalogStore<'_, FileBackend> {
        let backend = FileBackend::new(self.config.snapshot_path(&self.paths));
        CatalogStore::open(backend, &self.posters)
    }
}

/// Resolve a full id or a unique prefix of one (at least 4 characters).
///
/// A well-formed id is returned as-is even if no item has it, so the store
/// can treat it as a no-op. `Ok(None)` means nothing matched the prefix.
pub fn resolve_id(items: &[ContentItem], input: &str) -> Result<Option<Uuid>> {
    let input = input.trim();
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(Some(id));
    }
    if input.len() < 4 {
        return Err(eyre!("Id prefix '{}' is too short (use at least 4 characters)", input));
    }

    let prefix = input.to_lowercase();
    let matches: Vec<Uuid> = items
        .iter()
        .map(|item| item.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(*id)),
        _ => Err(eyre!("Id prefix '{}' matches {} items; use more characters", input, matches.len())),
    }
}

/// Accept `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp
pub fn parse_release_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| eyre!("Invalid release date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp", input))
}

/// Short id shown in tables
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

pub fn item_json(item: &ContentItem) -> serde_json::Value {
    serde_json::to_value(item).unwrap_or_else(|_| json!({ "id": item.id.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use watchdeck_models::{ContentType, Platform};

    fn item_with_id(id: &str) -> ContentItem {
        ContentItem {
            id: Uuid::parse_str(id).unwrap(),
            title: "Chernobyl".to_string(),
            content_type: ContentType::Series,
            platform: Platform::Hbo,
            genre: Vec::new(),
            release_date: Utc.with_ymd_and_hms(2019, 5, 6, 0, 0, 0).unwrap(),
            watched: false,
            rating: None,
            image: "https://example.com/c.jpg".to_string(),
        }
    }

    #[test]
    fn test_resolve_id_prefix() {
        let items = vec![
            item_with_id("aaaa1111-0000-4000-8000-000000000001"),
            item_with_id("aaaa2222-0000-4000-8000-000000000002"),
        ];

        assert_eq!(
            resolve_id(&items, "AAAA1").unwrap(),
            Some(items[0].id)
        );
        assert!(resolve_id(&items, "aaaa").is_err());
        assert!(resolve_id(&items, "aa").is_err());
        assert_eq!(resolve_id(&items, "bbbb").unwrap(), None);
    }

    #[test]
    fn test_resolve_full_id_passes_through() {
        let id = "cccc3333-0000-4000-8000-000000000003";
        assert_eq!(resolve_id(&[], id).unwrap(), Some(Uuid::parse_str(id).unwrap()));
    }

    #[test]
    fn test_parse_release_date() {
        assert_eq!(
            parse_release_date("2024-03-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_release_date("2024-03-01T10:00:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
        );
        assert!(parse_release_date("March 1st").is_err());
    }
}
