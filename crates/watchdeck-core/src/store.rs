use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;
use watchdeck_models::{ContentItem, ContentUpdate, NewContent, Rating};

use crate::backend::SnapshotBackend;
use crate::error::{StoreError, StoreResult};
use crate::poster::PosterCatalog;

/// Schema version written into every snapshot. Snapshots without a version
/// are read as version 0, which shares the current item layout.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Persisted form of the catalog: `{ "version": 1, "items": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub version: u32,
    pub items: Vec<ContentItem>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    items: &'a [ContentItem],
}

/// Owner of the tracked items and the only place they are mutated
///
/// Every mutation builds the next item list, writes it through the backend,
/// and only then replaces the in-memory list. A failed write leaves the
/// catalog as it was. Updates and removals of unknown ids are no-ops.
pub struct CatalogStore<'p, B: SnapshotBackend> {
    backend: B,
    posters: &'p PosterCatalog,
    items: Vec<ContentItem>,
}

impl<'p, B: SnapshotBackend> CatalogStore<'p, B> {
    /// Open the store, hydrating from the backend. Never fails: a missing,
    /// unreadable or incompatible snapshot yields an empty catalog.
    pub fn open(mut backend: B, posters: &'p PosterCatalog) -> Self {
        let items = hydrate(&mut backend);
        Self { backend, posters, items }
    }

    /// Read-only view of the current items, in catalog order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Owned copy of the current items; changing it does not affect the store
    pub fn snapshot(&self) -> Vec<ContentItem> {
        self.items.clone()
    }

    pub fn get(&self, id: Uuid) -> Option<ContentItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Create an item from user input. The store assigns the id, sets
    /// `watched = false`, leaves the item unrated and resolves its poster.
    pub fn add(&mut self, input: NewContent) -> StoreResult<ContentItem> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::Validation(missing));
        }
        let (Some(platform), Some(release_date)) = (input.platform, input.release_date) else {
            return Err(StoreError::Validation(vec!["platform", "releaseDate"]));
        };

        let title = input.title.trim().to_string();
        let image = self.posters.resolve(&title, input.content_type).to_string();
        let item = ContentItem {
            id: self.fresh_id(),
            title,
            content_type: input.content_type,
            platform,
            genre: input.genre,
            release_date,
            watched: false,
            rating: None,
            image,
        };

        let mut next = self.items.clone();
        next.push(item.clone());
        self.commit(next)?;

        info!("Added {} '{}' ({})", item.content_type, item.title, item.id);
        Ok(item)
    }

    /// Merge `update` into the item with `id`. Returns `false` without
    /// touching storage when no such item exists.
    pub fn update(&mut self, id: Uuid, update: &ContentUpdate) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            debug!("Ignoring update for unknown item {}", id);
            return Ok(false);
        };

        if matches!(&update.title, Some(title) if title.trim().is_empty()) {
            return Err(StoreError::Validation(vec!["title"]));
        }

        let mut next = self.items.clone();
        next[index].apply(update);
        if let Some(title) = &update.title {
            next[index].title = title.trim().to_string();
        }
        self.commit(next)?;

        debug!("Updated item {}", id);
        Ok(true)
    }

    /// Flip the watched flag. Returns the updated item, or `None` for an unknown id.
    pub fn toggle_watched(&mut self, id: Uuid) -> StoreResult<Option<ContentItem>> {
        let Some(current) = self.get(id) else {
            debug!("Ignoring watched toggle for unknown item {}", id);
            return Ok(None);
        };
        self.update(id, &ContentUpdate::new().watched(!current.watched))?;
        Ok(self.get(id))
    }

    /// Set the rating, or clear it when `rating` equals the current one
    pub fn toggle_rating(&mut self, id: Uuid, rating: Rating) -> StoreResult<Option<ContentItem>> {
        let Some(current) = self.get(id) else {
            debug!("Ignoring rating toggle for unknown item {}", id);
            return Ok(None);
        };
        let update = if current.rating == Some(rating) {
            ContentUpdate::new().clear_rating()
        } else {
            ContentUpdate::new().rating(rating)
        };
        self.update(id, &update)?;
        Ok(self.get(id))
    }

    /// Delete the item with `id`. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: Uuid) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            debug!("Ignoring removal of unknown item {}", id);
            return Ok(false);
        };

        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Removed '{}' ({})", removed.title, id);
        Ok(true)
    }

    /// Move an item to `position` (0-based, clamped to the end) and persist
    /// the new order
    pub fn move_item(&mut self, id: Uuid, position: usize) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            debug!("Ignoring move of unknown item {}", id);
            return Ok(false);
        };

        let target = position.min(self.items.len() - 1);
        if target == index {
            return Ok(true);
        }

        let mut next = self.items.clone();
        let item = next.remove(index);
        next.insert(target, item);
        self.commit(next)?;

        debug!("Moved item {} from {} to {}", id, index, target);
        Ok(true)
    }

    /// Remove every item. Returns how many were removed.
    pub fn clear(&mut self) -> StoreResult<usize> {
        let count = self.items.len();
        self.commit(Vec::new())?;
        info!("Cleared catalog ({} items)", count);
        Ok(count)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.position(id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Vec<ContentItem>) -> StoreResult<()> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            items: &next,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        self.backend
            .write(&json)
            .map_err(|source| StoreError::Persistence {
                path: self.backend.location(),
                source,
            })?;
        self.items = next;
        Ok(())
    }
}

fn hydrate<B: SnapshotBackend>(backend: &mut B) -> Vec<ContentItem> {
    let raw = match backend.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No snapshot at {}, starting with an empty catalog", backend.location());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read snapshot at {}: {}. Starting with an empty catalog.", backend.location(), e);
            backend.quarantine();
            return Vec::new();
        }
    };

    let snapshot = match serde_json::from_str::<CatalogSnapshot>(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                "Snapshot at {} is unreadable ({}). Starting with an empty catalog.",
                backend.location(),
                e
            );
            backend.quarantine();
            return Vec::new();
        }
    };

    if snapshot.version > SNAPSHOT_VERSION {
        warn!(
            "Snapshot at {} has version {} but only {} is supported. Starting with an empty catalog.",
            backend.location(),
            snapshot.version,
            SNAPSHOT_VERSION
        );
        backend.quarantine();
        return Vec::new();
    }

    let total = snapshot.items.len();
    let mut seen = HashSet::with_capacity(total);
    let items: Vec<ContentItem> = snapshot
        .items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .collect();
    if items.len() < total {
        warn!("Dropped {} item(s) with duplicate ids while loading the catalog", total - items.len());
    }

    info!("Loaded catalog: {} items (snapshot version {})", items.len(), snapshot.version);
    items
}
