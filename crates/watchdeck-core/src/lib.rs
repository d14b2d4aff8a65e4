pub mod backend;
pub mod error;
pub mod poster;
pub mod projection;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, SnapshotBackend};
pub use error::{StoreError, StoreResult};
pub use poster::{normalize_title, PosterCatalog};
pub use projection::{
    apply, average_rating, filter_by_tag, filter_by_type, platform_distribution, search, type_breakdown,
    watch_progress, PlatformShare, TagFilter, TypeBreakdown, ViewQuery, WatchProgress,
};
pub use store::{CatalogSnapshot, CatalogStore, SNAPSHOT_VERSION};
