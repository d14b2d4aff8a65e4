pub mod content;
pub mod error;
pub mod genre;
pub mod media;
pub mod rating;

pub use content::{ContentItem, ContentUpdate, NewContent};
pub use error::ModelError;
pub use genre::{parse_genres, KNOWN_GENRES};
pub use media::{ContentType, Platform};
pub use rating::Rating;
