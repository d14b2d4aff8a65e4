use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of tracked content. Serialized as the lowercase key (`movie`, `series`, `documentary`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Movie,
    Series,
    Documentary,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Movie, ContentType::Series, ContentType::Documentary];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Series => "series",
            ContentType::Documentary => "documentary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::Series => "Series",
            ContentType::Documentary => "Documentary",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(ContentType::Movie),
            "series" => Ok(ContentType::Series),
            "documentary" => Ok(ContentType::Documentary),
            other => Err(ModelError::UnknownContentType(other.to_string())),
        }
    }
}

/// Where an item is available to watch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Netflix,
    Prime,
    Apple,
    Hbo,
    Disney,
    Theaters,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Netflix,
        Platform::Prime,
        Platform::Apple,
        Platform::Hbo,
        Platform::Disney,
        Platform::Theaters,
    ];

    /// Storage key, as written in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Netflix => "netflix",
            Platform::Prime => "prime",
            Platform::Apple => "apple",
            Platform::Hbo => "hbo",
            Platform::Disney => "disney",
            Platform::Theaters => "theaters",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::Prime => "Prime Video",
            Platform::Apple => "Apple TV+",
            Platform::Hbo => "HBO Max",
            Platform::Disney => "Disney+",
            Platform::Theaters => "In Theaters",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or(ModelError::UnknownPlatform(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse() {
        assert_eq!("Series".parse::<ContentType>().unwrap(), ContentType::Series);
        assert_eq!(" documentary ".parse::<ContentType>().unwrap(), ContentType::Documentary);
        assert!("podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_platform_parse_and_display() {
        assert_eq!("HBO".parse::<Platform>().unwrap(), Platform::Hbo);
        assert_eq!(Platform::Prime.to_string(), "prime");
        assert_eq!(Platform::Apple.display_name(), "Apple TV+");
        assert!("hulu".parse::<Platform>().is_err());
    }

    #[test]
    fn test_serialized_as_lowercase_keys() {
        assert_eq!(serde_json::to_string(&ContentType::Documentary).unwrap(), "\"documentary\"");
        assert_eq!(serde_json::to_string(&Platform::Theaters).unwrap(), "\"theaters\"");
        let platform: Platform = serde_json::from_str("\"disney\"").unwrap();
        assert_eq!(platform, Platform::Disney);
    }
}
