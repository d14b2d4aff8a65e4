/// Genre labels offered when adding content. Other labels are accepted as-is.
pub const KNOWN_GENRES: [&str; 16] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Thriller",
    "War",
    "Western",
];

/// Canonical spelling of a known genre (case-insensitive), if any
pub fn canonical_genre(label: &str) -> Option<&'static str> {
    let label = label.trim();
    KNOWN_GENRES
        .iter()
        .copied()
        .find(|g| g.eq_ignore_ascii_case(label))
}

/// Split a comma-separated genre list, trimming blanks and mapping known
/// genres to their canonical spelling. Repeats keep their first position.
pub fn parse_genres(input: &str) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for label in input.split(',').map(str::trim).filter(|g| !g.is_empty()) {
        let label = canonical_genre(label).map(str::to_string).unwrap_or_else(|| label.to_string());
        if !genres.iter().any(|g| g.eq_ignore_ascii_case(&label)) {
            genres.push(label);
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genres() {
        let genres = parse_genres("drama, science fiction,, Kaiju ");
        assert_eq!(genres, vec!["Drama", "Science Fiction", "Kaiju"]);
    }

    #[test]
    fn test_parse_genres_drops_repeats() {
        let genres = parse_genres("Drama, drama, Kaiju, KAIJU, Crime");
        assert_eq!(genres, vec!["Drama", "Kaiju", "Crime"]);
    }

    #[test]
    fn test_parse_genres_empty() {
        assert!(parse_genres("").is_empty());
        assert!(parse_genres(" , ").is_empty());
    }
}
