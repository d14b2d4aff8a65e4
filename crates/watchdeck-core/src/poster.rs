use watchdeck_config::PosterConfig;
use watchdeck_models::ContentType;

const TMDB_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Built-in reference table, keyed by normalized title. Order matters for
/// partial matching.
const BUILTIN_POSTERS: &[(&str, &str)] = &[
    // Recent movies
    ("dune part two", "/8b8R8l88Qje9dn9OE8PY05Nxl1X.jpg"),
    ("poor things", "/kCGlIMHnOm8JPXq3rXM6c5wMxcT.jpg"),
    ("oppenheimer", "/8Gxv8gSFCU0XGDykEGv7zR1n2ua.jpg"),
    ("barbie", "/iuFNMS8U5cb6xfzi51Dbkovj7vM.jpg"),
    ("killers of the flower moon", "/dB6Krk806zeqd0YNp2ngQ9zXteH.jpg"),
    ("napoleon", "/jE5o7y9K6pZtWNNMEw3IdpHuncR.jpg"),
    ("the batman", "/74xTEgt7R36Fpooo50r9T25onhq.jpg"),
    ("everything everywhere all at once", "/w3LxiVYdWWRvEVdn5RYq6jIqkb1.jpg"),
    // Classic movies
    ("the matrix", "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"),
    ("inception", "/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg"),
    ("interstellar", "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg"),
    ("pulp fiction", "/fIE3lAGcZDV1G6XM5KmuWnNsPp1.jpg"),
    ("the godfather", "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg"),
    ("fight club", "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"),
    ("goodfellas", "/aKuFiU82s5ISJpGZp7YkIr3kCUd.jpg"),
    ("the shawshank redemption", "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg"),
    ("forrest gump", "/arw2vcBveWOVZr6pxd9XTd1TdQa.jpg"),
    ("the dark knight", "/qJ2tW6WMUDux911r6m7haRef0WH.jpg"),
    ("jurassic park", "/oU7Oq2kFAAlGqbU4VoAE36g4hoI.jpg"),
    ("back to the future", "/fNOH9f1aA7XRTzl1sAOx9iF553Q.jpg"),
    // Recent series
    ("true detective night country", "/pB6rZt885qxdw00eXHj5bXhOSw6.jpg"),
    ("the last of us", "/uKvVjHNqB5VmOrdxqAt2F7J78ED.jpg"),
    ("succession", "/7HW47XbkNQ5fiwQFYGWdw9gs144.jpg"),
    ("house of the dragon", "/z2yahl2uefxDCl0nogcRBstwruJ.jpg"),
    ("the bear", "/r0yS0VyVYwYaGO3W9P3L9w3tIxU.jpg"),
    ("the white lotus", "/cBxKZ9t2qhcXEWLe4Cn9Uqp7rR2.jpg"),
    ("wednesday", "/9PFonBhy4cQy7Jz20NpMygczOkv.jpg"),
    ("andor", "/59SVNwLfoMnZPPB6ukW6dlPxAdI.jpg"),
    // Classic series
    ("breaking bad", "/ggFHVNu6YYI5L9pCfOacjizRGt.jpg"),
    ("game of thrones", "/u3bZgnGQ9T01sWNhyveQz0wH0Hl.jpg"),
    ("the wire", "/4cMrKpqyGJFyZGpH6R3oRjjw3hi.jpg"),
    ("the sopranos", "/6nqpp9JxMwXZ2aSwUvTkYElYi3m.jpg"),
    ("mad men", "/7v6dX3BC9l47pJrWtrp2bbwquXa.jpg"),
    ("stranger things", "/49WJfeN0moxb9IPfGn8AIqMGskD.jpg"),
    ("chernobyl", "/hlLXt2tOPT6RRnjiUmoxyG1LTFi.jpg"),
    ("band of brothers", "/zReOJYste13Qq3T3B5OyXPWjv1O.jpg"),
    // Documentaries
    ("planet earth iii", "/dJPNduFKQyoqJDxX6TbMPyxUeqB.jpg"),
    ("blue planet ii", "/39nrZkLGgw3gKBtXNVtYRZX6OLj.jpg"),
    ("our planet", "/wRSnArnQBmeUYb5GWDU595tGFD9.jpg"),
    ("the last dance", "/oVf4xGGbCtwVHkKyx988J3GwPXs.jpg"),
    ("free solo", "/7T2DhQaNFfEt6rKDqqBGt6wNDyH.jpg"),
    ("blackfish", "/AdxgqXJ5rKvN6oNIgkJP3Q8uNCT.jpg"),
    ("march of the penguins", "/ksxZQp0j3DrL4UPP2iQkRd1UvY1.jpg"),
    ("my octopus teacher", "/uJhxgr1gZEXADwUSUM5znqQLyJy.jpg"),
    ("david attenborough a life on our planet", "/zRIjRw12HgNuNB8T6mpS4gqj8kQ.jpg"),
    ("wont you be my neighbor", "/fvX8S8aLBkqxVqPBsKVpV9qKo2E.jpg"),
];

pub const MOVIE_FALLBACK: &str =
    "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?q=80&w=1920&h=1080&fit=crop";
pub const SERIES_FALLBACK: &str =
    "https://images.unsplash.com/photo-1574375927938-d5a98e8ffe85?q=80&w=1920&h=1080&fit=crop";
pub const DOCUMENTARY_FALLBACK: &str =
    "https://images.unsplash.com/photo-1552800631-5fba77be42c8?q=80&w=1920&h=1080&fit=crop";

/// Normalize a title for poster lookup
///
/// Lowercases, turns `:` and the dash family into spaces, collapses
/// whitespace, trims, and drops parenthesized annotations such as a year:
/// `"Dune: Part Two (2024)"` becomes `"dune part two"`.
pub fn normalize_title(title: &str) -> String {
    let lowered: String = title
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ':' | '-' | '–' | '—' => ' ',
            other => other,
        })
        .collect();

    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    // A leading group leaves a space behind, so collapse once more
    strip_parenthesized(&collapsed)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove every `(...)` group together with the whitespace in front of it.
/// An unclosed `(` is kept as-is.
fn strip_parenthesized(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Immutable title → poster URL table with per-type fallbacks
///
/// Built once at startup and shared by reference; there is no way to mutate
/// it after construction.
#[derive(Debug, Clone)]
pub struct PosterCatalog {
    entries: Vec<(String, String)>,
    movie_fallback: String,
    series_fallback: String,
    documentary_fallback: String,
}

impl PosterCatalog {
    /// The built-in reference table and fallbacks
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
            movie_fallback: MOVIE_FALLBACK.to_string(),
            series_fallback: SERIES_FALLBACK.to_string(),
            documentary_fallback: DOCUMENTARY_FALLBACK.to_string(),
        }
    }

    /// A table with only the given entries (keys are normalized on the way in)
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (normalize_title(k.as_ref()), v.into()))
                .collect(),
            ..Self::builtin()
        }
    }

    /// Build the table from configuration. Configured entries come first so
    /// they win both exact and partial matches over the built-in ones.
    pub fn from_config(config: &PosterConfig) -> Self {
        let mut entries: Vec<(String, String)> = config
            .entries
            .iter()
            .map(|e| (normalize_title(&e.title), e.url.clone()))
            .collect();
        if config.include_builtin {
            entries.extend(builtin_entries());
        }

        let fallbacks = &config.fallbacks;
        Self {
            entries,
            movie_fallback: fallbacks.movie.clone().unwrap_or_else(|| MOVIE_FALLBACK.to_string()),
            series_fallback: fallbacks.series.clone().unwrap_or_else(|| SERIES_FALLBACK.to_string()),
            documentary_fallback: fallbacks
                .documentary
                .clone()
                .unwrap_or_else(|| DOCUMENTARY_FALLBACK.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fallback(&self, content_type: ContentType) -> &str {
        match content_type {
            ContentType::Movie => &self.movie_fallback,
            ContentType::Series => &self.series_fallback,
            ContentType::Documentary => &self.documentary_fallback,
        }
    }

    /// Look up a poster for `title`, falling back by content type. Never fails.
    pub fn resolve(&self, title: &str, content_type: ContentType) -> &str {
        self.lookup(title).unwrap_or_else(|| self.fallback(content_type))
    }

    /// Same as [`resolve`](Self::resolve) for an untyped content kind; an
    /// unrecognized kind uses the movie fallback.
    pub fn resolve_raw(&self, title: &str, content_type: &str) -> &str {
        let content_type = content_type.parse().unwrap_or(ContentType::Movie);
        self.resolve(title, content_type)
    }

    /// Exact match on the normalized title, then the first table entry whose
    /// key contains the title or is contained in it.
    pub fn lookup(&self, title: &str) -> Option<&str> {
        let normalized = normalize_title(title);

        if let Some((_, url)) = self.entries.iter().find(|(key, _)| *key == normalized) {
            return Some(url.as_str());
        }

        // An empty title is a substring of every key
        if normalized.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(key, _)| normalized.contains(key.as_str()) || key.contains(normalized.as_str()))
            .map(|(_, url)| url.as_str())
    }
}

impl Default for PosterCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entries() -> Vec<(String, String)> {
    BUILTIN_POSTERS
        .iter()
        .map(|(key, path)| (key.to_string(), format!("{}{}", TMDB_BASE, path)))
        .collect()
}
