use std::collections::HashSet;

/// Replacement written in place of every blocklisted word.
pub const MASK: &str = "****";

/// Words masked when no blocklist is configured.
pub const DEFAULT_BLOCKLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Set of lowercase words that get masked out of chirp bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklist {
    words: HashSet<String>,
}

impl Blocklist {
    /// Build a blocklist from arbitrary words. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { words }
    }

    /// True if the token, compared case-insensitively, is blocklisted.
    /// Only whole tokens match: "kerfufflex" is not "kerfuffle".
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    /// Number of distinct words after normalisation.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// An empty blocklist masks nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Mask every blocklisted token in `body`.
    ///
    /// The body is split on the ASCII space character only, so runs of
    /// spaces yield empty tokens which are kept and rejoined as-is. Other
    /// whitespace (tabs, newlines) stays inside its token, and punctuation is
    /// part of the token too: "fornax!" is left alone.
    pub fn censor(&self, body: &str) -> String {
        body.split(' ')
            .map(|token| if self.contains(token) { MASK } else { token })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKLIST)
    }
}

/// Free-function form of [`Blocklist::censor`].
pub fn censor(body: &str, blocklist: &Blocklist) -> String {
    blocklist.censor(body)
}
