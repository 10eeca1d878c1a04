use fnv::FnvHashMap;

/// Counts how often each token occurs.
///
/// Tokens remember the position they were first seen at, so
/// [`FreqDist::most_common`] orders ties by first occurrence and is fully
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct FreqDist {
    /// token -> (count, first seen index)
    counts: FnvHashMap<String, (usize, usize)>,
    /// Number of all tokens added.
    total: usize,
}

impl FreqDist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T: AsRef<str> + Into<String>>(&mut self, token: T) {
        let first_seen = self.counts.len();
        if let Some((count, _)) = self.counts.get_mut(token.as_ref()) {
            *count += 1;
        } else {
            self.counts.insert(token.into(), (1, first_seen));
        }
        self.total += 1;
    }

    /// How often the token was added.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).map(|(c, _)| *c).unwrap_or_default()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of all tokens added, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// All tokens with their count, in first seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by_key(|(_, (_, first_seen))| *first_seen);
        entries
            .into_iter()
            .map(|(token, (count, _))| (token.as_str(), *count))
    }

    /// The `n` most frequent tokens, most frequent first.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        // `iter` is in first seen order and the sort is stable
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        entries.truncate(n);
        entries
    }
}

impl<T: AsRef<str> + Into<String>> std::iter::FromIterator<T> for FreqDist {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dist = FreqDist::new();
        dist.extend(iter);
        dist
    }
}

impl<T: AsRef<str> + Into<String>> Extend<T> for FreqDist {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for token in iter {
            self.add(token);
        }
    }
}
