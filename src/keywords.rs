use crate::config::Config;
use crate::freq::FreqDist;
use crate::stopwords::{StopWords, ENGLISH_STOPWORDS};
use crate::text::{is_punctuation, TextExtractor};

/// Extracts the most frequent words of a text that are neither stopwords,
/// punctuation nor known common words.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Words that are never keywords.
    excluded: StopWords,
    /// Number of keywords to extract.
    max_keywords: usize,
}

impl KeywordExtractor {
    /// Excludes the english stopwords and the `common_words`.
    pub fn new(common_words: &StopWords) -> Self {
        let mut excluded = ENGLISH_STOPWORDS.clone();
        excluded.extend_from(common_words);
        Self {
            excluded,
            max_keywords: Config::DEFAULT_MAX_KEYWORDS,
        }
    }

    pub fn with_config(common_words: &StopWords, config: &Config) -> Self {
        Self::new(common_words).max_keywords(config.max_keywords)
    }

    pub fn max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Whether the lowercase token can never be a keyword.
    pub fn is_excluded(&self, token: &str) -> bool {
        is_punctuation(token) || self.excluded.contains(token)
    }

    /// The frequency distribution of all keyword candidates in the text.
    pub fn candidates(&self, text: &str) -> FreqDist {
        let text = text.to_lowercase();
        TextExtractor::tokens(&text)
            .filter(|token| !self.is_excluded(token))
            .collect()
    }

    /// Up to `max_keywords` keywords, most frequent first, ties in order of
    /// first occurrence.
    pub fn keywords(&self, text: &str) -> Vec<String> {
        self.candidates(text)
            .most_common(self.max_keywords)
            .into_iter()
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        KeywordExtractor::new(&StopWords::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cats_and_dogs() {
        let extractor = KeywordExtractor::default().max_keywords(5);
        assert_eq!(
            extractor.keywords("Cats and dogs. Cats run. Dogs run."),
            vec!["cats", "dogs", "run"]
        );
    }

    #[test]
    fn limits_keywords() {
        let extractor = KeywordExtractor::default().max_keywords(2);
        assert_eq!(
            extractor.keywords("rust rust rust crab crab ferris"),
            vec!["rust", "crab"]
        );
    }

    #[test]
    fn excludes_common_words() {
        let common: StopWords = vec!["Website", "home"].into_iter().collect();
        let extractor = KeywordExtractor::new(&common);
        assert_eq!(
            extractor.keywords("Home website home rust website"),
            vec!["rust"]
        );
    }

    #[test]
    fn empty_text() {
        assert!(KeywordExtractor::default().keywords("").is_empty());
        assert!(KeywordExtractor::default()
            .keywords("the and, of!")
            .is_empty());
    }

    #[test]
    fn deterministic() {
        let extractor = KeywordExtractor::default();
        let text = "zeta alpha beta gamma alpha zeta delta beta";
        let first = extractor.keywords(text);
        assert_eq!(first, vec!["zeta", "alpha", "beta", "gamma", "delta"]);
        for _ in 0..10 {
            assert_eq!(extractor.keywords(text), first);
        }
    }

    #[test]
    fn config_max_keywords() {
        let config = Config::builder().max_keywords(1).build();
        let extractor = KeywordExtractor::with_config(&StopWords::default(), &config);
        assert_eq!(extractor.keywords("fox owl owl"), vec!["owl"]);
    }
}
