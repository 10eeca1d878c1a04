use lazy_static::lazy_static;
use regex::Regex;
use select::document::Document;

use crate::clean::{DefaultDocumentCleaner, DocumentCleaner};

lazy_static! {
    /// A word with optional inner apostrophes or hyphens, or a single symbol.
    static ref RE_TOKEN: Regex = Regex::new(r"\w+(?:['\-]\w+)*|[^\w\s]").unwrap();
}

pub struct TextExtractor;

impl TextExtractor {
    /// Strips the html down to the text a browser would display.
    ///
    /// Empty input yields an empty string, malformed html is parsed as
    /// leniently as the underlying html5ever parser allows.
    pub fn visible_text(html: &str) -> String {
        Self::visible_text_with_cleaner::<DefaultDocumentCleaner>(html)
    }

    pub fn visible_text_with_cleaner<T: DocumentCleaner>(html: &str) -> String {
        if html.trim().is_empty() {
            return String::new();
        }
        let doc = Document::from(html);
        T::clean_document_text(&doc)
    }

    /// Returns an iterator over all tokens of the text, in order of
    /// appearance.
    ///
    /// Punctuation is returned as separate single char tokens.
    pub fn tokens(txt: &str) -> impl Iterator<Item = &str> {
        RE_TOKEN.find_iter(txt).map(|m| m.as_str())
    }
}

/// Whether the token consists of punctuation only.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_sentence() {
        let tokens: Vec<_> = TextExtractor::tokens("cats and dogs. cats run, don't they?").collect();
        assert_eq!(
            tokens,
            vec!["cats", "and", "dogs", ".", "cats", "run", ",", "don't", "they", "?"]
        );
    }

    #[test]
    fn tokenize_hyphenated() {
        let tokens: Vec<_> = TextExtractor::tokens("state-of-the-art -- tools").collect();
        assert_eq!(tokens, vec!["state-of-the-art", "-", "-", "tools"]);
    }

    #[test]
    fn punctuation() {
        for c in r###",."'!?&-/:;()#$%*+<=>@[\]^_`{|}~"###.chars() {
            assert!(is_punctuation(&c.to_string()), "{}", c);
        }
        assert!(is_punctuation("“"));
        assert!(!is_punctuation("cats"));
        assert!(!is_punctuation("a."));
        assert!(!is_punctuation(""));
    }

    #[test]
    fn empty_html() {
        assert_eq!(TextExtractor::visible_text(""), "");
    }

    #[test]
    fn visible_text() {
        let txt = TextExtractor::visible_text(
            "<html><body><h1>Cats</h1><script>ignored()</script><p>and dogs</p></body></html>",
        );
        assert_eq!(txt.split_whitespace().collect::<Vec<_>>(), vec!["Cats", "and", "dogs"]);
    }
}
