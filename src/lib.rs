pub use common::CommonWordMiner;
pub use config::{Config, ConfigBuilder, COMMON_WORDS_FILE, KEYWORDS_FILE, URLS_FILE};
pub use error::PagewordsError;
pub use fetch::{Fetch, PageFetcher};
pub use freq::FreqDist;
pub use keywords::KeywordExtractor;
pub use stopwords::StopWords;
pub use table::{KeywordRow, KeywordTableWriter};
pub use text::TextExtractor;

pub mod clean;
pub mod common;
pub mod config;
mod error;
pub mod fetch;
pub mod freq;
pub mod keywords;
pub mod stopwords;
pub mod table;
pub mod text;

/// Rexported to implement custom document cleaners.
pub use select;
