use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fetch::Fetch;
use crate::keywords::KeywordExtractor;
use crate::text::TextExtractor;

/// Separator between the keywords of a single row.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// A single row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRow {
    #[serde(rename = "URL")]
    pub url: String,
    /// All keywords joined by [`KEYWORD_SEPARATOR`].
    #[serde(rename = "Keywords")]
    pub keywords: String,
}

impl KeywordRow {
    pub fn new<I, T>(url: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut joined = String::new();
        for keyword in keywords {
            if !joined.is_empty() {
                joined.push_str(KEYWORD_SEPARATOR);
            }
            joined.push_str(keyword.as_ref());
        }
        Self {
            url: url.into(),
            keywords: joined,
        }
    }

    /// The individual keywords of this row.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        split_keywords(&self.keywords)
    }
}

/// Splits a keywords cell, an empty cell has no keywords.
pub fn split_keywords(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(KEYWORD_SEPARATOR).filter(|k| !k.is_empty())
}

/// Reads the urls to process, one per line.
///
/// Lines are trimmed and blank lines are skipped.
pub async fn read_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {:?}", path))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Like [`read_urls`], but an unreadable file yields no urls.
pub async fn load_urls<P: AsRef<Path>>(path: P) -> Vec<String> {
    match read_urls(path).await {
        Ok(urls) => urls,
        Err(err) => {
            log::warn!("Error reading file: {:#}", err);
            Vec::new()
        }
    }
}

/// Fetches every url in order and writes its keywords as a csv table.
pub struct KeywordTableWriter<'a, F: Fetch> {
    fetcher: &'a F,
    extractor: &'a KeywordExtractor,
}

impl<'a, F: Fetch> KeywordTableWriter<'a, F> {
    pub fn new(fetcher: &'a F, extractor: &'a KeywordExtractor) -> Self {
        Self { fetcher, extractor }
    }

    /// Fetch, strip and extract the keywords of a single page.
    ///
    /// A page that can't be fetched has no keywords.
    pub async fn process_url(&self, url: &str) -> Vec<String> {
        println!("Processing URL: {}", url);
        log::info!("Processing URL: {}", url);
        let html = self.fetcher.fetch(url).await;
        let text = TextExtractor::visible_text(&html);
        self.extractor.keywords(&text)
    }

    /// Writes the header and one row per url, in the order of `urls`.
    ///
    /// Returns the number of rows written.
    pub async fn write<W: io::Write>(&self, urls: &[String], out: W) -> Result<usize> {
        // the header is written explicitly, `serialize` only emits it with
        // the first row
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
        writer.write_record(&["URL", "Keywords"])?;

        for url in urls {
            let keywords = self.process_url(url).await;
            log::debug!("{} keywords for {}", keywords.len(), url);
            writer.serialize(KeywordRow::new(url.as_str(), &keywords))?;
            println!("Processed {}", url);
        }
        writer.flush()?;
        Ok(urls.len())
    }

    /// Writes the table for all `urls` to the file at `path`, replacing any
    /// existing file.
    ///
    /// Nothing is fetched or written if there are no urls.
    pub async fn write_file<P: AsRef<Path>>(&self, urls: &[String], path: P) -> Result<usize> {
        if urls.is_empty() {
            println!("No URLs found. Please check the file path and contents.");
            return Ok(0);
        }
        println!("Found {} URLs to process.", urls.len());

        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {:?}", path))?;
        let rows = self.write(urls, io::BufWriter::new(file)).await?;
        println!(
            "Keyword extraction complete. Data written to {}",
            path.display()
        );
        Ok(rows)
    }
}

/// Reads all rows of a keyword table.
pub fn read_rows<R: io::Read>(rdr: R) -> Result<Vec<KeywordRow>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    let rows: std::result::Result<Vec<KeywordRow>, _> = rdr.deserialize().collect();
    rows.context("Malformed keyword table")
}
