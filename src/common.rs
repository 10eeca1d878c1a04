use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::PagewordsError;
use crate::freq::FreqDist;
use crate::table::split_keywords;

/// Name of the column that holds the keywords.
const KEYWORDS_COLUMN: &str = "Keywords";

/// Finds words that show up as keywords of many pages.
///
/// Every occurrence in the keyword table counts, so a word listed twice in
/// one row counts twice.
#[derive(Debug, Clone)]
pub struct CommonWordMiner {
    /// A word is common if its count is strictly greater.
    threshold: usize,
}

impl CommonWordMiner {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn with_config(config: &Config) -> Self {
        Self::new(config.common_word_threshold)
    }

    /// Counts all keywords of the table.
    ///
    /// Fails if the table has no `Keywords` column or a row doesn't match the
    /// header.
    pub fn count_keywords<R: io::Read>(&self, rdr: R) -> Result<FreqDist> {
        let mut rdr = csv::Reader::from_reader(rdr);
        let column = rdr
            .headers()?
            .iter()
            .position(|h| h == KEYWORDS_COLUMN)
            .ok_or(PagewordsError::MissingColumn {
                column: KEYWORDS_COLUMN,
            })?;

        let mut dist = FreqDist::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record.with_context(|| format!("Malformed row {}", line + 1))?;
            let cell = record
                .get(column)
                .ok_or(PagewordsError::MissingColumn {
                    column: KEYWORDS_COLUMN,
                })?;
            dist.extend(split_keywords(cell));
        }
        log::debug!(
            "counted {} keywords, {} distinct",
            dist.total(),
            dist.len()
        );
        Ok(dist)
    }

    /// All words of the distribution above the threshold, in first seen
    /// order.
    pub fn select(&self, dist: &FreqDist) -> Vec<String> {
        dist.iter()
            .filter(|(_, count)| *count > self.threshold)
            .map(|(word, _)| word.to_string())
            .collect()
    }

    /// The common words of a keyword table.
    pub fn mine<R: io::Read>(&self, rdr: R) -> Result<Vec<String>> {
        Ok(self.select(&self.count_keywords(rdr)?))
    }

    /// Reads the keyword table at `input` and writes the common words to
    /// `output`, one per line. Returns the common words.
    pub fn mine_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<Vec<String>> {
        let input = input.as_ref();
        let table = std::fs::File::open(input)
            .with_context(|| format!("Failed to open keyword table {:?}", input))?;
        let words = self.mine(io::BufReader::new(table))?;

        let output = output.as_ref();
        write_words(&words, output).with_context(|| format!("Failed to write {:?}", output))?;
        println!("Common words list generated with {} words.", words.len());
        Ok(words)
    }
}

impl Default for CommonWordMiner {
    fn default() -> Self {
        CommonWordMiner::new(Config::DEFAULT_COMMON_WORD_THRESHOLD)
    }
}

fn write_words(words: &[String], path: &Path) -> io::Result<()> {
    use io::Write;
    let mut out = io::BufWriter::new(std::fs::File::create(path)?);
    for word in words {
        writeln!(out, "{}", word)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopWords;
    use crate::table::KeywordRow;

    fn table(rows: &[KeywordRow]) -> Vec<u8> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.into_inner().unwrap()
    }

    #[test]
    fn strictly_above_threshold() {
        let mut rows = Vec::new();
        for i in 0..15 {
            let mut keywords = vec!["the"];
            if i < 10 {
                keywords.push("ten");
            }
            if i == 0 {
                keywords.push("once");
            }
            rows.push(KeywordRow::new(format!("http://{}.example", i), keywords));
        }
        let miner = CommonWordMiner::new(10);
        let dist = miner.count_keywords(&table(&rows)[..]).unwrap();
        assert_eq!(dist.count("the"), 15);
        assert_eq!(dist.count("ten"), 10);
        assert_eq!(miner.select(&dist), vec!["the"]);
    }

    #[test]
    fn counts_duplicates_within_row() {
        let rows = vec![
            KeywordRow::new("http://a.example", vec!["rust", "rust", "crab"]),
            KeywordRow::new("http://b.example", vec!["rust"]),
        ];
        let miner = CommonWordMiner::new(2);
        assert_eq!(miner.mine(&table(&rows)[..]).unwrap(), vec!["rust"]);
    }

    #[test]
    fn first_seen_order() {
        let rows = vec![
            KeywordRow::new("http://a.example", vec!["b", "a"]),
            KeywordRow::new("http://b.example", vec!["a", "b", "c"]),
        ];
        let miner = CommonWordMiner::new(1);
        assert_eq!(miner.mine(&table(&rows)[..]).unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn empty_keywords_cell() {
        let csv = "URL,Keywords\nhttp://a.example,\nhttp://b.example,\"x, y\"\n";
        let dist = CommonWordMiner::default()
            .count_keywords(csv.as_bytes())
            .unwrap();
        assert_eq!(dist.total(), 2);
    }

    #[test]
    fn missing_column() {
        let csv = "URL,Words\nhttp://a.example,x\n";
        let err = CommonWordMiner::default()
            .mine(csv.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PagewordsError>(),
            Some(PagewordsError::MissingColumn { .. })
        ));
    }

    #[test]
    fn malformed_row() {
        let csv = "URL,Keywords\nhttp://a.example\n";
        assert!(CommonWordMiner::default().mine(csv.as_bytes()).is_err());
    }

    #[test]
    fn mine_file_writes_words() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("keywords.csv");
        let output = dir.path().join("common_words.txt");
        let rows = vec![
            KeywordRow::new("http://a.example", vec!["menu", "home"]),
            KeywordRow::new("http://b.example", vec!["menu", "rust"]),
        ];
        std::fs::write(&input, table(&rows)).unwrap();

        let words = CommonWordMiner::new(1).mine_file(&input, &output).unwrap();
        assert_eq!(words, vec!["menu"]);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "menu\n");

        let common = StopWords::read_file(&output).unwrap();
        assert!(common.contains("menu"));
    }

    #[test]
    fn missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let res = CommonWordMiner::default().mine_file(
            dir.path().join("keywords.csv"),
            dir.path().join("common_words.txt"),
        );
        assert!(res.is_err());
        assert!(!dir.path().join("common_words.txt").exists());
    }
}
