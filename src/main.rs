use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use pagewords::{
    CommonWordMiner, Config, KeywordExtractor, KeywordTableWriter, PageFetcher, StopWords,
    COMMON_WORDS_FILE, KEYWORDS_FILE, URLS_FILE,
};

#[allow(missing_docs)]
#[derive(Debug, StructOpt)]
#[structopt(name = "pagewords", about = "Keyword extraction for web pages.")]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
enum App {
    #[structopt(
        name = "keywords",
        about = "Fetch every url and write its most frequent words as a csv table."
    )]
    Keywords {
        #[structopt(
            long = "urls",
            help = "File with one url per line.",
            default_value = URLS_FILE,
            parse(from_os_str)
        )]
        urls: PathBuf,
        #[structopt(
            long = "common-words",
            help = "File with words to exclude, one per line.",
            default_value = COMMON_WORDS_FILE,
            parse(from_os_str)
        )]
        common_words: PathBuf,
        #[structopt(
            long = "output",
            short = "o",
            help = "The file to store the keyword table.",
            default_value = KEYWORDS_FILE,
            parse(from_os_str)
        )]
        output: PathBuf,
        #[structopt(long = "max-keywords", help = "Number of keywords per page.")]
        max_keywords: Option<usize>,
        #[structopt(long = "user-agent", help = "The user-agent used for requests.")]
        user_agent: Option<String>,
        #[structopt(long = "timeout", help = "Request timeout in seconds.")]
        timeout: Option<u64>,
    },
    #[structopt(
        name = "common-words",
        about = "Derive the common words list from a keyword table."
    )]
    CommonWords {
        #[structopt(
            long = "input",
            short = "i",
            help = "The keyword table.",
            default_value = KEYWORDS_FILE,
            parse(from_os_str)
        )]
        input: PathBuf,
        #[structopt(
            long = "output",
            short = "o",
            help = "The file to store the common words.",
            default_value = COMMON_WORDS_FILE,
            parse(from_os_str)
        )]
        output: PathBuf,
        #[structopt(
            long = "threshold",
            help = "Words occurring more often than this are common."
        )]
        threshold: Option<usize>,
    },
}

impl App {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            App::Keywords {
                urls,
                common_words,
                output,
                max_keywords,
                user_agent,
                timeout,
            } => {
                let mut config = Config::builder();
                if let Some(max_keywords) = max_keywords {
                    config = config.max_keywords(max_keywords);
                }
                if let Some(user_agent) = user_agent {
                    config = config.browser_user_agent(user_agent);
                }
                if let Some(timeout) = timeout {
                    config = config.request_timeout(Duration::from_secs(timeout));
                }
                let config = config.build();

                let urls = pagewords::table::load_urls(urls).await;
                let common_words = StopWords::read_common_words(common_words);
                log::debug!("excluding {} common words", common_words.len());
                let extractor = KeywordExtractor::with_config(&common_words, &config);
                let fetcher = PageFetcher::new(&config)?;

                KeywordTableWriter::new(&fetcher, &extractor)
                    .write_file(&urls, output)
                    .await?;
            }
            App::CommonWords {
                input,
                output,
                threshold,
            } => {
                let mut config = Config::builder();
                if let Some(threshold) = threshold {
                    config = config.common_word_threshold(threshold);
                }
                CommonWordMiner::with_config(&config.build()).mine_file(input, output)?;
            }
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_default())
        .init();

    App::from_args().run().await
}
