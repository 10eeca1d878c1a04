use anyhow::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::PagewordsError;

/// Retrieves the content of a page.
pub trait Fetch: Sync {
    /// Issues exactly one request for the url and returns the body of a
    /// `200 OK` response.
    fn try_fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, PagewordsError>>;

    /// Same as [`Fetch::try_fetch`], but any failure is logged and results in
    /// an empty body.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, String> {
        async move {
            match self.try_fetch(url).await {
                Ok(body) => body,
                Err(err) => {
                    log::warn!("{}", err);
                    String::new()
                }
            }
        }
        .boxed()
    }
}

/// Fetches pages over http(s) without any retries.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    /// The [`reqwest::Client`] that drives requests.
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.browser_user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for PageFetcher {
    fn try_fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, PagewordsError>> {
        let request_failure = move |error| PagewordsError::HttpRequestFailure {
            url: url.to_string(),
            error,
        };
        async move {
            let resp = self.client.get(url).send().await.map_err(request_failure)?;

            if resp.status() != StatusCode::OK {
                return Err(PagewordsError::NoHttpSuccess {
                    url: url.to_string(),
                    status: resp.status(),
                });
            }

            resp.text().await.map_err(request_failure)
        }
        .boxed()
    }
}
