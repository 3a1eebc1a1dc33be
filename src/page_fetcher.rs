use std::{error::Error, thread, time::Duration};

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, info, warn};
use reqwest::Client;

use crate::utilities::{
    config::{Config, FetcherKind},
    constants::TABLE_WAIT_TIMEOUT_SECS,
};

pub type FetchError = Box<dyn Error + Send + Sync>;

/// Something that can hand back the HTML of a page once it has finished loading.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

pub fn fetcher_from_config(config: &Config) -> Box<dyn PageFetcher> {
    match config.fetcher {
        FetcherKind::Browser => Box::new(BrowserFetcher::new(
            config.headless,
            Duration::from_millis(config.page_settle_ms),
        )),
        FetcherKind::Http => Box::new(HttpFetcher::new(Client::new())),
    }
}

/// Loads pages in Chromium so the price table gets rendered by the page's
/// own scripts. A new browser is started for every page.
#[derive(Debug, Clone)]
pub struct BrowserFetcher {
    headless: bool,
    settle: Duration,
}

impl BrowserFetcher {
    pub fn new(headless: bool, settle: Duration) -> Self {
        BrowserFetcher { headless, settle }
    }

    fn load_page(url: &str, headless: bool, settle: Duration) -> Result<String, FetchError> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .idle_browser_timeout(Duration::from_secs(TABLE_WAIT_TIMEOUT_SECS * 4))
            .build()
            .map_err(|e| format!("Invalid browser options: {}", e))?;

        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;

        debug!("Navigating to {}", url);
        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;

        if let Err(e) = tab.wait_for_element_with_custom_timeout(
            "table",
            Duration::from_secs(TABLE_WAIT_TIMEOUT_SECS),
        ) {
            warn!("No table rendered on {} yet: {}", url, e);
        }

        // The guide keeps filling rows in after the first table shows up
        thread::sleep(settle);

        let html = tab.get_content()?;
        info!("Loaded {} bytes from {}", html.len(), url);
        Ok(html)
    }
}

#[async_trait]
impl PageFetcher for BrowserFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let url = url.to_string();
        let headless = self.headless;
        let settle = self.settle;

        tokio::task::spawn_blocking(move || Self::load_page(&url, headless, settle)).await?
    }
}

/// Plain GET, for pages that are rendered server side and for local mirrors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        HttpFetcher { client }
    }

    fn setup_http_headers() -> reqwest::header::HeaderMap {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("text/html,*/*"),
        );
        header_map.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("swu_price_guide/0.1"),
        );
        header_map
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let html = self
            .client
            .get(url)
            .headers(Self::setup_http_headers())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }
}
