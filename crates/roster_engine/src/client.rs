use std::time::Duration;

use roster_core::CatalogPage;

use crate::types::{FailureKind, FetchError};

/// Default public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    settings: CatalogSettings,
}

impl ReqwestCatalogClient {
    pub fn new(settings: CatalogSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn page_url(&self, page: u32) -> String {
        format!(
            "{}/character?page={page}",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl CatalogFetcher for ReqwestCatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, FetchError> {
        if page == 0 {
            return Err(FetchError::new(
                FailureKind::InvalidPage,
                "catalog pages are 1-based",
            ));
        }

        let client = self.build_client()?;
        let response = client
            .get(self.page_url(page))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let envelope: wire::PageEnvelope = response.json().await.map_err(map_reqwest_error)?;
        Ok(envelope.into_page())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

mod wire {
    use roster_core::{CatalogPage, CharacterRecord};
    use serde::Deserialize;

    /// Catalog page envelope: `{ "info": { "next": url-or-null, ... },
    /// "results": [...] }`. A next link implies another page exists.
    #[derive(Debug, Deserialize)]
    pub(crate) struct PageEnvelope {
        #[serde(default)]
        pub info: PageInfo,
        #[serde(default)]
        pub results: Vec<CharacterRecord>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(crate) struct PageInfo {
        #[serde(default)]
        pub next: Option<String>,
    }

    impl PageEnvelope {
        pub(crate) fn into_page(self) -> CatalogPage {
            CatalogPage {
                has_next: self.info.next.is_some(),
                records: self.results,
            }
        }
    }
}
