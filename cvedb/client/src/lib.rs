mod error;

pub use error::*;

use cvedb_api::search::{SearchParameters, SearchResult};
use cvedb_api::Apply;
use reqwest::{StatusCode, Url};
use url::ParseError;

pub use cvedb_model::*;

pub struct CveUrl {
    base_url: Url,
}

impl CveUrl {
    pub fn new(mut base_url: Url) -> Self {
        // ensure joins are relative to the full base path
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url }
    }

    pub fn ping_url(&self) -> Result<Url, ParseError> {
        self.base_url.join("api/v1/cve/ping")
    }

    pub fn list_url(&self) -> Result<Url, ParseError> {
        self.base_url.join("api/v1/cve/list")
    }

    pub fn create_url(&self) -> Result<Url, ParseError> {
        self.base_url.join("api/v1/cve/create")
    }

    pub fn bulk_create_url(&self) -> Result<Url, ParseError> {
        self.base_url.join("api/v1/cve/bulk_create")
    }

    /// The URL of a single record, used to fetch, update, and delete it.
    pub fn cve_url(&self, id: impl AsRef<str>) -> Result<Url, ParseError> {
        self.segment_url("api/v1/cve", id)
    }

    fn segment_url(&self, path: &str, id: impl AsRef<str>) -> Result<Url, ParseError> {
        let mut url = self.base_url.join(path)?;
        url.path_segments_mut()
            .map_err(|()| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(id.as_ref());
        Ok(url)
    }
}

/// Client for the CVE record API.
pub struct CveClient {
    client: reqwest::Client,
    url: CveUrl,
}

impl CveClient {
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self {
            client,
            url: CveUrl::new(url),
        }
    }

    pub async fn ping(&self) -> Result<String, Error> {
        Ok(self
            .client
            .get(self.url.ping_url()?)
            .send()
            .await?
            .api_error_for_status()
            .await?
            .text()
            .await?)
    }

    /// Fetch a single record, returns `None` if the record doesn't exist.
    pub async fn get(&self, id: &str) -> Result<Option<CveRecord>, Error> {
        let url = self.url.cve_url(id)?;
        log::debug!("Fetching CVE record: {url}");

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(response.api_error_for_status().await?.json().await?))
    }

    pub async fn search(&self, parameters: &SearchParameters) -> Result<SearchResult<CveRecord>, Error> {
        log::debug!("Searching CVE records: {parameters:?}");

        Ok(self
            .client
            .get(self.url.list_url()?)
            .apply(parameters)
            .send()
            .await?
            .api_error_for_status()
            .await?
            .json()
            .await?)
    }

    pub async fn create(&self, record: &NewCveRecord) -> Result<CveRecord, Error> {
        Ok(self
            .client
            .post(self.url.create_url()?)
            .json(record)
            .send()
            .await?
            .api_error_for_status()
            .await?
            .json()
            .await?)
    }

    pub async fn bulk_create(&self, records: &[NewCveRecord]) -> Result<BulkCreateResponse, Error> {
        Ok(self
            .client
            .post(self.url.bulk_create_url()?)
            .json(records)
            .send()
            .await?
            .api_error_for_status()
            .await?
            .json()
            .await?)
    }

    pub async fn update(&self, id: &str, update: &CveRecordUpdate) -> Result<CveRecord, Error> {
        Ok(self
            .client
            .patch(self.url.cve_url(id)?)
            .json(update)
            .send()
            .await?
            .api_error_for_status()
            .await?
            .json()
            .await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.client
            .delete(self.url.cve_url(id)?)
            .send()
            .await?
            .api_error_for_status()
            .await?;
        Ok(())
    }
}
