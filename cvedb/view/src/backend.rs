use async_trait::async_trait;
use cvedb_api::search::{SearchParameters, SearchResult};
use cvedb_client::{CveClient, Error};
use cvedb_model::{CveRecord, CveRecordUpdate, NewCveRecord};

/// The operations of the backend the page uses.
#[async_trait]
pub trait CveBackend: Send + Sync {
    async fn search(&self, parameters: &SearchParameters) -> Result<SearchResult<CveRecord>, Error>;
    async fn get(&self, id: &str) -> Result<Option<CveRecord>, Error>;
    async fn create(&self, record: &NewCveRecord) -> Result<CveRecord, Error>;
    async fn update(&self, id: &str, update: &CveRecordUpdate) -> Result<CveRecord, Error>;
    async fn delete(&self, id: &str) -> Result<(), Error>;
}

#[async_trait]
impl CveBackend for CveClient {
    async fn search(&self, parameters: &SearchParameters) -> Result<SearchResult<CveRecord>, Error> {
        CveClient::search(self, parameters).await
    }

    async fn get(&self, id: &str) -> Result<Option<CveRecord>, Error> {
        CveClient::get(self, id).await
    }

    async fn create(&self, record: &NewCveRecord) -> Result<CveRecord, Error> {
        CveClient::create(self, record).await
    }

    async fn update(&self, id: &str, update: &CveRecordUpdate) -> Result<CveRecord, Error> {
        CveClient::update(self, id, update).await
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        CveClient::delete(self, id).await
    }
}

#[async_trait]
impl<T: CveBackend + ?Sized> CveBackend for &T {
    async fn search(&self, parameters: &SearchParameters) -> Result<SearchResult<CveRecord>, Error> {
        (**self).search(parameters).await
    }

    async fn get(&self, id: &str) -> Result<Option<CveRecord>, Error> {
        (**self).get(id).await
    }

    async fn create(&self, record: &NewCveRecord) -> Result<CveRecord, Error> {
        (**self).create(record).await
    }

    async fn update(&self, id: &str, update: &CveRecordUpdate) -> Result<CveRecord, Error> {
        (**self).update(id, update).await
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        (**self).delete(id).await
    }
}
