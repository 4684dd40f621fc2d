use crate::surface::{Prompt, Surface};
use crate::{CveBackend, PaginationView, TableView};
use async_trait::async_trait;
use cvedb_api::search::{SearchParameters, SearchResult};
use cvedb_client::{ApiErrorDetails, Error};
use cvedb_model::{CveRecord, CveRecordUpdate, NewCveRecord};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub fn record(id: impl Into<String>) -> CveRecord {
    CveRecord {
        id: id.into(),
        assigner_org_id: None,
        state: Some("PUBLISHED".into()),
        assigner_short_name: Some("mitre".into()),
        date_reserved: None,
        date_published: None,
        date_updated: None,
        problem_types: vec![],
        references: vec![],
    }
}

/// A backend with `total` records, which fails on request.
#[derive(Default)]
pub struct MockBackend {
    total: usize,
    fail: AtomicBool,
    requests: Mutex<Vec<SearchParameters>>,
    calls: Mutex<Vec<String>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
}

impl MockBackend {
    pub fn with_pages(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Hold back the response of the next search, until the gate gets released.
    pub fn hold(&self, gate: oneshot::Receiver<()>) {
        self.gates.lock().unwrap().push_back(gate);
    }

    pub fn requests(&self) -> Vec<SearchParameters> {
        self.requests.lock().unwrap().clone()
    }

    /// Mutating calls, as `<operation> <id>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, call: String) -> Result<(), Error> {
        self.calls.lock().unwrap().push(call);
        match self.fail.load(Ordering::SeqCst) {
            true => Err(Error::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                details: ApiErrorDetails::Empty,
            }),
            false => Ok(()),
        }
    }
}

#[async_trait]
impl CveBackend for MockBackend {
    async fn search(&self, parameters: &SearchParameters) -> Result<SearchResult<CveRecord>, Error> {
        self.requests.lock().unwrap().push(parameters.clone());

        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Api {
                status: StatusCode::SERVICE_UNAVAILABLE,
                details: ApiErrorDetails::Empty,
            });
        }

        let size = parameters.size;
        let start = (parameters.page - 1) * size;
        let end = self.total.min(start + size);

        Ok(SearchResult {
            items: (start..end).map(|n| record(format!("CVE-2021-{n:04}"))).collect(),
            total: self.total,
            page: parameters.page,
            size,
            pages: self.total.div_ceil(size),
        })
    }

    async fn get(&self, id: &str) -> Result<Option<CveRecord>, Error> {
        self.check(format!("get {id}"))?;
        Ok(Some(record(id)))
    }

    async fn create(&self, record: &NewCveRecord) -> Result<CveRecord, Error> {
        self.check(format!("create {}", record.id))?;
        Ok(CveRecord {
            state: record.state.clone(),
            ..self::record(record.id.clone())
        })
    }

    async fn update(&self, id: &str, update: &CveRecordUpdate) -> Result<CveRecord, Error> {
        self.check(format!("update {id}"))?;
        Ok(CveRecord {
            state: update.state.clone(),
            ..record(id)
        })
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        self.check(format!("delete {id}"))
    }
}

#[derive(Default)]
pub struct MockSurface {
    tables: Mutex<Vec<TableView>>,
    paginations: Mutex<Vec<PaginationView>>,
}

impl MockSurface {
    pub fn renders(&self) -> usize {
        self.tables.lock().unwrap().len()
    }

    pub fn last_table(&self) -> Option<TableView> {
        self.tables.lock().unwrap().last().cloned()
    }

    pub fn last_pagination(&self) -> Option<PaginationView> {
        self.paginations.lock().unwrap().last().cloned()
    }
}

impl Surface for MockSurface {
    fn render_table(&self, table: &TableView) {
        self.tables.lock().unwrap().push(table.clone());
    }

    fn render_pagination(&self, pagination: &PaginationView) {
        self.paginations.lock().unwrap().push(pagination.clone());
    }
}

#[derive(Default)]
pub struct MockPrompt {
    pub decline: bool,
    pub alerts: Mutex<Vec<String>>,
    pub confirmations: Mutex<Vec<String>>,
    pub navigations: Mutex<Vec<String>>,
}

impl Prompt for MockPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        !self.decline
    }

    fn navigate(&self, location: &str) {
        self.navigations.lock().unwrap().push(location.to_string());
    }
}
