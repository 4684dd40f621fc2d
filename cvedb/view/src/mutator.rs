use crate::surface::Prompt;
use crate::CveBackend;
use cvedb_model::{CveRecord, CveRecordUpdate, NewCveRecord};

/// Creates, updates, and deletes records.
///
/// The plain operations only log failures. The `*_from_form` variants are bound to user actions,
/// and additionally report the outcome through the [`Prompt`].
pub struct RecordMutator<B, P> {
    backend: B,
    prompt: P,
}

impl<B, P> RecordMutator<B, P>
where
    B: CveBackend,
    P: Prompt,
{
    pub fn new(backend: B, prompt: P) -> Self {
        Self { backend, prompt }
    }

    pub async fn fetch(&self, id: &str) -> Option<CveRecord> {
        match self.backend.get(id).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                log::error!("Error fetching CVE by ID: {id} not found");
                None
            }
            Err(err) => {
                log::error!("Error fetching CVE by ID: {err}");
                None
            }
        }
    }

    pub async fn create(&self, record: &NewCveRecord) -> Option<CveRecord> {
        match self.backend.create(record).await {
            Ok(record) => Some(record),
            Err(err) => {
                log::error!("Error creating CVE: {err}");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, update: &CveRecordUpdate) -> Option<CveRecord> {
        match self.backend.update(id, update).await {
            Ok(record) => Some(record),
            Err(err) => {
                log::error!("Error updating CVE: {err}");
                None
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.backend.delete(id).await {
            Ok(()) => {
                log::info!("CVE deleted successfully");
                true
            }
            Err(err) => {
                log::error!("Error deleting CVE: {err}");
                false
            }
        }
    }

    /// Create a record from the create dialog.
    pub async fn create_from_form(&self, record: &NewCveRecord) -> Option<CveRecord> {
        let result = self.create(record).await;
        match &result {
            Some(_) => self.prompt.alert("CVE created successfully"),
            None => self.prompt.alert("Error creating CVE"),
        }
        result
    }

    /// Save the details form of a record.
    pub async fn save_from_form(&self, id: &str, update: &CveRecordUpdate) -> Option<CveRecord> {
        let result = self.update(id, update).await;
        match &result {
            Some(_) => self.prompt.alert("CVE updated successfully"),
            None => self.prompt.alert("Error updating CVE"),
        }
        result
    }

    /// Delete the record of the details form, after confirmation. On success, navigates back
    /// to the search page.
    pub async fn delete_from_form(&self, id: &str) -> bool {
        if !self.prompt.confirm("Are you sure you want to delete this CVE?") {
            return false;
        }

        if self.delete(id).await {
            self.prompt.alert("CVE deleted successfully");
            self.prompt.navigate("/");
            true
        } else {
            self.prompt.alert("Error deleting CVE");
            false
        }
    }
}
