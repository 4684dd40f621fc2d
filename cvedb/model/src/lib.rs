pub mod datetime;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A CVE record, as stored by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CveRecord {
    /// CVE identifier, e.g. `CVE-2021-1234`
    pub id: String,
    #[serde(default)]
    pub assigner_org_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub assigner_short_name: Option<String>,
    #[serde(default, with = "datetime::option")]
    pub date_reserved: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime::option")]
    pub date_published: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime::option")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub problem_types: Vec<ProblemType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    /// Comma separated list of tags
    #[serde(default)]
    pub tags: Option<String>,
}

impl Reference {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .flat_map(|tags| tags.split(','))
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// A new record, to be created.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NewCveRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner_org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner_short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "datetime::option")]
    pub date_reserved: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "datetime::option")]
    pub date_published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "datetime::option")]
    pub date_updated: Option<DateTime<Utc>>,
}

impl NewCveRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing record. Only fields which are set get sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CveRecordUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner_org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner_short_name: Option<String>,
    /// The backend only accepts a plain date (`YYYY-MM-DD`) here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<NaiveDate>,
}

impl CveRecordUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Response of a bulk creation request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BulkCreateResponse {
    pub detail: String,
}
