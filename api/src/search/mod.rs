mod result;

pub use result::*;

use crate::Apply;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parameters of a paginated search for CVE records.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SearchParameters {
    /// Filter by (partial) CVE id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk: Option<String>,
    /// Only records published on or after this date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Only records published on or before this date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// One based page number
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

const fn default_page() -> usize {
    1
}

const fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            pk: None,
            start_date: None,
            end_date: None,
            page: default_page(),
            size: default_size(),
        }
    }
}

impl SearchParameters {
    /// Set the page, pages start at `1`.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size, which must be at least `1`.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size.max(1);
        self
    }

    /// The query pairs, as sent to the list endpoint.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);

        if let Some(pk) = &self.pk {
            pairs.push(("pk", pk.clone()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("end_date", end_date.clone()));
        }

        pairs.push(("page", self.page.max(1).to_string()));
        pairs.push(("size", self.size.max(1).to_string()));

        pairs
    }
}

impl Apply<SearchParameters> for reqwest::RequestBuilder {
    fn apply(self, parameters: &SearchParameters) -> Self {
        self.query(&parameters.query_pairs())
    }
}
