use crate::surface::{Filters, SearchForm, Surface};
use crate::{CveBackend, PageLink, ResultsView};
use cvedb_api::search::{SearchParameters, SearchResult, DEFAULT_PAGE_SIZE};
use cvedb_model::CveRecord;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The result was rendered.
    Rendered,
    /// A newer search was issued while this one was in flight, the result was discarded.
    Stale,
    /// The search failed, the surface was left untouched.
    FetchFailed,
    /// Nothing was searched.
    Ignored,
}

/// Runs searches and renders their results.
///
/// Every search gets a token when it is issued. A result is only rendered if no other search was
/// issued in the meantime, so that the surface always shows the latest search, no matter in which
/// order responses arrive.
pub struct QueryController<B, S> {
    backend: B,
    surface: S,
    latest: AtomicU64,
}

impl<B, S> QueryController<B, S>
where
    B: CveBackend,
    S: Surface,
{
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface,
            latest: AtomicU64::new(0),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetch a page of records. Failures are logged and result in `None`.
    pub async fn search(&self, parameters: &SearchParameters) -> Option<SearchResult<CveRecord>> {
        match self.backend.search(parameters).await {
            Ok(result) => Some(result),
            Err(err) => {
                log::error!("Error fetching CVE records: {err}");
                None
            }
        }
    }

    /// Submit the search form, starting at the first page.
    ///
    /// The form is read once. Pagination links of the result keep searching with these values,
    /// even if the form is changed later on.
    pub async fn submit<F>(&self, form: &F) -> SearchOutcome
    where
        F: SearchForm + ?Sized,
    {
        let filters = Filters::capture(form);
        log::debug!("Submitting search: {filters:?}");

        self.search_and_render(&filters.to_parameters(1, DEFAULT_PAGE_SIZE))
            .await
    }

    /// Follow a pagination link. Disabled links, or links outside the range of pages, do nothing.
    pub async fn activate(&self, link: &PageLink) -> SearchOutcome {
        match link.parameters() {
            Some(parameters) => self.search_and_render(parameters).await,
            None => {
                log::debug!("Ignoring inactive link: {link} ({})", link.page);
                SearchOutcome::Ignored
            }
        }
    }

    pub async fn search_and_render(&self, parameters: &SearchParameters) -> SearchOutcome {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(result) = self.search(parameters).await else {
            return SearchOutcome::FetchFailed;
        };

        let latest = self.latest.load(Ordering::SeqCst);
        if latest != token {
            log::debug!("Discarding result of search {token}, latest is {latest}");
            return SearchOutcome::Stale;
        }

        let view = ResultsView::new(&result, parameters);
        self.surface.render_table(&view.table);
        self.surface.render_pagination(&view.pagination);

        SearchOutcome::Rendered
    }
}
