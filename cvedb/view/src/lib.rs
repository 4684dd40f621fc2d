//! Rendering and interaction logic of the CVE records page.
//!
//! The page itself (DOM, dialogs, forms) is abstracted through the traits in [`surface`], the
//! backend through [`CveBackend`]. Everything in between is plain data and can be tested without a
//! browser.

mod backend;
mod controller;
mod markup;
mod mutator;
mod pagination;
mod table;

#[cfg(test)]
mod mock;

pub mod surface;

pub use backend::*;
pub use controller::*;
pub use mutator::*;
pub use pagination::*;
pub use table::*;

use cvedb_api::search::{SearchParameters, SearchResult};
use cvedb_model::CveRecord;
use surface::Surface;

/// Everything a search result renders into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub table: TableView,
    pub pagination: PaginationView,
}

impl ResultsView {
    /// Build the view of a search result. The parameters are the ones the search was issued with,
    /// pagination links re-use them.
    pub fn new(result: &SearchResult<CveRecord>, parameters: &SearchParameters) -> Self {
        Self::from_parts(
            &result.items,
            result.total,
            result.page,
            result.size,
            result.pages,
            parameters,
        )
    }

    pub fn from_parts(
        records: &[CveRecord],
        total: usize,
        page: usize,
        size: usize,
        pages: usize,
        parameters: &SearchParameters,
    ) -> Self {
        Self {
            table: TableView::new(records),
            pagination: PaginationView::new(total, page, size, pages, parameters),
        }
    }
}

/// Render records into the surface.
pub fn render<S>(
    surface: &S,
    records: &[CveRecord],
    total: usize,
    page: usize,
    size: usize,
    pages: usize,
    parameters: &SearchParameters,
) where
    S: Surface + ?Sized,
{
    let view = ResultsView::from_parts(records, total, page, size, pages, parameters);
    surface.render_table(&view.table);
    surface.render_pagination(&view.pagination);
}
