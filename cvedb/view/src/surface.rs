//! The parts of the page the view logic interacts with.

use crate::{PaginationView, TableView};
use cvedb_api::search::SearchParameters;

/// The search form, with its free text and date range fields.
pub trait SearchForm {
    fn query(&self) -> String;
    fn start_date(&self) -> String;
    fn end_date(&self) -> String;
}

/// Where results get rendered to.
pub trait Surface {
    fn render_table(&self, table: &TableView);
    fn render_pagination(&self, pagination: &PaginationView);
}

/// User interaction outside of the results.
pub trait Prompt {
    /// Show a blocking message.
    fn alert(&self, message: &str);
    /// Ask the user to confirm an action.
    fn confirm(&self, message: &str) -> bool;
    /// Navigate away from the current page.
    fn navigate(&self, location: &str);
}

impl<T: SearchForm + ?Sized> SearchForm for &T {
    fn query(&self) -> String {
        (**self).query()
    }

    fn start_date(&self) -> String {
        (**self).start_date()
    }

    fn end_date(&self) -> String {
        (**self).end_date()
    }
}

impl<T: Surface + ?Sized> Surface for &T {
    fn render_table(&self, table: &TableView) {
        (**self).render_table(table)
    }

    fn render_pagination(&self, pagination: &PaginationView) {
        (**self).render_pagination(pagination)
    }
}

impl<T: Prompt + ?Sized> Prompt for &T {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn navigate(&self, location: &str) {
        (**self).navigate(location)
    }
}

/// The state of the search form at the time a search was submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub query: String,
    pub start_date: String,
    pub end_date: String,
}

impl Filters {
    /// Read the form, once.
    pub fn capture<F: SearchForm + ?Sized>(form: &F) -> Self {
        Self {
            query: form.query(),
            start_date: form.start_date(),
            end_date: form.end_date(),
        }
    }

    /// Search parameters for a page of results. Empty fields are sent as they are, like
    /// submitting the form does.
    pub fn to_parameters(&self, page: usize, size: usize) -> SearchParameters {
        SearchParameters {
            pk: Some(self.query.clone()),
            start_date: Some(self.start_date.clone()),
            end_date: Some(self.end_date.clone()),
            ..Default::default()
        }
        .with_page(page)
        .with_size(size)
    }
}

impl SearchForm for Filters {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn start_date(&self) -> String {
        self.start_date.clone()
    }

    fn end_date(&self) -> String {
        self.end_date.clone()
    }
}
