use cvedb_api::search::SearchParameters;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// The numbered pages shown around the current page.
pub fn window(page: usize, pages: usize) -> RangeInclusive<usize> {
    page.saturating_sub(1).max(1)..=pages.min(page.saturating_add(1))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Previous,
    Page,
    Next,
}

/// A link of the pagination controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub kind: LinkKind,
    /// The page this link points to, may be outside the valid range for disabled links.
    pub page: usize,
    pub active: bool,
    pub disabled: bool,
    parameters: Option<SearchParameters>,
}

impl PageLink {
    /// The search this link triggers. `None` for links which must not trigger a search.
    pub fn parameters(&self) -> Option<&SearchParameters> {
        self.parameters.as_ref()
    }
}

impl Display for PageLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LinkKind::Previous => f.write_str("Previous"),
            LinkKind::Next => f.write_str("Next"),
            LinkKind::Page => write!(f, "{}", self.page),
        }
    }
}

/// Pagination controls: "Previous", a window of pages, "Next".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub pages: usize,
    pub links: Vec<PageLink>,
}

impl PaginationView {
    /// Create the controls for the current page. Links carry the parameters of the search which
    /// produced the page, replacing only the page number.
    pub fn new(total: usize, page: usize, size: usize, pages: usize, parameters: &SearchParameters) -> Self {
        let link = |kind, target: usize, active, disabled| {
            let parameters = match disabled || target < 1 || target > pages {
                true => None,
                false => Some(parameters.clone().with_page(target)),
            };
            PageLink {
                kind,
                page: target,
                active,
                disabled,
                parameters,
            }
        };

        let mut links = Vec::with_capacity(5);

        links.push(link(LinkKind::Previous, page.saturating_sub(1), false, page <= 1));
        for n in window(page, pages) {
            links.push(link(LinkKind::Page, n, n == page, false));
        }
        links.push(link(LinkKind::Next, page.saturating_add(1), false, page >= pages));

        Self {
            total,
            page,
            size,
            pages,
            links,
        }
    }

    pub fn previous(&self) -> Option<&PageLink> {
        self.links.first()
    }

    pub fn next(&self) -> Option<&PageLink> {
        self.links.last()
    }

    /// The numbered links.
    pub fn numbered(&self) -> impl Iterator<Item = &PageLink> {
        self.links.iter().filter(|link| link.kind == LinkKind::Page)
    }
}
