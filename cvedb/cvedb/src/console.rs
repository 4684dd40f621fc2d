use cvedb_view::surface::{Prompt, Surface};
use cvedb_view::{LinkKind, PaginationView, TableView};
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Format the table as aligned plain text columns.
pub fn format_table(table: &TableView) -> String {
    let header = table.header();
    let rows = table.rows.iter().map(|row| row.cells()).collect::<Vec<_>>();

    let mut widths = header.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(header, &widths));
    out.push(line(&separator, &widths));
    for row in &rows {
        out.push(line(&row[..], &widths));
    }

    out.join("\n")
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Format the pagination controls, marking the current page and disabled links.
pub fn format_pagination(pagination: &PaginationView) -> String {
    let links = pagination
        .links
        .iter()
        .map(|link| match (link.disabled, link.active) {
            (true, _) => format!("({link})"),
            (false, true) => format!("[{link}]"),
            (false, false) => link.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{links}  -  page {} of {}, {} records",
        pagination.page, pagination.pages, pagination.total
    )
}

/// Renders to the terminal, keeping the last pagination controls for navigation.
#[derive(Default)]
pub struct TerminalSurface {
    pagination: RefCell<Option<PaginationView>>,
}

impl TerminalSurface {
    pub fn pagination(&self) -> Option<PaginationView> {
        self.pagination.borrow().clone()
    }
}

impl Surface for TerminalSurface {
    fn render_table(&self, table: &TableView) {
        println!("{}", format_table(table));
    }

    fn render_pagination(&self, pagination: &PaginationView) {
        println!();
        println!("{}", format_pagination(pagination));
        self.pagination.replace(Some(pagination.clone()));
    }
}

/// Collects the markup, to be written out as a single document.
#[derive(Default)]
pub struct HtmlSurface {
    table: RefCell<String>,
    pagination: RefCell<String>,
}

impl HtmlSurface {
    pub fn document(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>CVE Records</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet"/>
</head>
<body>
  <div class="container">
    <table class="table table-striped" id="resultsTable">{}</table>
    <nav><ul class="pagination" id="paginationControls">{}</ul></nav>
  </div>
</body>
</html>
"#,
            self.table.borrow(),
            self.pagination.borrow()
        )
    }
}

impl Surface for HtmlSurface {
    fn render_table(&self, table: &TableView) {
        self.table.replace(table.to_html());
    }

    fn render_pagination(&self, pagination: &PaginationView) {
        self.pagination.replace(pagination.to_html());
    }
}

/// Prompts on the console.
pub struct ConsolePrompt {
    /// Assume "yes" for all confirmations.
    pub assume_yes: bool,
}

impl Prompt for ConsolePrompt {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        ask(message, std::io::stdin().lock(), std::io::stdout())
    }

    fn navigate(&self, location: &str) {
        log::debug!("Navigating to: {location}");
    }
}

/// Ask a yes/no question on `output`, reading the answer from `input`. Anything but "y" or "yes"
/// is a no.
fn ask(message: &str, mut input: impl BufRead, mut output: impl Write) -> bool {
    if let Err(err) = write!(output, "{message} [y/N] ").and_then(|()| output.flush()) {
        log::warn!("Failed to show prompt: {err}");
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(err) => {
            log::warn!("Failed to read answer: {err}");
            false
        }
    }
}

/// A navigation command entered in interactive mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Page(usize),
    Quit,
}

impl Navigation {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "p" | "prev" | "previous" => Some(Self::Previous),
            "n" | "next" => Some(Self::Next),
            "q" | "quit" => Some(Self::Quit),
            other => other.parse().ok().map(Self::Page),
        }
    }

    /// Find the link this navigation refers to.
    pub fn link<'a>(&self, pagination: &'a PaginationView) -> Option<&'a cvedb_view::PageLink> {
        match self {
            Self::Previous => pagination.previous(),
            Self::Next => pagination.next(),
            Self::Page(page) => pagination
                .links
                .iter()
                .find(|link| link.kind == LinkKind::Page && link.page == *page),
            Self::Quit => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cvedb_api::search::SearchParameters;
    use cvedb_model::{CveRecord, ProblemType};

    fn record(id: &str) -> CveRecord {
        CveRecord {
            id: id.into(),
            assigner_org_id: None,
            state: Some("PUBLISHED".into()),
            assigner_short_name: Some("mitre".into()),
            date_reserved: None,
            date_published: None,
            date_updated: None,
            problem_types: vec![ProblemType {
                id: None,
                description: Some("CWE-79".into()),
            }],
            references: vec![],
        }
    }

    #[test]
    fn table() {
        let text = format_table(&TableView::new(&[record("CVE-2021-0001")]));
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID             Assigner Org ID"));
        assert!(lines[1].starts_with("-------------  ---------------"));
        assert!(lines[2].starts_with("CVE-2021-0001"));
        assert!(lines[2].ends_with("CWE-79"));
    }

    #[test]
    fn pagination() {
        let pagination = PaginationView::new(30, 1, 10, 3, &SearchParameters::default());

        assert_eq!(
            format_pagination(&pagination),
            "(Previous) [1] 2 Next  -  page 1 of 3, 30 records"
        );
    }

    #[test]
    fn html_document() {
        let surface = HtmlSurface::default();
        cvedb_view::render(&surface, &[record("CVE-2021-0001")], 1, 1, 10, 1, &SearchParameters::default());

        let document = surface.document();
        assert!(document.contains(r#"<a href="/details/CVE-2021-0001" target="_blank">CVE-2021-0001</a>"#));
        assert!(document.contains(r#"<li class="page-item active">"#));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn confirmation() {
        let mut output = Vec::new();
        assert!(ask("Delete?", &b"Yes\n"[..], &mut output));
        assert_eq!(String::from_utf8_lossy(&output), "Delete? [y/N] ");

        assert!(!ask("Delete?", &b"n\n"[..], Vec::new()));
        assert!(!ask("Delete?", &b""[..], Vec::new()));
    }

    #[test]
    fn confirmation_without_terminal() {
        // the answer still counts, even if the prompt can't be shown
        assert!(ask("Delete?", &b"y\n"[..], Broken));
        assert!(!ask("Delete?", &b"\n"[..], Broken));
    }

    #[test]
    fn navigation() {
        let pagination = PaginationView::new(50, 3, 10, 5, &SearchParameters::default());

        assert_eq!(Navigation::parse(" n "), Some(Navigation::Next));
        assert_eq!(Navigation::parse("Q"), Some(Navigation::Quit));
        assert_eq!(Navigation::parse("4"), Some(Navigation::Page(4)));
        assert_eq!(Navigation::parse("later"), None);

        assert_eq!(Navigation::Previous.link(&pagination).map(|l| l.page), Some(2));
        assert_eq!(Navigation::Page(4).link(&pagination).map(|l| l.page), Some(4));
        // only pages of the window can be reached
        assert!(Navigation::Page(1).link(&pagination).is_none());
    }
}
