//! HTML markup of the views, using the Bootstrap classes of the page.

use crate::{PaginationView, TableView};
use std::fmt::Write;

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

impl TableView {
    /// Markup for the content of the results `<table>`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        out.push_str("<thead><tr>");
        for column in self.header() {
            let _ = write!(out, "<th>{}</th>", escape(column));
        }
        out.push_str("</tr></thead><tbody>");

        for row in &self.rows {
            out.push_str("<tr>");
            let _ = write!(
                out,
                r#"<td><a href="{}" target="_blank">{}</a></td>"#,
                escape(&row.details),
                escape(&row.id)
            );
            for cell in [
                &row.assigner_org_id,
                &row.state,
                &row.assigner_short_name,
                &row.date_published,
            ] {
                let _ = write!(out, "<td>{}</td>", escape(cell));
            }
            out.push_str("<td><ul>");
            for description in &row.problem_types {
                let _ = write!(out, "<li>{}</li>", escape(description));
            }
            out.push_str("</ul></td></tr>");
        }

        out.push_str("</tbody>");
        out
    }
}

impl PaginationView {
    /// Markup for the content of the pagination `<ul>`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        for link in &self.links {
            let class = match (link.active, link.disabled) {
                (_, true) => "page-item disabled",
                (true, false) => "page-item active",
                (false, false) => "page-item",
            };
            let _ = write!(
                out,
                r##"<li class="{class}"><a class="page-link" href="#" data-page="{}">{}</a></li>"##,
                link.page,
                escape(&link.to_string())
            );
        }

        out
    }
}
