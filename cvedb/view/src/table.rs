use cvedb_model::CveRecord;

pub const HEADER: [&str; 6] = [
    "ID",
    "Assigner Org ID",
    "State",
    "Assigner Short Name",
    "Date Published",
    "Problem Types",
];

/// The results table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RowView>,
}

/// A single record, prepared for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    /// Link to the details page
    pub details: String,
    pub assigner_org_id: String,
    pub state: String,
    pub assigner_short_name: String,
    /// Publishing date, as `YYYY-MM-DD`
    pub date_published: String,
    /// Problem type descriptions, in order
    pub problem_types: Vec<String>,
}

impl TableView {
    pub fn new(records: &[CveRecord]) -> Self {
        Self {
            rows: records.iter().map(RowView::from).collect(),
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        &HEADER
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&CveRecord> for RowView {
    fn from(record: &CveRecord) -> Self {
        Self {
            id: record.id.clone(),
            details: format!("/details/{}", urlencoding::encode(&record.id)),
            assigner_org_id: record.assigner_org_id.clone().unwrap_or_default(),
            state: record.state.clone().unwrap_or_default(),
            assigner_short_name: record.assigner_short_name.clone().unwrap_or_default(),
            date_published: record
                .date_published
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            problem_types: record
                .problem_types
                .iter()
                .map(|pt| pt.description.clone().unwrap_or_default())
                .collect(),
        }
    }
}

impl RowView {
    /// The cells of the row, in the order of the [`HEADER`], problem types joined.
    pub fn cells(&self) -> [String; 6] {
        [
            self.id.clone(),
            self.assigner_org_id.clone(),
            self.state.clone(),
            self.assigner_short_name.clone(),
            self.date_published.clone(),
            self.problem_types.join(", "),
        ]
    }
}
