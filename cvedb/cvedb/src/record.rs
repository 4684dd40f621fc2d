use crate::config::BackendArguments;
use crate::console::{format_table, ConsolePrompt};
use chrono::{DateTime, NaiveDate, Utc};
use cvedb_model::{CveRecordUpdate, NewCveRecord};
use cvedb_view::{RecordMutator, TableView};
use std::process::ExitCode;

fn timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    cvedb_model::datetime::parse(value).map_err(|err| err.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordOutput {
    Json,
    Table,
}

#[derive(clap::Args, Debug)]
pub struct Get {
    /// The CVE id
    pub id: String,

    #[arg(short, long, value_enum, default_value_t = RecordOutput::Json)]
    pub output: RecordOutput,

    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Get {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let client = self.backend.client()?;
        let mutator = RecordMutator::new(&client, ConsolePrompt { assume_yes: true });

        let Some(record) = mutator.fetch(&self.id).await else {
            return Ok(ExitCode::FAILURE);
        };

        match self.output {
            RecordOutput::Json => println!("{}", serde_json::to_string_pretty(&record)?),
            RecordOutput::Table => {
                println!("{}", format_table(&TableView::new(std::slice::from_ref(&record))));
                if !record.references.is_empty() {
                    println!();
                    println!("References:");
                    for reference in &record.references {
                        let url = reference.url.as_deref().unwrap_or_default();
                        let tags = reference.tags().collect::<Vec<_>>();
                        if tags.is_empty() {
                            println!("  {url}");
                        } else {
                            println!("  {url} ({})", tags.join(", "));
                        }
                    }
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[derive(clap::Args, Debug)]
pub struct Create {
    /// The CVE id
    pub id: String,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub assigner_org_id: Option<String>,

    #[arg(long)]
    pub assigner_short_name: Option<String>,

    #[arg(long, value_parser = timestamp)]
    pub date_reserved: Option<DateTime<Utc>>,

    #[arg(long, value_parser = timestamp)]
    pub date_published: Option<DateTime<Utc>>,

    #[arg(long, value_parser = timestamp)]
    pub date_updated: Option<DateTime<Utc>>,

    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Create {
    pub fn to_record(&self) -> NewCveRecord {
        NewCveRecord {
            id: self.id.clone(),
            assigner_org_id: self.assigner_org_id.clone(),
            state: self.state.clone(),
            assigner_short_name: self.assigner_short_name.clone(),
            date_reserved: self.date_reserved,
            date_published: self.date_published,
            date_updated: self.date_updated,
        }
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let client = self.backend.client()?;
        let mutator = RecordMutator::new(&client, ConsolePrompt { assume_yes: true });

        match mutator.create_from_form(&self.to_record()).await {
            Some(record) => {
                log::debug!("Created: {record:?}");
                Ok(ExitCode::SUCCESS)
            }
            None => Ok(ExitCode::FAILURE),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Update {
    /// The CVE id
    pub id: String,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub assigner_org_id: Option<String>,

    #[arg(long)]
    pub assigner_short_name: Option<String>,

    /// Publishing date (YYYY-MM-DD)
    #[arg(long)]
    pub date_published: Option<NaiveDate>,

    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Update {
    pub fn to_update(&self) -> CveRecordUpdate {
        CveRecordUpdate {
            assigner_org_id: self.assigner_org_id.clone(),
            state: self.state.clone(),
            assigner_short_name: self.assigner_short_name.clone(),
            date_published: self.date_published,
        }
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let update = self.to_update();
        if update.is_empty() {
            anyhow::bail!("Nothing to update, provide at least one field");
        }

        let client = self.backend.client()?;
        let mutator = RecordMutator::new(&client, ConsolePrompt { assume_yes: true });

        match mutator.save_from_form(&self.id, &update).await {
            Some(_) => Ok(ExitCode::SUCCESS),
            None => Ok(ExitCode::FAILURE),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Delete {
    /// The CVE id
    pub id: String,

    /// Don't ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Delete {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let client = self.backend.client()?;
        let mutator = RecordMutator::new(&client, ConsolePrompt { assume_yes: self.yes });

        match mutator.delete_from_form(&self.id).await {
            true => Ok(ExitCode::SUCCESS),
            false => Ok(ExitCode::FAILURE),
        }
    }
}
