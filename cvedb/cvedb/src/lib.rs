mod config;
mod console;
mod import;
mod record;
mod search;

pub use config::BackendArguments;

use std::process::ExitCode;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Search CVE records
    Search(search::Run),
    /// Show a single CVE record
    Get(record::Get),
    /// Create a new CVE record
    Create(record::Create),
    /// Update an existing CVE record
    Update(record::Update),
    /// Delete a CVE record
    Delete(record::Delete),
    /// Create CVE records in bulk, from a JSON file
    Import(import::Run),
    /// Check if the backend is reachable
    Ping(Ping),
}

impl Command {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self {
            Self::Search(run) => run.run().await,
            Self::Get(run) => run.run().await,
            Self::Create(run) => run.run().await,
            Self::Update(run) => run.run().await,
            Self::Delete(run) => run.run().await,
            Self::Import(run) => run.run().await,
            Self::Ping(run) => run.run().await,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Ping {
    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Ping {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let client = self.backend.client()?;
        println!("{}", client.ping().await?);
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[derive(clap::Parser, Debug)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn parse_search() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "cvedb",
            "search",
            "CVE-2021-",
            "--start-date",
            "2021-01-01",
            "--page",
            "2",
            "--url",
            "http://cve.example.com/",
        ])?;

        match cli.command {
            Command::Search(run) => {
                assert_eq!(run.query.as_deref(), Some("CVE-2021-"));
                assert_eq!(run.start_date.as_deref(), Some("2021-01-01"));
                assert_eq!(run.end_date, None);
                assert_eq!(run.page, 2);
                assert_eq!(run.size, 10);
                assert_eq!(run.backend.url.as_str(), "http://cve.example.com/");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn parse_update() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "cvedb",
            "update",
            "CVE-2021-1234",
            "--state",
            "REJECTED",
            "--date-published",
            "2021-02-03",
        ])?;

        match cli.command {
            Command::Update(run) => {
                assert_eq!(run.id, "CVE-2021-1234");
                let update = run.to_update();
                assert_eq!(update.state.as_deref(), Some("REJECTED"));
                assert_eq!(update.date_published, chrono::NaiveDate::from_ymd_opt(2021, 2, 3));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn reject_invalid_page() {
        assert!(Cli::try_parse_from(["cvedb", "search", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["cvedb", "search", "--size", "0"]).is_err());
    }
}
