use crate::config::BackendArguments;
use crate::console::{HtmlSurface, Navigation, TerminalSurface};
use cvedb_api::search::DEFAULT_PAGE_SIZE;
use cvedb_view::surface::Filters;
use cvedb_view::{CveBackend, QueryController, SearchOutcome};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Output {
    /// Plain text table
    Table,
    /// HTML document
    Html,
}

pub(crate) fn positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".into()),
        Ok(value) => Ok(value),
        Err(err) => Err(err.to_string()),
    }
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Filter by (partial) CVE id
    pub query: Option<String>,

    /// Only records published on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Only records published on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    #[arg(long, default_value_t = 1, value_parser = positive)]
    pub page: usize,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = positive)]
    pub size: usize,

    #[arg(short, long, value_enum, default_value_t = Output::Table)]
    pub output: Output,

    /// Navigate through the pages after the first result
    #[arg(short, long, conflicts_with = "output")]
    pub interactive: bool,

    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let client = self.backend.client()?;

        let filters = Filters {
            query: self.query.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
        };
        let parameters = filters.to_parameters(self.page, self.size);

        match self.output {
            Output::Html => {
                let controller = QueryController::new(&client, HtmlSurface::default());
                if controller.search_and_render(&parameters).await != SearchOutcome::Rendered {
                    return Ok(ExitCode::FAILURE);
                }
                print!("{}", controller.surface().document());
            }
            Output::Table => {
                let controller = QueryController::new(&client, TerminalSurface::default());
                if controller.search_and_render(&parameters).await != SearchOutcome::Rendered {
                    return Ok(ExitCode::FAILURE);
                }
                if self.interactive {
                    navigate(&controller).await?;
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Follow pagination links, as entered on the console.
async fn navigate<B>(controller: &QueryController<B, TerminalSurface>) -> anyhow::Result<()>
where
    B: CveBackend,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("[p]revious, [n]ext, page number, [q]uit: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let navigation = match Navigation::parse(&line) {
            Some(Navigation::Quit) => break,
            Some(navigation) => navigation,
            None => {
                println!("Unknown command: {}", line.trim());
                continue;
            }
        };

        let Some(pagination) = controller.surface().pagination() else {
            break;
        };

        let outcome = match navigation.link(&pagination) {
            Some(link) => controller.activate(link).await,
            None => SearchOutcome::Ignored,
        };

        match outcome {
            SearchOutcome::Rendered | SearchOutcome::Stale => {}
            SearchOutcome::Ignored => println!("No such page"),
            SearchOutcome::FetchFailed => println!("Failed to fetch page, keeping the current one"),
        }
    }

    Ok(())
}
