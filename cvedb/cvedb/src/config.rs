use cvedb_client::CveClient;
use cvedb_common::tls::ClientConfig;
use cvedb_infrastructure::endpoint::{self, Endpoint};
use url::Url;

/// Connection to the CVE record backend.
#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Backend")]
pub struct BackendArguments {
    /// Base URL of the backend
    #[arg(
        env = "CVEDB_URL",
        long = "url",
        default_value_t = endpoint::Cvedb::url()
    )]
    pub url: Url,

    #[command(flatten)]
    pub client: ClientConfig,
}

impl BackendArguments {
    pub fn client(&self) -> anyhow::Result<CveClient> {
        log::debug!("Using backend: {}", self.url);
        Ok(CveClient::new(self.client.build_client()?, self.url.clone()))
    }
}
