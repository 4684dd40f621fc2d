//! TLS tooling.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The default path to OpenShift's Service CA certificate.
pub const SERVICE_CA_CERT: &str = "/var/run/secrets/kubernetes.io/serviceaccount/service-ca.crt";

/// A client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::Args)]
#[command(rename_all_env = "SCREAMING_SNAKE_CASE", next_help_heading = "HTTP client")]
pub struct ClientConfig {
    /// Disable TLS certificate and hostname verification
    #[arg(id = "tls-insecure", long = "tls-insecure", env = "TLS_INSECURE")]
    #[serde(default)]
    pub tls_insecure: bool,

    /// Additional CA certificates (PEM files) to trust
    #[arg(
        id = "ca-certificates",
        long = "ca-certificates",
        env = "CA_CERTIFICATES",
        value_delimiter = ','
    )]
    #[serde(default)]
    pub ca_certificates: Vec<String>,
}

impl ClientConfig {
    pub fn certificates(&self) -> impl Iterator<Item = &str> {
        let service_ca = {
            let cert = Path::new(SERVICE_CA_CERT);
            if cert.exists() {
                log::info!("Adding Service CA certificate ({:?})", cert);
                Some(SERVICE_CA_CERT)
            } else {
                None
            }
        };

        self.ca_certificates
            .iter()
            .map(|s| s.as_str())
            .chain(service_ca)
    }
}
