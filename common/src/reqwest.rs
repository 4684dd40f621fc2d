//! Building `reqwest` clients from a [`ClientConfig`].

use crate::tls::ClientConfig;
use anyhow::Context;
use std::path::Path;

impl ClientConfig {
    /// Create a new client builder, applying the TLS configuration.
    pub fn build_client_builder(&self) -> anyhow::Result<reqwest::ClientBuilder> {
        let mut client = reqwest::ClientBuilder::new();

        if self.tls_insecure {
            log::warn!("Disabling TLS verification for client. Do not use this in production!");
            client = client
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        for cert in self.certificates() {
            for cert in load_certificates(cert)? {
                client = client.add_root_certificate(cert);
            }
        }

        Ok(client)
    }

    pub fn build_client(&self) -> anyhow::Result<reqwest::Client> {
        self.build_client_builder()?.build().context("Create HTTP client")
    }
}

/// Load all certificates of a PEM bundle.
fn load_certificates(path: impl AsRef<Path>) -> anyhow::Result<Vec<reqwest::Certificate>> {
    let path = path.as_ref();
    let data = std::fs::read(path).with_context(|| format!("Reading certificate: {}", path.display()))?;

    let pems = pem::parse_many(data).with_context(|| format!("Parsing certificate: {}", path.display()))?;
    log::debug!("Loaded {} certificate(s) from {}", pems.len(), path.display());

    pems.into_iter()
        .map(|pem| Ok(reqwest::Certificate::from_pem(pem::encode(&pem).as_bytes())?))
        .collect()
}
