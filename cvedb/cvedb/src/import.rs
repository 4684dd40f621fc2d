use crate::config::BackendArguments;
use anyhow::Context;
use cvedb_client::CveClient;
use cvedb_model::{BulkCreateResponse, NewCveRecord};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Args, Debug)]
pub struct Run {
    /// JSON file containing an array of records, `-` for stdin
    pub file: PathBuf,

    /// Number of records per request
    #[arg(long, default_value_t = 100, value_parser = crate::search::positive)]
    pub batch_size: usize,

    #[command(flatten)]
    pub backend: BackendArguments,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let records = read_records(&self.file).await?;
        log::info!("Importing {} records", records.len());

        let client = self.backend.client()?;

        for response in import(&client, &records, self.batch_size).await? {
            println!("{}", response.detail);
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Create the records in batches of `batch_size`, stopping at the first failed batch.
async fn import(
    client: &CveClient,
    records: &[NewCveRecord],
    batch_size: usize,
) -> anyhow::Result<Vec<BulkCreateResponse>> {
    let mut responses = Vec::new();

    for (n, batch) in records.chunks(batch_size).enumerate() {
        log::debug!("Importing batch {} ({} records)", n + 1, batch.len());
        let response = client
            .bulk_create(batch)
            .await
            .with_context(|| format!("Importing batch {}", n + 1))?;
        responses.push(response);
    }

    Ok(responses)
}

async fn read_records(file: &PathBuf) -> anyhow::Result<Vec<NewCveRecord>> {
    let data = if file.as_os_str() == "-" {
        let mut data = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut tokio::io::stdin(), &mut data).await?;
        data
    } else {
        tokio::fs::read(file)
            .await
            .with_context(|| format!("Reading {}", file.display()))?
    };

    serde_json::from_slice(&data).context("Parsing records")
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use cvedb_common::tls::ClientConfig;
    use std::io::Write;
    use std::sync::Mutex;
    use url::Url;

    type Batches = web::Data<Mutex<Vec<Vec<String>>>>;

    async fn bulk_create(batches: Batches, body: web::Json<Vec<NewCveRecord>>) -> HttpResponse {
        let ids = body.iter().map(|record| record.id.clone()).collect::<Vec<_>>();
        let failed = ids.iter().any(|id| id == "CVE-0000-0000");
        batches.lock().unwrap().push(ids);

        if failed {
            return HttpResponse::InternalServerError().finish();
        }

        HttpResponse::Ok().json(BulkCreateResponse {
            detail: format!("{} records created.", body.len()),
        })
    }

    /// Start a backend on a random port, recording the ids of each bulk request.
    fn serve(batches: Batches) -> anyhow::Result<CveClient> {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(batches.clone())
                .route("/api/v1/cve/bulk_create", web::post().to(bulk_create))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        BackendArguments {
            url: Url::parse(&format!("http://{addr}/"))?,
            client: ClientConfig::default(),
        }
        .client()
    }

    fn records(ids: &[&str]) -> Vec<NewCveRecord> {
        ids.iter().map(|id| NewCveRecord::new(*id)).collect()
    }

    #[actix_web::test]
    async fn import_in_batches() -> anyhow::Result<()> {
        let batches = Batches::new(Mutex::new(Vec::new()));
        let client = serve(batches.clone())?;

        let responses = import(&client, &records(&["CVE-1", "CVE-2", "CVE-3"]), 2).await?;

        assert_eq!(
            responses.iter().map(|r| r.detail.as_str()).collect::<Vec<_>>(),
            vec!["2 records created.", "1 records created."]
        );
        assert_eq!(
            *batches.lock().unwrap(),
            vec![vec!["CVE-1", "CVE-2"], vec!["CVE-3"]]
        );

        Ok(())
    }

    #[actix_web::test]
    async fn import_stops_at_failed_batch() -> anyhow::Result<()> {
        let batches = Batches::new(Mutex::new(Vec::new()));
        let client = serve(batches.clone())?;

        let err = import(
            &client,
            &records(&["CVE-1", "CVE-0000-0000", "CVE-3", "CVE-4"]),
            1,
        )
        .await
        .expect_err("must fail");

        assert_eq!(err.to_string(), "Importing batch 2");
        assert_eq!(batches.lock().unwrap().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn read_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("cvedb-import-{}.json", std::process::id()));
        std::fs::File::create(&path)?.write_all(
            br#"[
                {"id": "CVE-2021-0001", "state": "PUBLISHED", "date_published": "2021-01-01T00:00:00"},
                {"id": "CVE-2021-0002"}
            ]"#,
        )?;

        let records = read_records(&path).await;
        std::fs::remove_file(&path)?;
        let records = records?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state.as_deref(), Some("PUBLISHED"));
        assert!(records[0].date_published.is_some());
        assert_eq!(records[1], NewCveRecord::new("CVE-2021-0002"));

        Ok(())
    }
}
