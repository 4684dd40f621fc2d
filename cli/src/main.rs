use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{ExitCode, Termination};

use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "CVE database client",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: cvedb::Command,
}

impl Cli {
    async fn run(self) -> ExitCode {
        match self.command.run().await {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        eprintln!("Caused by:");
                    }
                    eprintln!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }
}

#[tokio::main]
async fn main() -> impl Termination {
    load_xdg_config();
    cvedb_infrastructure::init_logging("info");
    Cli::parse().run().await
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        Some(Path::new(&xdg_config_home).join("cvedb"))
    } else if let Ok(home) = std::env::var("HOME") {
        Some(Path::new(&home).join(".config").join("cvedb"))
    } else {
        None
    }
}

/// Each file in the configuration directory sets the environment variable named after it,
/// unless that variable is already set.
fn load_xdg_config() {
    let Some(config_dir) = config_dir() else {
        return;
    };

    if !config_dir.is_dir() {
        return;
    }

    let Ok(dir) = config_dir.read_dir() else {
        eprintln!("Warning: unable to read configuration directory: {:?}", config_dir);
        return;
    };

    for entry in dir.flatten() {
        let Ok(var_name) = entry.file_name().into_string() else {
            continue;
        };
        if std::env::var_os(&var_name).is_some() {
            continue;
        }
        if let Ok(mut file) = File::open(entry.path()) {
            let mut var_value = String::new();
            if file.read_to_string(&mut var_value).is_ok() {
                std::env::set_var(var_name, var_value.trim());
            }
        }
    }
}
