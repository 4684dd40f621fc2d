/// Initialize logging, using `RUST_LOG` and falling back to the provided default filter.
pub fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);

    if let Err(e) = env_logger::Builder::from_env(env).format_timestamp_millis().try_init() {
        eprintln!("Error initializing logging: {:?}", e);
    }

    log::debug!("Logging initialized");
}
