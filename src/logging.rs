use env_logger::Env;

// RUST_LOG overrides default_filter
pub fn init(default_filter: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}
