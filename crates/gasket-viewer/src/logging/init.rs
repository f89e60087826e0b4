use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once; later calls are no-ops.
///
/// Filter precedence: the explicit `filter` argument (`env_logger` syntax,
/// e.g. "info" or "gasket_viewer=debug,wgpu=warn"), then `RUST_LOG`, then
/// info level.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
