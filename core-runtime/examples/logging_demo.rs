//! Logging system demonstration
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run -p core-runtime --example logging_demo
//!
//! # JSON format
//! cargo run -p core-runtime --example logging_demo -- json
//!
//! # With custom filter
//! cargo run -p core-runtime --example logging_demo -- pretty "core_runtime=trace"
//! ```

use std::env;
use std::sync::Arc;

use bridge_traits::{ConsoleLogger, LogLevel};
use core_runtime::logging::{init_logging, redact_if_sensitive, LogFormat, LoggingConfig};
use tracing::{debug, info, instrument, warn};

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::default(),
    };

    let mut config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Trace)
        .with_logger_sink(Arc::new(ConsoleLogger {
            min_level: LogLevel::Warn,
        }));
    if let Some(filter) = args.get(2) {
        config = config.with_filter(filter.clone());
    }

    if let Err(err) = init_logging(config) {
        eprintln!("{err}");
        return;
    }

    info!(version = "7.10", "Mini app launched");
    read_launch_params("query_id=AAHdF6IQ&hash=89d6079a");
    post_event("web_app_trigger_haptic_feedback");
    warn!(method = "web_app_open_popup", "Method not supported by platform");
}

#[instrument(skip(raw))]
fn read_launch_params(raw: &str) {
    info!(init_data = %redact_if_sensitive("init_data", raw), "Launch params read");
}

#[instrument]
fn post_event(method: &str) {
    debug!("Posting event to host");
}
