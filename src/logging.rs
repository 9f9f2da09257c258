//! Logging: env-filtered subscriber on stderr
//!
//! `RUST_LOG` controls the filter (default `info`). Set
//! `GUIDEPOST_LOG_JSON=1` for JSON lines instead of pretty output.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // try_init so a host app that already installed a subscriber wins.
    if json_requested() {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.pretty().try_init();
    }
}

fn json_requested() -> bool {
    std::env::var("GUIDEPOST_LOG_JSON").map(|v| v == "1").unwrap_or(false)
}
