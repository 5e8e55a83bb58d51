// Logging setup for the bootstrap binary.
//
// - RUST_LOG takes precedence. Without it, everything runs at info,
//   including the module's log lines (target `module`).

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DIRECTIVES: &str = "info";

pub fn init() {
    fmt().with_env_filter(filter()).with_target(true).init();
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
