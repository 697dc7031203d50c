use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::application::ports::log_verbosity::LogVerbosity;

const CRATE_TARGETS: [&str; 3] = ["nanopost_relay", "nanopost_sdk", "tower_http"];

/// Filter for the given mode. `RUST_LOG`, when set, stays the base and the
/// crate targets are raised to debug on top of it.
pub fn build_filter(debug: bool) -> EnvFilter {
    let base = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_string());
    EnvFilter::new(filter_directives(&base, debug))
}

fn filter_directives(base: &str, debug: bool) -> String {
    if !debug {
        return base.to_string();
    }
    let mut directives = vec![base.to_string()];
    directives.extend(CRATE_TARGETS.iter().map(|t| format!("{t}=debug")));
    directives.join(",")
}

/// Swaps the global filter through a `reload` handle.
pub struct ReloadableVerbosity {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl ReloadableVerbosity {
    pub fn new(handle: reload::Handle<EnvFilter, Registry>) -> Self {
        Self { handle }
    }
}

impl LogVerbosity for ReloadableVerbosity {
    fn set_debug(&self, enabled: bool) {
        if let Err(e) = self.handle.reload(build_filter(enabled)) {
            tracing::warn!(error = %e, "Failed to reload log filter");
        }
    }
}
