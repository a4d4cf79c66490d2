use std::collections::VecDeque;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Prefixes every message with a stack of context tags, e.g. `[Acme] [3/10]`.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_new_prefixes(mut self, prefix: String) -> Self {
        self.prefixes.clear();
        self.prefixes.push_back(prefix);
        self
    }

    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefixes.push_back(prefix);
        self
    }

    fn prefixed(&self, message: &str) -> String {
        let prefix = self.prefixes.iter().map(|p| format!("{} ", p)).collect::<String>();
        format!("{}{}", prefix, message)
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", self.prefixed(message));
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}", self.prefixed(message));
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}", self.prefixed(message));
    }
}

/// Install the global subscriber once. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let default = if verbose { "debug" } else { "info" };
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        });
    }
    Logger::new()
}
