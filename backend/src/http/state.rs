//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::clock::{Clock, SystemClock};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the current instant for requests without a date
    pub clock: Arc<dyn Clock>,
    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state with the given clock and configuration.
    pub fn new(clock: Arc<dyn Clock>, config: AppConfig) -> Self {
        Self {
            clock,
            config: Arc::new(config),
        }
    }

    /// State backed by the system clock.
    pub fn with_system_clock(config: AppConfig) -> Self {
        Self::new(Arc::new(SystemClock), config)
    }
}
