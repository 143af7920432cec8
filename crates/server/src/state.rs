use std::sync::Arc;
use support_tickets_core::{Config, SanitizedConfig, SupportTicketsIntegration};

/// Shared application state
pub struct AppState {
    config: Config,
    integration: Arc<SupportTicketsIntegration>,
}

impl AppState {
    pub fn new(config: Config, integration: Arc<SupportTicketsIntegration>) -> Self {
        Self {
            config,
            integration,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn integration(&self) -> &SupportTicketsIntegration {
        self.integration.as_ref()
    }
}
