pub mod config;
pub mod integration;
pub mod metrics;
pub mod submitter;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig, SupportApiConfig,
};
pub use integration::{IntegrationHooks, SupportTicketsIntegration, INTEGRATION_NAME};
pub use submitter::{
    normalize_tickets_url, SubmitError, TicketSubmission, TicketSubmitter, TransportError,
};
pub use ticket::{
    generate_fallback_ticket_id, is_fallback_ticket_id, resolve_ticket_id, CreatedTicket,
    TicketRequest, TicketResponse, TicketSource, ValidationError,
};
