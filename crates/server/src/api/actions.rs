//! Action handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use support_tickets_core::{CreatedTicket, TicketRequest};
use tracing::{error, warn};

use crate::metrics::ACTION_INVOCATIONS;
use crate::state::AppState;

const CREATE_SUPPORT_TICKET: &str = "createSupportTicket";

/// Error response
#[derive(Debug, Serialize)]
pub struct ActionErrorResponse {
    pub error: String,
}

fn reject(
    status: StatusCode,
    result: &str,
    message: String,
) -> (StatusCode, Json<ActionErrorResponse>) {
    ACTION_INVOCATIONS
        .with_label_values(&[CREATE_SUPPORT_TICKET, result])
        .inc();
    (status, Json(ActionErrorResponse { error: message }))
}

/// Create a support ticket.
///
/// Input is validated here, before the action runs. Malformed JSON and
/// missing fields get the same `400 {error}` body as failed validation.
/// Upstream failures are already absorbed by the action, so the only server
/// error is a misconfigured integration.
pub async fn create_support_ticket(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TicketRequest>, JsonRejection>,
) -> Result<Json<CreatedTicket>, (StatusCode, Json<ActionErrorResponse>)> {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected {} payload: {}", CREATE_SUPPORT_TICKET, rejection);
            return Err(reject(
                StatusCode::BAD_REQUEST,
                "invalid_input",
                rejection.body_text(),
            ));
        }
    };

    if let Err(e) = body.validate() {
        warn!("Rejected {} input: {}", CREATE_SUPPORT_TICKET, e);
        return Err(reject(StatusCode::BAD_REQUEST, "invalid_input", e.to_string()));
    }

    match state.integration().create_support_ticket(&body).await {
        Ok(ticket) => {
            ACTION_INVOCATIONS
                .with_label_values(&[CREATE_SUPPORT_TICKET, "ok"])
                .inc();
            Ok(Json(ticket))
        }
        Err(e) => {
            error!("{} failed: {}", CREATE_SUPPORT_TICKET, e);
            Err(reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "config_error",
                e.to_string(),
            ))
        }
    }
}
