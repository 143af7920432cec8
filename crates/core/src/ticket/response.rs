use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ticket payload nested under `data`.
///
/// Both fields may be omitted, but an explicit `null` does not match.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NestedTicketData {
    #[serde(rename = "ticketId", default, deserialize_with = "present_string")]
    pub ticket_id: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub id: Option<String>,
}

// Only reached when the key is present, so `null` is a type error here.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// Response shapes accepted from the support API.
///
/// Variants are tried in declaration order, which is also the precedence
/// for picking the identifier: `ticketId`, then `id`, then `data`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TicketResponse {
    /// `{"ticketId": "..."}`
    TicketId {
        #[serde(rename = "ticketId")]
        ticket_id: String,
    },
    /// `{"id": "..."}`
    Id { id: String },
    /// `{"data": {"ticketId"?: "...", "id"?: "..."}}`
    Nested { data: NestedTicketData },
}

impl TicketResponse {
    /// Match a parsed JSON value against the accepted shapes.
    ///
    /// Only JSON objects are considered; anything else is unrecognized.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    /// The identifier carried by this response, if any. Empty strings count as absent.
    pub fn ticket_id(&self) -> Option<&str> {
        let id = match self {
            TicketResponse::TicketId { ticket_id } => Some(ticket_id.as_str()),
            TicketResponse::Id { id } => Some(id.as_str()),
            TicketResponse::Nested { data } => {
                data.ticket_id.as_deref().or(data.id.as_deref())
            }
        };
        id.filter(|id| !id.is_empty())
    }
}

/// Extract a ticket id from a raw response body.
///
/// An empty body is read as `{}`. Returns `Ok(None)` when the body is valid
/// JSON but matches no known shape, or the matching shape has no identifier.
pub fn resolve_ticket_id(body: &str) -> Result<Option<String>, serde_json::Error> {
    let value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str::<Value>(body)?
    };

    Ok(TicketResponse::from_value(value)
        .as_ref()
        .and_then(TicketResponse::ticket_id)
        .map(str::to_string))
}
