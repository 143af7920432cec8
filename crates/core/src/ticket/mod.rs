//! Ticket domain types: the inbound request, the upstream response shapes
//! and the locally generated fallback identifier.

mod fallback;
mod response;
mod types;

pub use fallback::*;
pub use response::*;
pub use types::*;
