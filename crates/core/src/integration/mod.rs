mod support_tickets;
mod traits;

pub use support_tickets::*;
pub use traits::*;
