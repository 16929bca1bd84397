//! Admin instruction handlers.

mod accept_admin;
mod propose_admin;

pub use accept_admin::process_accept_admin;
pub use propose_admin::process_propose_admin;
