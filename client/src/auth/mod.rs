//! Session guard: bearer-token persistence and the login/register flows
//! that create it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in two places. Local storage feeds the `Authorization`
//! header on outgoing API calls; the `portfolio_auth_token` cookie lets the
//! server-side edge gate decide redirects from request headers alone. Both
//! copies are written side by side on a best-effort basis and are never
//! reconciled.

pub mod flow;
pub mod guard;
pub mod token_store;

pub use token_store::{clear_token, get_token, has_session, set_token};
