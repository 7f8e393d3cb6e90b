//! Networking for the remote content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport, bearer injection, and error normalization; `api`
//! maps content operations onto endpoints; `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
