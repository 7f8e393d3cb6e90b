//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod blogs;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod projects;
pub mod register;
