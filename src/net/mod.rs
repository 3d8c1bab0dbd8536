//! Outbound handoff types and the authentication seam.
//!
//! DESIGN
//! ======
//! The sign-in screen performs no I/O of its own. Validated credentials are
//! handed to an [`auth::Authenticator`]; the only implementation today logs
//! the attempt.

pub mod auth;
pub mod types;
