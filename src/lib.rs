//! userdesk - user management client for the `/api/users` REST collection.
//!
//! The core is [`ApiClient`]: every operation is a single round trip whose
//! outcome is reduced to an [`ApiResult`], so callers never deal with
//! transport errors directly. Issuing a request of a given kind supersedes any
//! request of the same kind that is still in flight.
//!
//! The `cli` module is the front end shipped with the `userdesk` binary.

pub mod cli;
pub mod config;
pub mod http;
pub mod users;

pub use config::ClientConfig;
pub use users::{ApiClient, ApiResult, User, UserPayload};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
