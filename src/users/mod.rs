//! The users feature: wire types and the [`ApiClient`] for `/api/users`.

pub mod client;
pub mod types;

pub use self::client::{ApiClient, RequestKind, messages};
pub use self::types::{ApiResult, User, UserPayload};
