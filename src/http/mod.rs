//! HTTP plumbing shared by the feature clients: URL joining, error body
//! decoding and request cancellation. Nothing in here knows about users.

pub mod cancel;
pub mod errors;

pub use self::cancel::{CancellationSlot, RequestHandle};
pub use self::errors::ApiError;

use serde_json::Value;

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts a server-supplied `message` field from an error body.
///
/// Returns `None` when the body is not JSON, is not an object, or carries no
/// usable message; callers fall back to their own default.
pub fn server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let message = json.get("message").and_then(Value::as_str)?.trim();

    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
