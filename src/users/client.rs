//! Client for the user endpoints. Endpoint paths live here; every operation is
//! one request attempt whose outcome is folded into an [`ApiResult`].
//!
//! Each operation kind owns a cancellation slot: starting a list refresh
//! supersedes a list refresh that is still running, but never an in-flight
//! delete.

use crate::{
    config::ClientConfig,
    http::{ApiError, CancellationSlot, server_message},
    users::types::{ApiResult, User, UserPayload},
};
use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::{fmt, future::Future};
use tracing::{Instrument, debug, info_span, warn};
use url::Url;

/// Messages surfaced through [`ApiResult::Failure`].
pub mod messages {
    pub use crate::http::errors::CANCELED_MESSAGE as CANCELED;

    pub const LOAD_FAILED: &str = "Failed to load users.";
    pub const NOT_FOUND: &str = "User not found.";
    pub const ADD_FAILED: &str = "Failed to add user.";
    pub const UPDATE_FAILED: &str = "Failed to update user.";
    pub const DELETE_FAILED: &str = "Failed to delete user.";
    pub const INVALID_LIST: &str = "Invalid response format: Expected an array.";
}

const USERS_PATH: &str = "/api/users";

/// Operation kinds, one cancellation slot each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl RequestKind {
    const fn default_message(self) -> &'static str {
        match self {
            Self::List => messages::LOAD_FAILED,
            Self::Get => messages::NOT_FOUND,
            Self::Create => messages::ADD_FAILED,
            Self::Update => messages::UPDATE_FAILED,
            Self::Delete => messages::DELETE_FAILED,
        }
    }

    // reads keep their fixed wording, writes echo the server's validation message
    const fn uses_server_message(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }

    fn method(self) -> Method {
        match self {
            Self::List | Self::Get => Method::GET,
            Self::Create => Method::POST,
            Self::Update => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct Slots {
    list: CancellationSlot,
    get: CancellationSlot,
    create: CancellationSlot,
    update: CancellationSlot,
    delete: CancellationSlot,
}

impl Slots {
    const fn slot(&self, kind: RequestKind) -> &CancellationSlot {
        match kind {
            RequestKind::List => &self.list,
            RequestKind::Get => &self.get,
            RequestKind::Create => &self.create,
            RequestKind::Update => &self.update,
            RequestKind::Delete => &self.delete,
        }
    }
}

/// REST client for the `/api/users` collection.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    users_url: Url,
    slots: Slots,
}

impl ApiClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    /// Returns an error if the base URL cannot be parsed, is not `http`/`https`,
    /// or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = Url::parse(config.api_base_url.trim())
            .with_context(|| format!("invalid API base URL: {}", config.api_base_url))?;

        match base.scheme() {
            "http" | "https" => {}
            scheme => bail!("unsupported API base URL scheme: {scheme}"),
        }

        if base.query().is_some() || base.fragment().is_some() {
            bail!(
                "API base URL must not carry a query or fragment: {}",
                config.api_base_url
            );
        }

        let mut users_url = base;
        users_url
            .path_segments_mut()
            .map_err(|()| anyhow!("API base URL cannot be a base: {}", config.api_base_url))?
            .pop_if_empty()
            .extend(USERS_PATH.split('/').filter(|segment| !segment.is_empty()));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            users_url,
            slots: Slots::default(),
        })
    }

    /// The collection endpoint, `{base}/api/users`.
    #[must_use]
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    /// Fetches every user, in server order.
    pub async fn fetch_users(&self) -> ApiResult<Vec<User>> {
        let url = self.users_url.clone();

        self.execute(RequestKind::List, &url, async {
            let response = ensure_success(self.client.get(url.clone()).send().await?).await?;
            let json: Value = serde_json::from_slice(&response.bytes().await?)?;

            if !json.is_array() {
                return Err(ApiError::InvalidFormat(messages::INVALID_LIST));
            }

            Ok::<_, ApiError>(serde_json::from_value(json)?)
        })
        .await
    }

    /// Fetches one user. A `null` body yields `Success(None)`.
    pub async fn get_user_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        let Some(url) = self.user_url(id) else {
            return ApiResult::Failure(messages::NOT_FOUND.to_string());
        };

        self.execute(RequestKind::Get, &url, async {
            let response = ensure_success(self.client.get(url.clone()).send().await?).await?;
            Ok::<_, ApiError>(serde_json::from_slice(&response.bytes().await?)?)
        })
        .await
    }

    /// Creates a user from `name` and `email`.
    pub async fn add_user(&self, name: &str, email: &str) -> ApiResult<()> {
        let url = self.users_url.clone();
        let payload = UserPayload::new(name, email);

        self.execute(RequestKind::Create, &url, async {
            ensure_success(self.client.post(url.clone()).json(&payload).send().await?).await?;
            Ok::<_, ApiError>(())
        })
        .await
    }

    /// Replaces the name and email of user `id`.
    pub async fn update_user(&self, id: &str, name: &str, email: &str) -> ApiResult<()> {
        let Some(url) = self.user_url(id) else {
            return ApiResult::Failure(messages::UPDATE_FAILED.to_string());
        };
        let payload = UserPayload::new(name, email);

        self.execute(RequestKind::Update, &url, async {
            ensure_success(self.client.put(url.clone()).json(&payload).send().await?).await?;
            Ok::<_, ApiError>(())
        })
        .await
    }

    /// Deletes user `id`.
    pub async fn delete_user(&self, id: &str) -> ApiResult<()> {
        let Some(url) = self.user_url(id) else {
            return ApiResult::Failure(messages::DELETE_FAILED.to_string());
        };

        self.execute(RequestKind::Delete, &url, async {
            ensure_success(self.client.delete(url.clone()).send().await?).await?;
            Ok::<_, ApiError>(())
        })
        .await
    }

    /// `{base}/api/users/{id}` with `id` percent-encoded as one segment.
    /// Returns `None` for a blank id.
    fn user_url(&self, id: &str) -> Option<Url> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let mut url = self.users_url.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(id);
        Some(url)
    }

    /// Runs `request` in the slot for `kind` and folds the outcome.
    async fn execute<T, F>(&self, kind: RequestKind, url: &Url, request: F) -> ApiResult<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let handle = self.slots.slot(kind).begin();

        let span = info_span!(
            "users.request",
            kind = %kind,
            http.method = %kind.method(),
            url = %url,
            generation = handle.generation()
        );

        async move {
            let outcome = handle
                .run(request)
                .await
                .unwrap_or(Err(ApiError::Canceled));

            match outcome {
                Ok(data) => ApiResult::Success(data),
                Err(err) => {
                    if matches!(err, ApiError::Canceled) {
                        debug!("superseded by a newer {kind} request");
                    } else {
                        warn!(error = %err, "{kind} request failed");
                    }

                    ApiResult::Failure(
                        err.user_message(kind.default_message(), kind.uses_server_message()),
                    )
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Passes 2xx responses through; otherwise reads the body for a server message.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ApiError::Http {
        status,
        message: server_message(&body),
    })
}
