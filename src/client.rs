// ABOUTME: Activity API client: repository trait and its reqwest implementation
// ABOUTME: Attaches session bearer token and X-User-Id, maps HTTP failures to ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::constants::{headers, routes};
use crate::errors::{ApiError, ApiResult};
use crate::models::{ActivityDetail, ActivityDraft, ActivityRecord, ActivitySubmission};
use crate::session::SessionManager;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Boundary interface to the external activity-data API.
///
/// Implementations are read-only consumers of the session credential; every
/// request carries the bearer token and user id when a credential is present,
/// and is sent unauthenticated otherwise (the server is expected to reject
/// those). Errors are surfaced to the caller and never retried automatically.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Fetch the current user's activities, server-ordered.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when the server rejects the request (4xx);
    /// [`ApiError::Network`] on transport or server (5xx) failure.
    async fn fetch_activities(&self) -> ApiResult<Vec<ActivityRecord>>;

    /// Create an activity record from a caller-validated draft.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when the submission cannot be formed from the
    /// current session or the server rejects it (4xx); [`ApiError::Network`]
    /// on transport or server failure.
    async fn submit_activity(&self, draft: &ActivityDraft) -> ApiResult<ActivityRecord>;

    /// Fetch one record plus its derived recommendation fields.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] for a nonexistent id; [`ApiError::Network`] on
    /// transport or server failure.
    async fn fetch_activity_detail(&self, id: &str) -> ApiResult<ActivityDetail>;
}

/// Reqwest-backed [`ActivityRepository`] against the configured API base path.
///
/// Holds no per-request state beyond the shared HTTP client; the credential is
/// read fresh from the session manager on every call, so a token refresh
/// between requests is picked up automatically.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Build a client for `config`, reading credentials through `session`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when the configured base URL is not a valid
    /// absolute URL; [`ApiError::Network`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig, session: Arc<SessionManager>) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_base).map_err(|err| ApiError::Validation {
            status: 400,
            message: format!("invalid API base URL `{}`: {err}", config.api_base),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Validation {
                status: 400,
                message: format!("API base URL `{}` cannot carry a path", config.api_base),
            });
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Resolve `path` against the base URL, keeping the base's own path
    /// segments (`/api`) and percent-encoding the appended ones.
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        url
    }

    /// Start a request with the current session credential attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let credential = self.session.current();
        let mut builder = self.http.request(method, self.endpoint(path));
        if let Some(token) = credential.token.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(user_id) = credential.user_id.as_deref() {
            builder = builder.header(headers::USER_ID, user_id);
        }
        builder
    }

    /// Turn a draft into the wire submission: resolve the numeric user id from
    /// the session and stamp the client-local "HH:MM" start time.
    fn prepare_submission(&self, draft: &ActivityDraft) -> ApiResult<ActivitySubmission> {
        let credential = self.session.current();
        let user_id = credential
            .user_id
            .as_deref()
            .and_then(|id| id.parse::<i64>().ok())
            .ok_or_else(|| {
                ApiError::invalid_submission("no numeric user id available in the current session")
            })?;

        Ok(ActivitySubmission {
            user_id,
            activity_type: draft.activity_type.clone(),
            duration: draft.duration,
            calories_burned: draft.calories_burned,
            start_time: current_start_time(),
            additional_metrics: (&draft.additional_metrics).into(),
        })
    }
}

#[async_trait]
impl ActivityRepository for ApiClient {
    async fn fetch_activities(&self) -> ApiResult<Vec<ActivityRecord>> {
        let response = self
            .request(Method::GET, routes::ACTIVITIES)
            .send()
            .await?;
        let response = check_response(response, None).await?;
        let activities: Vec<ActivityRecord> = response.json().await?;
        debug!(count = activities.len(), "fetched activities");
        Ok(activities)
    }

    async fn submit_activity(&self, draft: &ActivityDraft) -> ApiResult<ActivityRecord> {
        let submission = self.prepare_submission(draft)?;
        let response = self
            .request(Method::POST, routes::ACTIVITIES)
            .json(&submission)
            .send()
            .await?;
        let response = check_response(response, None).await?;
        let record: ActivityRecord = response.json().await?;
        info!(id = %record.id, activity_type = %record.activity_type, "activity submitted");
        Ok(record)
    }

    async fn fetch_activity_detail(&self, id: &str) -> ApiResult<ActivityDetail> {
        let resource = format!("activity {id}");
        let path = format!("{}/{id}", routes::ACTIVITY_RECOMMENDATION);
        let response = self.request(Method::GET, &path).send().await?;
        let response = check_response(response, Some(resource.as_str())).await?;
        Ok(response.json().await?)
    }
}

/// Map a non-success response onto the error taxonomy: 404 on a lookup route
/// to `NotFound` for the named resource, any other 4xx (including 404 off the
/// lookup routes) to `Validation` with the server's message, 5xx to `Network`.
async fn check_response(response: Response, lookup: Option<&str>) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let Some(resource) = lookup {
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: resource.to_owned(),
            });
        }
    }
    if status.is_client_error() {
        let message = response.text().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to read rejection body");
            "unable to read error response".to_owned()
        });
        return Err(ApiError::Validation {
            status: status.as_u16(),
            message,
        });
    }
    match response.error_for_status() {
        Ok(response) => Ok(response),
        Err(source) => Err(ApiError::Network { source }),
    }
}

fn current_start_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::models::{ActivityType, AdditionalMetrics, UserProfile};
    use crate::session::CredentialStore;
    use serde_json::json;

    fn authenticated_client(dir: &std::path::Path) -> ApiClient {
        let session = Arc::new(SessionManager::new(CredentialStore::new(dir)));
        let profile: UserProfile =
            serde_json::from_value(json!({"sub": "42", "name": "Jo"})).unwrap();
        session.on_auth_result("tok-abc", profile);
        let config = ClientConfig {
            api_base: "http://localhost:8080/api".to_owned(),
            data_dir: dir.to_path_buf(),
        };
        ApiClient::new(&config, session).unwrap()
    }

    fn draft() -> ActivityDraft {
        ActivityDraft {
            activity_type: ActivityType::Running,
            duration: 30,
            calories_burned: 300,
            additional_metrics: AdditionalMetrics::default(),
        }
    }

    #[test]
    fn authenticated_request_carries_bearer_and_user_id() {
        let dir = tempfile::tempdir().unwrap();
        let client = authenticated_client(dir.path());

        let request = client.request(Method::GET, routes::ACTIVITIES).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/activities"
        );
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-abc"
        );
        assert_eq!(request.headers().get(headers::USER_ID).unwrap(), "42");
    }

    #[test]
    fn unauthenticated_request_carries_no_auth_headers() {
        let dir = tempfile::tempdir().unwrap();
        let session = Arc::new(SessionManager::new(CredentialStore::new(dir.path())));
        let config = ClientConfig {
            api_base: "http://localhost:8080/api/".to_owned(),
            data_dir: dir.path().to_path_buf(),
        };
        let client = ApiClient::new(&config, session).unwrap();

        let request = client.request(Method::GET, routes::ACTIVITIES).build().unwrap();
        // A trailing slash on the base composes to the same endpoint.
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/activities"
        );
        assert!(request.headers().get("authorization").is_none());
        assert!(request.headers().get(headers::USER_ID).is_none());
    }

    #[test]
    fn detail_endpoint_keeps_the_base_path_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let client = authenticated_client(dir.path());

        let path = format!("{}/a1", routes::ACTIVITY_RECOMMENDATION);
        let request = client.request(Method::GET, &path).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/recommendations/activity/a1"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let dir = tempfile::tempdir().unwrap();
        let session = Arc::new(SessionManager::new(CredentialStore::new(dir.path())));
        let config = ClientConfig {
            api_base: "not a url".to_owned(),
            data_dir: dir.path().to_path_buf(),
        };

        let err = match ApiClient::new(&config, session) {
            Err(err) => err,
            Ok(_) => panic!("client accepted an unparseable base URL"),
        };
        assert!(matches!(err, ApiError::Validation { status: 400, .. }));
    }

    #[test]
    fn submission_resolves_user_id_and_stamps_start_time() {
        let dir = tempfile::tempdir().unwrap();
        let client = authenticated_client(dir.path());

        let submission = client.prepare_submission(&draft()).unwrap();
        assert_eq!(submission.user_id, 42);
        assert_eq!(submission.duration, 30);
        assert_eq!(submission.start_time.len(), 5);
        assert_eq!(submission.start_time.as_bytes()[2], b':');
        // Unset metrics default to zero on the wire.
        assert!((submission.additional_metrics.distance - 0.0).abs() < f64::EPSILON);
        assert_eq!(submission.additional_metrics.heart_rate, 0);
    }

    #[test]
    fn submission_without_numeric_user_id_fails_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let session = Arc::new(SessionManager::new(CredentialStore::new(dir.path())));
        // Subject is present but not numeric, as a raw IdP subject would be.
        let profile: UserProfile =
            serde_json::from_value(json!({"sub": "not-a-number"})).unwrap();
        session.on_auth_result("tok", profile);
        let config = ClientConfig {
            api_base: "http://localhost:8080/api".to_owned(),
            data_dir: dir.path().to_path_buf(),
        };
        let client = ApiClient::new(&config, session).unwrap();

        let err = client.prepare_submission(&draft()).unwrap_err();
        assert!(matches!(err, ApiError::Validation { status: 400, .. }));
    }

    fn response_with(status: u16, body: &'static str) -> Response {
        Response::from(http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn missing_route_404_is_a_validation_error() {
        let err = check_response(response_with(404, "no such route"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation { status: 404, .. }));
    }

    #[tokio::test]
    async fn lookup_404_is_not_found() {
        let err = check_response(response_with(404, ""), Some("activity a9"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource } if resource == "activity a9"));
    }

    #[tokio::test]
    async fn rejection_carries_the_server_message() {
        let err = check_response(response_with(422, "duration is required"), None)
            .await
            .unwrap_err();
        match err {
            ApiError::Validation { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "duration is required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn server_failure_is_a_network_error() {
        let err = check_response(response_with(500, ""), Some("activity a9"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
    }
}
