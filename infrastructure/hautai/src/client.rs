use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use business::domain::skin_analysis::errors::SkinAnalysisError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the Haut.ai SaaS API.
#[derive(Debug, Clone, Default)]
pub struct HautAISettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub company_id: Option<String>,
    pub dataset_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub company_id: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    company_id: String,
}

/// Shared Haut.ai HTTP client.
///
/// Requests run under a cached session. A static API key with its company id
/// never expires; a session obtained by logging in is dropped on the first
/// 401 and the request is retried once with a fresh login.
pub struct HautAIClient {
    pub client: Client,
    pub base_url: String,
    dataset_id: Option<String>,
    username: Option<String>,
    password: Option<String>,
    static_session: bool,
    session: RwLock<Option<Session>>,
}

impl HautAIClient {
    pub fn new(settings: HautAISettings) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();

        let static_session = match (settings.api_key, settings.company_id) {
            (Some(access_token), Some(company_id)) => Some(Session {
                access_token,
                company_id,
            }),
            _ => None,
        };

        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            dataset_id: settings.dataset_id.filter(|d| !d.is_empty()),
            username: settings.username,
            password: settings.password,
            static_session: static_session.is_some(),
            session: RwLock::new(static_session),
        }
    }

    fn login_url(&self) -> String {
        format!("{}/api/v1/auth/login/", self.base_url)
    }

    /// `{base}/api/v1/companies/{company}/datasets/{dataset}/subjects/{segments..}/`
    ///
    /// Each segment is percent-encoded on its own, so an id can never add
    /// path levels, a query or a fragment.
    fn subjects_url(
        &self,
        session: &Session,
        dataset_id: &str,
        segments: &[&str],
    ) -> Result<Url, SkinAnalysisError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            error!(error = %e, base_url = %self.base_url, "Haut.ai base URL is invalid");
            SkinAnalysisError::ProviderUnavailable
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                error!(base_url = %self.base_url, "Haut.ai base URL cannot carry a path");
                SkinAnalysisError::ProviderUnavailable
            })?
            .pop_if_empty()
            .extend([
                "api",
                "v1",
                "companies",
                session.company_id.as_str(),
                "datasets",
                dataset_id,
                "subjects",
            ])
            .extend(segments)
            .push("");
        Ok(url)
    }

    fn dataset_id(&self) -> Result<&str, SkinAnalysisError> {
        self.dataset_id.as_deref().ok_or_else(|| {
            error!("Haut.ai dataset id is not configured");
            SkinAnalysisError::ProviderUnavailable
        })
    }

    async fn session(&self) -> Result<Session, SkinAnalysisError> {
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.clone());
        }

        let mut guard = self.session.write().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }
        let session = self.login().await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    async fn clear_session(&self) {
        if !self.static_session {
            *self.session.write().await = None;
        }
    }

    async fn login(&self) -> Result<Session, SkinAnalysisError> {
        let (Some(username), Some(password)) = (self.username.as_deref(), self.password.as_deref())
        else {
            error!("Haut.ai credentials are not configured");
            return Err(SkinAnalysisError::ProviderUnavailable);
        };

        let response = self
            .client
            .post(self.login_url())
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Haut.ai login request failed");
                SkinAnalysisError::ProviderUnavailable
            })?;

        if !response.status().is_success() {
            error!(status = %response.status(), "Haut.ai login rejected");
            return Err(SkinAnalysisError::ProviderUnavailable);
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Haut.ai login response is malformed");
            SkinAnalysisError::InvalidProviderResponse
        })?;

        info!(company_id = %body.company_id, "Logged in to Haut.ai");
        Ok(Session {
            access_token: body.access_token,
            company_id: body.company_id,
        })
    }

    /// Sends a request below `subjects/` of the configured dataset and parses
    /// the JSON body. `segments` are the path levels after `subjects/`.
    pub async fn request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&serde_json::Value>,
        timeout: Duration,
    ) -> Result<serde_json::Value, SkinAnalysisError> {
        let dataset_id = self.dataset_id()?;

        for attempt in 0..2 {
            let session = self.session().await?;
            let url = self.subjects_url(&session, dataset_id, segments)?;

            let mut builder = self
                .client
                .request(method.clone(), url.clone())
                .bearer_auth(&session.access_token)
                .timeout(timeout);
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| {
                error!(error = %e, %url, "Haut.ai request failed");
                SkinAnalysisError::ProviderUnavailable
            })?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED && attempt == 0 && !self.static_session {
                warn!("Haut.ai session expired, logging in again");
                self.clear_session().await;
                continue;
            }
            if !status.is_success() {
                error!(%status, %url, "Haut.ai returned an error status");
                return Err(SkinAnalysisError::ProviderUnavailable);
            }

            let text = response.text().await.map_err(|e| {
                error!(error = %e, %url, "Failed to read Haut.ai response body");
                SkinAnalysisError::ProviderUnavailable
            })?;

            return serde_json::from_str(&text).map_err(|e| {
                let preview: String = text.chars().take(500).collect();
                error!(error = %e, body = %preview, "Haut.ai response is not valid JSON");
                SkinAnalysisError::InvalidProviderResponse
            });
        }

        Err(SkinAnalysisError::ProviderUnavailable)
    }
}
