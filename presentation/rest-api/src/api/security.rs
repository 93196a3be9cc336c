use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use poem::Request;
use poem::http::header::CACHE_CONTROL;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use business::domain::shared::value_objects::UserId;

/// Google's public signing keys for Firebase ID tokens, as a JWK set.
pub const GOOGLE_SIGNING_KEYS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const DEFAULT_KEYS_TTL: Duration = Duration::from_secs(3600);
const KEYS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth.invalid_token_header")]
    InvalidHeader,
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.signing_keys_unavailable")]
    KeysUnavailable,
    #[error("auth.token_validation_failed")]
    InvalidToken,
    #[error("auth.invalid_subject")]
    InvalidSubject,
}

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
}

struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    expires_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Verifies Firebase ID tokens for one project.
///
/// Signing keys are fetched lazily and kept for as long as Google's
/// `Cache-Control: max-age` allows. A `kid` missing from a fresh key set is
/// rejected without refetching.
pub struct FirebaseTokenVerifier {
    project_id: String,
    issuer: String,
    keys_url: String,
    http: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self::with_keys_url(project_id, GOOGLE_SIGNING_KEYS_URL)
    }

    pub fn with_keys_url(project_id: impl Into<String>, keys_url: impl Into<String>) -> Self {
        let project_id = project_id.into();
        Self {
            issuer: format!("https://securetoken.google.com/{}", project_id),
            project_id,
            keys_url: keys_url.into(),
            http: reqwest::Client::builder()
                .timeout(KEYS_FETCH_TIMEOUT)
                .build()
                .unwrap_or_default(),
            cache: RwLock::new(None),
        }
    }

    /// Validates signature, audience, issuer and expiry. Returns the token's UID.
    pub async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidHeader)?;
        let kid = header.kid.ok_or(AuthError::MissingKid)?;
        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);
        validation.validate_exp = true;

        let data = decode::<FirebaseClaims>(token, &key, &validation).map_err(|e| {
            debug!(error = %e, "Firebase token rejected");
            AuthError::InvalidToken
        })?;

        UserId::parse(data.claims.sub).ok_or(AuthError::InvalidSubject)
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.is_fresh()
            {
                return cached.keys.get(kid).cloned().ok_or(AuthError::UnknownKid);
            }
        }

        let mut cache = self.cache.write().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(cached) = cache.as_ref()
            && cached.is_fresh()
        {
            return cached.keys.get(kid).cloned().ok_or(AuthError::UnknownKid);
        }

        let fresh = self.fetch_keys().await?;
        let key = fresh.keys.get(kid).cloned();
        *cache = Some(fresh);
        key.ok_or(AuthError::UnknownKid)
    }

    async fn fetch_keys(&self) -> Result<CachedKeys, AuthError> {
        let response = self
            .http
            .get(&self.keys_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(error = %e, "Failed to fetch Firebase signing keys");
                AuthError::KeysUnavailable
            })?;

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .and_then(max_age)
            .unwrap_or(DEFAULT_KEYS_TTL);

        let set: JwkSet = response.json().await.map_err(|e| {
            error!(error = %e, "Firebase signing keys are not a JWK set");
            AuthError::KeysUnavailable
        })?;

        let mut keys = HashMap::new();
        for jwk in &set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => warn!(kid = %kid, error = %e, "Skipping unusable signing key"),
            }
        }

        info!(
            keys = keys.len(),
            ttl_secs = ttl.as_secs(),
            "Refreshed Firebase signing keys"
        );
        Ok(CachedKeys {
            keys,
            expires_at: Instant::now() + ttl,
        })
    }

    #[cfg(test)]
    pub(crate) async fn install_key(&self, kid: &str, key: DecodingKey) {
        let mut cache = self.cache.write().await;
        let mut keys = cache
            .take()
            .map(|c| c.keys)
            .unwrap_or_default();
        keys.insert(kid.to_string(), key);
        *cache = Some(CachedKeys {
            keys,
            expires_at: Instant::now() + DEFAULT_KEYS_TTL,
        });
    }
}

/// Reads `max-age=<seconds>` from a Cache-Control header value.
fn max_age(cache_control: &str) -> Option<Duration> {
    cache_control
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|secs| secs.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Firebase Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub UserId);

async fn firebase_bearer_checker(req: &Request, bearer: Bearer) -> Option<UserId> {
    let Some(verifier) = req.data::<Arc<FirebaseTokenVerifier>>() else {
        error!("FirebaseTokenVerifier is not registered on the route");
        return None;
    };

    match verifier.verify(&bearer.token).await {
        Ok(uid) => Some(uid),
        Err(e) => {
            warn!(error = %e, path = %req.uri().path(), "Firebase auth failed");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::Utc;
    use jsonwebtoken::{DecodingKey, EncodingKey, Header, encode};
    use serde_json::json;

    use super::FirebaseTokenVerifier;

    pub const PROJECT_ID: &str = "bloomskin-test";
    pub const TEST_KID: &str = "test-key-1";
    pub const PRIVATE_KEY_PEM: &str = include_str!("../../fixtures/firebase_test_private_key.pem");
    pub const PUBLIC_KEY_PEM: &str = include_str!("../../fixtures/firebase_test_public_key.pem");
    pub const JWKS_JSON: &str = include_str!("../../fixtures/firebase_test_jwks.json");

    pub fn sign(claims: serde_json::Value, kid: Option<&str>) -> String {
        let mut header = Header::new(jsonwebtoken::Algorithm::RS256);
        header.kid = kid.map(str::to_string);
        let key = EncodingKey::from_rsa_pem(PRIVATE_KEY_PEM.as_bytes()).unwrap();
        encode(&header, &claims, &key).unwrap()
    }

    pub fn claims_for(uid: &str) -> serde_json::Value {
        let now = Utc::now().timestamp();
        json!({
            "sub": uid,
            "aud": PROJECT_ID,
            "iss": format!("https://securetoken.google.com/{}", PROJECT_ID),
            "iat": now,
            "exp": now + 3600,
        })
    }

    pub fn token_for(uid: &str) -> String {
        sign(claims_for(uid), Some(TEST_KID))
    }

    /// A verifier with the test key preinstalled, pointing at an unroutable key URL.
    pub async fn verifier() -> Arc<FirebaseTokenVerifier> {
        let verifier = FirebaseTokenVerifier::with_keys_url(PROJECT_ID, "http://127.0.0.1:9/keys");
        verifier
            .install_key(
                TEST_KID,
                DecodingKey::from_rsa_pem(PUBLIC_KEY_PEM.as_bytes()).unwrap(),
            )
            .await;
        Arc::new(verifier)
    }
}
