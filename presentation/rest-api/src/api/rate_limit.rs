use std::net::IpAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use poem::http::StatusCode;
use poem::http::header::RETRY_AFTER;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};
use serde_json::json;
use tracing::warn;

pub type ClientRateLimiter = DefaultKeyedRateLimiter<IpAddr>;

/// Per-client-IP request limit.
pub struct RateLimit {
    limiter: Arc<ClientRateLimiter>,
}

impl RateLimit {
    pub fn per_minute(requests: NonZeroU32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::keyed(Quota::per_minute(requests))),
        }
    }

    /// Shared handle, used to evict idle clients periodically.
    pub fn limiter(&self) -> Arc<ClientRateLimiter> {
        Arc::clone(&self.limiter)
    }
}

impl<E: Endpoint> Middleware<E> for RateLimit {
    type Output = RateLimitEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RateLimitEndpoint {
            inner: ep,
            limiter: Arc::clone(&self.limiter),
        }
    }
}

pub struct RateLimitEndpoint<E> {
    inner: E,
    limiter: Arc<ClientRateLimiter>,
}

impl<E: Endpoint> Endpoint for RateLimitEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        if let Some(ip) = client_ip(&req)
            && let Err(not_until) = self.limiter.check_key(&ip)
        {
            let wait = not_until.wait_time_from(DefaultClock::default().now());
            warn!(ip = %ip, path = %req.uri().path(), "Rate limit exceeded");
            return Ok(too_many_requests(wait));
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

/// First `X-Forwarded-For` hop, else the peer address.
///
/// The first hop is client-controlled: a caller that rotates the header gets
/// a fresh bucket per value. Idle buckets are evicted by the periodic cleanup
/// in `setup::server`.
fn client_ip(req: &Request) -> Option<IpAddr> {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|first| first.trim().parse().ok());

    forwarded.or_else(|| req.remote_addr().as_socket_addr().map(|addr| addr.ip()))
}

fn too_many_requests(wait: Duration) -> Response {
    let retry_after = wait.as_secs().max(1);
    let body = json!({
        "name": "RateLimitExceeded",
        "message": "rate_limit.exceeded",
    });

    Response::builder()
        .status(StatusCode::TOO_MANY_REQUESTS)
        .header(RETRY_AFTER, retry_after.to_string())
        .content_type("application/json")
        .body(body.to_string())
}
