//! Per-client rate limiting middleware
//!
//! Sliding-log limiter keyed by remote IP address.

use std::{
    collections::{HashMap, VecDeque},
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::error::AppError;

/// Buckets are swept for idle clients once the map grows past this size
const SWEEP_THRESHOLD: usize = 1024;

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

/// Sliding window request counter per client address
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    hits: Mutex<HashMap<IpAddr, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a request from `client` at the current instant
    pub async fn check(&self, client: IpAddr) -> RateDecision {
        self.check_at(client, Instant::now()).await
    }

    /// Record a request from `client` at `now`
    pub async fn check_at(&self, client: IpAddr, now: Instant) -> RateDecision {
        let mut hits = self.hits.lock().await;

        if hits.len() > SWEEP_THRESHOLD {
            let window = self.window;
            hits.retain(|_, log| {
                log.back()
                    .is_some_and(|last| now.saturating_duration_since(*last) < window)
            });
        }

        let log = hits.entry(client).or_default();
        while log
            .front()
            .is_some_and(|first| now.saturating_duration_since(*first) >= self.window)
        {
            log.pop_front();
        }

        if log.len() as u32 >= self.max_requests {
            let retry_after = log
                .front()
                .map(|first| self.window.saturating_sub(now.saturating_duration_since(*first)))
                .unwrap_or(self.window);
            return RateDecision::Limited { retry_after };
        }

        log.push_back(now);
        RateDecision::Allowed {
            remaining: self.max_requests - log.len() as u32,
        }
    }
}

/// Remote address of the caller, when the server was started with connect info
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Middleware rejecting clients that exceed the limiter's budget
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_ip(&request);

    match limiter.check(client).await {
        RateDecision::Allowed { remaining } => {
            tracing::trace!("Rate limit ok for {}: {} remaining", client, remaining);
            next.run(request).await
        }
        RateDecision::Limited { retry_after } => {
            tracing::warn!("Rate limit exceeded for {}", client);
            AppError::RateLimited {
                limit: limiter.max_requests(),
                window_secs: limiter.window().as_secs(),
                retry_after_secs: retry_after.as_secs().max(1),
            }
            .into_response()
        }
    }
}
