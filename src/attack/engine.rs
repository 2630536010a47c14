use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::join_all;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval};

use crate::error::{AppError, AppResult, HttpError};
use crate::metrics::Hit;
use crate::targets::Target;

/// One paced pass of requests against a target list.
///
/// Implementations leave the rate tag at its default; tagging is the
/// orchestrator's job.
#[async_trait]
pub trait AttackEngine {
    async fn attack(
        &self,
        targets: &[Target],
        rate: u64,
        duration: Duration,
    ) -> AppResult<Vec<Hit>>;
}

/// Paced `reqwest` issuer shared by every pass of a run.
///
/// The redirect-follow limit and the optional per-request timeout are fixed
/// at construction, before the first pass.
pub struct Attacker {
    client: Client,
}

impl Attacker {
    /// Build the shared HTTP client. A zero `timeout` disables the
    /// per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(redirects: usize, timeout: Duration) -> AppResult<Self> {
        let mut builder = Client::builder().redirect(Policy::limited(redirects));
        if timeout > Duration::ZERO {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AppError::http(HttpError::ClientBuild { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AttackEngine for Attacker {
    /// Issue `rate` requests per second round-robin over `targets` for
    /// `duration`, collecting one hit per request. Hits come back sorted by
    /// issue time.
    async fn attack(
        &self,
        targets: &[Target],
        rate: u64,
        duration: Duration,
    ) -> AppResult<Vec<Hit>> {
        if targets.is_empty() || rate == 0 {
            return Ok(Vec::new());
        }

        let seconds = duration.as_secs().max(1);
        let total = usize::try_from(rate.saturating_mul(seconds)).unwrap_or(usize::MAX);
        let (hit_tx, mut hit_rx) = mpsc::unbounded_channel();
        let mut handles = Vec::with_capacity(total.min(65_536));
        let mut next_target: usize = 0;

        let mut tick = interval(Duration::from_secs(1));
        for _ in 0..seconds {
            tick.tick().await;
            for _ in 0..rate {
                let Some(target) = targets.get(next_target).cloned() else {
                    break;
                };
                next_target = next_target.saturating_add(1) % targets.len();
                let client = self.client.clone();
                let hit_tx = hit_tx.clone();
                handles.push(tokio::spawn(async move {
                    drop(hit_tx.send(issue(&client, &target).await));
                }));
            }
        }
        drop(hit_tx);
        drop(join_all(handles).await);

        let mut hits = Vec::with_capacity(total.min(65_536));
        while let Some(hit) = hit_rx.recv().await {
            hits.push(hit);
        }
        hits.sort_by_key(|hit| hit.timestamp);
        Ok(hits)
    }
}

async fn issue(client: &Client, target: &Target) -> Hit {
    let timestamp = Utc::now();
    let started = Instant::now();
    let bytes_out = u64::try_from(target.body.len()).unwrap_or(u64::MAX);

    let mut request = client
        .request(target.method.clone(), target.url.clone())
        .headers(target.headers.clone());
    if !target.body.is_empty() {
        request = request.body(target.body.clone());
    }

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.bytes().await;
            let latency = started.elapsed();
            let (bytes_in, error) = match body {
                Ok(body) => {
                    let error = if status.is_success() {
                        String::new()
                    } else {
                        status_error(status)
                    };
                    (u64::try_from(body.len()).unwrap_or(u64::MAX), error)
                }
                Err(err) => (0, err.to_string()),
            };
            Hit {
                timestamp,
                latency,
                bytes_in,
                bytes_out,
                status: status.as_u16(),
                error,
                rate: 0,
            }
        }
        Err(err) => Hit {
            timestamp,
            latency: started.elapsed(),
            bytes_in: 0,
            bytes_out,
            status: 0,
            error: err.to_string(),
            rate: 0,
        },
    }
}

fn status_error(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
