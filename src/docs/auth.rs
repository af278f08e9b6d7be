use crate::config::Credentials;
use crate::docs::transport::Transport;
use crate::error::{DocsError, Result};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// Seconds shaved off `expires_in` so a token is never used right at its deadline.
const EXPIRY_MARGIN_SECS: u64 = 60;

pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    expires_at_ms: u64,
}

/// Exchanges the refresh token for short-lived access tokens and caches the
/// current one until shortly before it expires.
///
/// Concurrent callers that both observe an expired token will both refresh;
/// the exchange is idempotent so the last writer simply wins.
pub struct TokenProvider {
    credentials: Credentials,
    token_url: String,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(
        credentials: Credentials,
        token_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            credentials,
            token_url: token_url.into(),
            transport,
            clock,
            cached: RwLock::new(None),
        }
    }

    pub async fn valid_token(&self) -> Result<String> {
        let now = self.clock.now_ms();
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref()
                && now < token.expires_at_ms
            {
                return Ok(token.token.clone());
            }
        }

        let fresh = self.exchange().await?;
        let lifetime_secs = fresh.expires_in.saturating_sub(EXPIRY_MARGIN_SECS);
        let expires_at_ms = now.saturating_add(lifetime_secs.saturating_mul(1000));

        let mut cached = self.cached.write().await;
        *cached = Some(CachedToken {
            token: fresh.access_token.clone(),
            expires_at_ms,
        });
        tracing::info!(lifetime_secs, "refreshed Google access token");
        Ok(fresh.access_token)
    }

    async fn exchange(&self) -> Result<TokenResponse> {
        let form = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let response = self
            .transport
            .post_form(&self.token_url, &form)
            .await
            .map_err(|err| DocsError::Auth(err.to_string()))?;

        if !response.is_success() {
            return Err(DocsError::Auth(format!(
                "({}): {}",
                response.status, response.body
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|err| DocsError::Auth(format!("malformed token response: {err}")))
    }
}
