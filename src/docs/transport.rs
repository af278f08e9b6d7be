use crate::error::{DocsError, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two kinds of HTTP exchange the client performs.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Form-encoded POST, used for the token exchange.
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse>;

    /// Bearer-authenticated JSON request against the document API.
    async fn send_json(
        &self,
        method: Method,
        url: &str,
        bearer: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

async fn into_response(response: reqwest::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| DocsError::Transport(format!("failed to read response body: {e}")))?;
    Ok(HttpResponse { status, body })
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse> {
        let response = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| DocsError::Transport(e.to_string()))?;
        into_response(response).await
    }

    async fn send_json(
        &self,
        method: Method,
        url: &str,
        bearer: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse> {
        let mut request = self
            .http
            .request(method, url)
            .header("Authorization", format!("Bearer {bearer}"));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| DocsError::Transport(e.to_string()))?;
        into_response(response).await
    }
}
