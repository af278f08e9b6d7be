use serde_json::{Map, Value};

pub const DEFAULT_API_BASE_URL: &str = "https://docs.googleapis.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub const CLIENT_ID_KEY: &str = "GOOGLE_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "GOOGLE_CLIENT_SECRET";
pub const REFRESH_TOKEN_KEY: &str = "GOOGLE_REFRESH_TOKEN";

pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET, and GOOGLE_REFRESH_TOKEN are all required.";

/// OAuth client values used for the refresh-token exchange.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Builds credentials only when all three values are present and non-empty.
    pub fn from_parts(
        client_id: Option<String>,
        client_secret: Option<String>,
        refresh_token: Option<String>,
    ) -> Option<Self> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Some(Self {
            client_id: non_empty(client_id)?,
            client_secret: non_empty(client_secret)?,
            refresh_token: non_empty(refresh_token)?,
        })
    }
}

/// Credential values as configured, any of which may be missing.
///
/// Startup values and per-call argument keys are merged field by field, so a
/// host can supply only the values the startup environment lacks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialParts {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for CredentialParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("CredentialParts")
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

impl CredentialParts {
    #[cfg(test)]
    pub fn new(client_id: &str, client_secret: &str, refresh_token: &str) -> Self {
        Self {
            client_id: Some(client_id.to_string()),
            client_secret: Some(client_secret.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        }
    }

    /// Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            client_id: read(CLIENT_ID_KEY),
            client_secret: read(CLIENT_SECRET_KEY),
            refresh_token: read(REFRESH_TOKEN_KEY),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the per-call credential keys some hosts inject into tool arguments.
    pub fn from_arguments(args: &Map<String, Value>) -> Self {
        Self::from_lookup(|key| {
            args.get(key)
                .and_then(|value| value.as_str())
                .map(str::to_string)
        })
    }

    /// Keeps every value already set and fills the gaps from `fallback`.
    pub fn or(self, fallback: CredentialParts) -> CredentialParts {
        CredentialParts {
            client_id: self.client_id.or(fallback.client_id),
            client_secret: self.client_secret.or(fallback.client_secret),
            refresh_token: self.refresh_token.or(fallback.refresh_token),
        }
    }

    pub fn complete(&self) -> Option<Credentials> {
        Credentials::from_parts(
            self.client_id.clone(),
            self.client_secret.clone(),
            self.refresh_token.clone(),
        )
    }

    pub fn has_client_id(&self) -> bool {
        self.client_id.is_some()
    }
}

/// Removes credential keys so they never reach the per-tool argument parser.
pub fn strip_credential_keys(args: &mut Map<String, Value>) {
    for key in [CLIENT_ID_KEY, CLIENT_SECRET_KEY, REFRESH_TOKEN_KEY] {
        args.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base_url: String,
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Credentials configured at startup; each value set here wins over the
    /// matching per-call key.
    pub credentials: CredentialParts,
    pub endpoints: Endpoints,
}

impl ServerConfig {
    pub fn resolve_credentials(&self, args: &Map<String, Value>) -> Option<Credentials> {
        self.credentials
            .clone()
            .or(CredentialParts::from_arguments(args))
            .complete()
    }
}
