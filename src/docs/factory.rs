use crate::config::{Credentials, Endpoints};
use crate::docs::client::DocsClient;
use crate::docs::transport::Transport;
use std::sync::{Arc, Mutex};

/// Hands out a [`DocsClient`] for a credential tuple, reusing the previous
/// one (and its cached access token) while the credentials stay the same.
pub struct ClientFactory {
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    current: Mutex<Option<(Credentials, Arc<DocsClient>)>>,
}

impl ClientFactory {
    pub fn new(endpoints: Endpoints, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoints,
            transport,
            current: Mutex::new(None),
        }
    }

    pub fn client_for(&self, credentials: &Credentials) -> Arc<DocsClient> {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((cached, client)) = current.as_ref()
            && cached == credentials
        {
            return client.clone();
        }

        tracing::debug!(client_id = %credentials.client_id, "building Google Docs client");
        let client = Arc::new(DocsClient::new(
            credentials.clone(),
            &self.endpoints,
            self.transport.clone(),
        ));
        *current = Some((credentials.clone(), client.clone()));
        client
    }
}
