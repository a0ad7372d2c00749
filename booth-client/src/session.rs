//! Session guard
//!
//! Gates admin operations on the presence of stored credentials and
//! validates a candidate pair once, at login time, against a protected
//! listing. The validated pair is only persisted; it is re-sent fresh on
//! every subsequent admin call rather than reused from the probe.

use crate::{AdminCredentials, ApiClient, ClientError, ClientResult, CredentialStore};
use shared::models::Booth;
use std::sync::Arc;

/// Credential gate in front of the admin view-models
pub struct SessionGuard<S> {
    client: ApiClient,
    store: Arc<S>,
}

impl<S> Clone for SessionGuard<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CredentialStore> SessionGuard<S> {
    pub fn new(client: ApiClient, store: Arc<S>) -> Self {
        Self { client, store }
    }

    /// Stored pair for immediate one-shot use.
    ///
    /// Returns `LoginRequired` when either field is absent; the caller
    /// redirects to the login flow and aborts before any network call.
    pub fn require_credentials(&self) -> ClientResult<AdminCredentials> {
        let creds = self.store.read();
        if !creds.is_complete() {
            return Err(ClientError::LoginRequired);
        }
        Ok(creds)
    }

    /// Stored username for login-form prefill. The password is never
    /// handed back for prefill.
    pub fn remembered_username(&self) -> Option<String> {
        let creds = self.store.read();
        if creds.username.is_empty() {
            None
        } else {
            Some(creds.username)
        }
    }

    /// Validate a candidate pair and persist it on success.
    ///
    /// Issues one probe against the protected booth listing. A 401 means
    /// the pair is wrong; any other failure status means verification
    /// failed for an unrelated reason and the pair is not saved.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Please enter username and password.".into(),
            ));
        }

        let creds = AdminCredentials::new(username, password);
        match self
            .client
            .admin_get::<Vec<Booth>>("/admin/booths", &creds)
            .await
        {
            Ok(_) => {
                self.store.save(&creds);
                tracing::info!(username = %creds.username, "Admin credentials verified");
                Ok(())
            }
            Err(ClientError::Unauthorized) => Err(ClientError::InvalidCredentials),
            Err(e @ ClientError::Network(_)) => Err(e),
            Err(e) => Err(ClientError::VerificationFailed(e.to_string())),
        }
    }

    /// Clear the stored pair. Always succeeds; calling it with nothing
    /// stored is a no-op.
    pub fn logout(&self) {
        self.store.clear();
        tracing::debug!("Admin session cleared");
    }
}
