//! Admin booth manager view-model
//!
//! Credential-gated CRUD over booth records plus the booking-request
//! listing. Every mutation reloads the full list after the response
//! instead of merging locally, so the admin always sees authoritative
//! backend state (read-your-writes for this session only; concurrent
//! admins are last-write-wins).

use crate::session::SessionGuard;
use crate::{ApiClient, ClientError, CredentialStore, LogoFile};
use shared::client::UploadResponse;
use shared::models::{Booth, BoothCategory, BoothPayload, BoothStatus, BookingRequest};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Whether an admin operation ran or bounced to the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminFlow {
    Completed,
    /// No stored credentials, or the backend rejected them; the caller
    /// redirects to the login flow
    LoginRequired,
}

/// In-progress create/edit form
///
/// A pure client-side draft. Nothing here reaches the backend until
/// [`AdminBoothManager::save`] runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoothForm {
    /// Record id when editing an existing booth
    pub editing_id: Option<String>,
    /// Required for create; immutable once the record exists
    pub number: Option<u32>,
    pub category: BoothCategory,
    pub status: BoothStatus,
    pub company_name: String,
    pub company_website: String,
    pub company_short_text: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub company_logo_url: String,
}

impl BoothForm {
    fn for_edit(booth: &Booth) -> Self {
        Self {
            editing_id: Some(booth.id.clone()),
            number: Some(booth.number),
            category: booth.category,
            status: booth.status,
            company_name: booth.company_name.clone().unwrap_or_default(),
            company_website: booth.company_website.clone().unwrap_or_default(),
            company_short_text: booth.company_short_text.clone().unwrap_or_default(),
            contact_name: booth.contact_name.clone().unwrap_or_default(),
            contact_phone: booth.contact_phone.clone().unwrap_or_default(),
            contact_email: booth.contact_email.clone().unwrap_or_default(),
            company_logo_url: booth.company_logo_url.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Full create/update payload; blank fields are omitted, not sent
    /// as empty strings
    fn payload(&self, number: u32) -> BoothPayload {
        fn opt(value: &str) -> Option<String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }

        BoothPayload {
            number,
            category: self.category,
            status: self.status,
            company_name: opt(&self.company_name),
            company_website: opt(&self.company_website),
            company_short_text: opt(&self.company_short_text),
            contact_name: opt(&self.contact_name),
            contact_phone: opt(&self.contact_phone),
            contact_email: opt(&self.contact_email),
            company_logo_url: opt(&self.company_logo_url),
            position: None,
        }
    }
}

/// Observable state of the admin view
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub booths: Vec<Booth>,
    pub requests: Vec<BookingRequest>,
    pub loading: bool,
    pub error: Option<String>,
    pub saving: bool,
    pub uploading: bool,
    /// Record id with a delete outstanding, if any
    pub deleting_id: Option<String>,
    pub form: Option<BoothForm>,
}

/// Admin booth manager view-model
pub struct AdminBoothManager<S> {
    client: ApiClient,
    guard: SessionGuard<S>,
    state: Arc<RwLock<AdminState>>,
}

impl<S> Clone for AdminBoothManager<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            guard: self.guard.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: CredentialStore> AdminBoothManager<S> {
    pub fn new(client: ApiClient, store: Arc<S>) -> Self {
        let guard = SessionGuard::new(client.clone(), store);
        Self {
            client,
            guard,
            state: Arc::new(RwLock::new(AdminState {
                loading: true,
                ..Default::default()
            })),
        }
    }

    /// Login/logout surface for the embedding login flow
    pub fn session(&self) -> &SessionGuard<S> {
        &self.guard
    }

    /// Clone of the current view state
    pub async fn snapshot(&self) -> AdminState {
        self.state.read().await.clone()
    }

    /// Load the booth list under credentials
    pub async fn refresh(&self) -> AdminFlow {
        {
            let mut state = self.state.write().await;
            state.error = None;
            state.loading = true;
        }

        let creds = match self.guard.require_credentials() {
            Ok(creds) => creds,
            Err(_) => {
                self.state.write().await.loading = false;
                return AdminFlow::LoginRequired;
            }
        };

        let result = self.client.admin_get::<Vec<Booth>>("/admin/booths", &creds).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(booths) => {
                state.booths = booths;
                AdminFlow::Completed
            }
            Err(ClientError::Unauthorized) => AdminFlow::LoginRequired,
            Err(e) => {
                tracing::warn!("Failed to load admin booths: {}", e);
                state.error = Some(e.user_message("Failed to load booths."));
                AdminFlow::Completed
            }
        }
    }

    /// Load booking requests, optionally filtered by booth number
    pub async fn load_requests(&self, booth_number: Option<u32>) -> AdminFlow {
        {
            let mut state = self.state.write().await;
            state.error = None;
            state.loading = true;
        }

        let creds = match self.guard.require_credentials() {
            Ok(creds) => creds,
            Err(_) => {
                self.state.write().await.loading = false;
                return AdminFlow::LoginRequired;
            }
        };

        let path = match booth_number {
            Some(n) => format!("/admin/booking-requests?boothNumber={n}"),
            None => "/admin/booking-requests".to_string(),
        };
        let result = self.client.admin_get::<Vec<BookingRequest>>(&path, &creds).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(requests) => {
                state.requests = requests;
                AdminFlow::Completed
            }
            Err(ClientError::Unauthorized) => AdminFlow::LoginRequired,
            Err(e) => {
                tracing::warn!("Failed to load booking requests: {}", e);
                state.error = Some(e.user_message("Failed to load booking requests."));
                AdminFlow::Completed
            }
        }
    }

    // ========== Form lifecycle ==========

    /// Open a blank create form
    pub async fn open_create(&self) {
        self.state.write().await.form = Some(BoothForm::default());
    }

    /// Open an edit form pre-filled from an existing record
    pub async fn open_edit(&self, booth: &Booth) {
        self.state.write().await.form = Some(BoothForm::for_edit(booth));
    }

    pub async fn close_form(&self) {
        self.state.write().await.form = None;
    }

    /// Mutate the open form. Booth `number` is immutable once the record
    /// exists; edits to it while editing are discarded.
    pub async fn edit_form<F: FnOnce(&mut BoothForm)>(&self, edit: F) {
        let mut state = self.state.write().await;
        if let Some(form) = state.form.as_mut() {
            let locked_number = form.is_editing().then_some(form.number);
            edit(form);
            if let Some(number) = locked_number {
                form.number = number;
            }
        }
    }

    /// Create or update from the open form.
    ///
    /// Create requires a booth number and fails client-side before any
    /// network call when it is missing. On success the form closes and the
    /// list is reloaded; the new record is never inserted optimistically.
    pub async fn save(&self) -> AdminFlow {
        {
            let mut state = self.state.write().await;
            state.error = None;
            state.saving = true;
        }

        let creds = match self.guard.require_credentials() {
            Ok(creds) => creds,
            Err(_) => {
                self.state.write().await.saving = false;
                return AdminFlow::LoginRequired;
            }
        };

        let form = self.state.read().await.form.clone();
        let Some(form) = form else {
            let mut state = self.state.write().await;
            state.saving = false;
            state.error = Some("No booth form is open.".into());
            return AdminFlow::Completed;
        };

        let number = match form.number {
            Some(number) => number,
            None => {
                let err = ClientError::Validation("Booth number is required.".into());
                let mut state = self.state.write().await;
                state.saving = false;
                state.error = Some(err.user_message("Failed to save booth."));
                return AdminFlow::Completed;
            }
        };

        let payload = form.payload(number);
        // Response bodies are ignored beyond success/error; authoritative
        // state comes from the reload below
        let result = match &form.editing_id {
            Some(id) => {
                self.client
                    .admin_patch::<serde_json::Value, _>(&format!("/admin/booths/{id}"), &creds, &payload)
                    .await
            }
            None => {
                self.client
                    .admin_post::<serde_json::Value, _>("/admin/booths", &creds, &payload)
                    .await
            }
        };

        match result {
            Ok(_) => {
                {
                    let mut state = self.state.write().await;
                    state.form = None;
                    state.saving = false;
                }
                self.refresh().await
            }
            Err(ClientError::Unauthorized) => {
                self.state.write().await.saving = false;
                AdminFlow::LoginRequired
            }
            Err(e) => {
                tracing::warn!("Failed to save booth: {}", e);
                let mut state = self.state.write().await;
                state.saving = false;
                state.error = Some(e.user_message("Failed to save booth."));
                AdminFlow::Completed
            }
        }
    }

    /// Delete a booth record.
    ///
    /// The confirmation gate runs before any network call; a negative
    /// answer leaves the list byte-identical. A second delete for an id
    /// already in flight is suppressed.
    pub async fn delete<F>(&self, booth: &Booth, confirm: F) -> AdminFlow
    where
        F: FnOnce(&Booth) -> bool,
    {
        if !confirm(booth) {
            return AdminFlow::Completed;
        }

        {
            let mut state = self.state.write().await;
            if state.deleting_id.as_deref() == Some(booth.id.as_str()) {
                return AdminFlow::Completed;
            }
            state.deleting_id = Some(booth.id.clone());
            state.error = None;
        }

        let creds = match self.guard.require_credentials() {
            Ok(creds) => creds,
            Err(_) => {
                self.state.write().await.deleting_id = None;
                return AdminFlow::LoginRequired;
            }
        };

        let result = self
            .client
            .admin_delete::<serde_json::Value>(&format!("/admin/booths/{}", booth.id), &creds)
            .await;

        match result {
            Ok(body) if body.get("success").and_then(|v| v.as_bool()).unwrap_or(false) => {
                self.state.write().await.deleting_id = None;
                self.refresh().await
            }
            Ok(_) => {
                let mut state = self.state.write().await;
                state.deleting_id = None;
                state.error = Some("Failed to delete booth.".into());
                AdminFlow::Completed
            }
            Err(ClientError::Unauthorized) => {
                self.state.write().await.deleting_id = None;
                AdminFlow::LoginRequired
            }
            Err(e) => {
                tracing::warn!(booth = booth.number, "Failed to delete booth: {}", e);
                let mut state = self.state.write().await;
                state.deleting_id = None;
                state.error = Some(e.user_message("Failed to delete booth."));
                AdminFlow::Completed
            }
        }
    }

    /// Upload a logo and merge the returned URL into the open form.
    ///
    /// A pure form mutation: the URL is persisted only by the surrounding
    /// save. On failure the prior value stays untouched.
    pub async fn upload_logo(&self, file: LogoFile) -> AdminFlow {
        {
            let mut state = self.state.write().await;
            state.error = None;
            state.uploading = true;
        }

        let creds = match self.guard.require_credentials() {
            Ok(creds) => creds,
            Err(_) => {
                self.state.write().await.uploading = false;
                return AdminFlow::LoginRequired;
            }
        };

        let result = self.client.upload_logo(&creds, file).await;

        let mut state = self.state.write().await;
        state.uploading = false;
        match result {
            Ok(UploadResponse {
                success: true,
                url: Some(url),
            }) => {
                if let Some(form) = state.form.as_mut() {
                    form.company_logo_url = url;
                }
                AdminFlow::Completed
            }
            Ok(_) => {
                state.error = Some("Failed to upload logo.".into());
                AdminFlow::Completed
            }
            Err(ClientError::Unauthorized) => AdminFlow::LoginRequired,
            Err(e) => {
                tracing::warn!("Logo upload failed: {}", e);
                state.error = Some(e.user_message("Failed to upload logo."));
                AdminFlow::Completed
            }
        }
    }
}
