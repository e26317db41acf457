//! In-memory mirror of the catalog: every creator plus the content of one
//! focused creator.
//!
//! The mirror only changes after the gateway confirms a mutation, and then
//! only by the smallest local edit that reflects it. A full refetch happens
//! on creator reload and on focus change. `Creator::content_count` is
//! adjusted here and re-derived from the server only by [`CatalogViewState::reload_creators`].

use std::path::Path;
use std::sync::mpsc::Receiver;

use crate::gateway::CatalogGateway;
use crate::model::{ContentId, ContentItem, Creator, CreatorId};

mod content;
mod creators;
mod editing;
mod error;
mod events;
mod forms;

pub use self::error::CatalogError;
pub use self::events::CatalogEvent;
pub use self::forms::PendingForms;

use self::events::Subscribers;

pub struct CatalogViewState {
    gateway: Box<dyn CatalogGateway>,
    creators: Vec<Creator>,
    focused: Option<CreatorId>,
    content: Vec<ContentItem>,
    forms: PendingForms,
    status: String,
    subscribers: Subscribers,
}

impl CatalogViewState {
    pub fn new(gateway: Box<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            creators: Vec::new(),
            focused: None,
            content: Vec::new(),
            forms: PendingForms::default(),
            status: String::new(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn gateway(&self) -> &dyn CatalogGateway {
        self.gateway.as_ref()
    }

    /// Swap the gateway handle (e.g. after the base address changed).
    /// The mirror is kept; callers reload when they want fresh data.
    pub fn replace_gateway(&mut self, gateway: Box<dyn CatalogGateway>) {
        self.gateway = gateway;
        let base_url = self.gateway.base_url().to_string();
        tracing::info!(%base_url, "gateway replaced");
        self.emit(CatalogEvent::GatewayReplaced {
            base_url: base_url.clone(),
        });
        self.set_status(format!("Base URL set to {}", base_url));
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn creator(&self, id: CreatorId) -> Option<&Creator> {
        self.creators.iter().find(|c| c.id == id)
    }

    pub fn focused(&self) -> Option<CreatorId> {
        self.focused
    }

    pub fn focused_creator(&self) -> Option<&Creator> {
        self.focused.and_then(|id| self.creator(id))
    }

    /// Content of the focused creator, in server order.
    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    pub fn content_item(&self, id: ContentId) -> Option<&ContentItem> {
        self.content.iter().find(|c| c.id == id)
    }

    pub fn forms(&self) -> &PendingForms {
        &self.forms
    }

    pub fn forms_mut(&mut self) -> &mut PendingForms {
        &mut self.forms
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn subscribe(&mut self) -> Receiver<CatalogEvent> {
        self.subscribers.subscribe()
    }

    /// Stored-file URL for a displayed item, for playback or download.
    pub fn download_url(&self, id: ContentId) -> Result<String, CatalogError> {
        let item = self
            .content_item(id)
            .ok_or(CatalogError::UnknownContent(id))?;
        match item.file_path.as_deref() {
            Some(path) if !path.is_empty() => Ok(self.gateway.download_url(path)),
            _ => Err(CatalogError::NoStoredFile(id)),
        }
    }

    /// Upload `path` for a displayed item, then refresh the focused list so
    /// the stored file shows up.
    pub fn upload_file(&mut self, id: ContentId, path: &Path) -> Result<(), CatalogError> {
        let result = self.try_upload_file(id, path);
        match result {
            Ok(()) => {
                if self.focused.is_some()
                    && let Err(err) = self.try_reload_content()
                {
                    self.set_status(format!(
                        "File uploaded, but reloading content failed: {}",
                        err
                    ));
                    return Ok(());
                }
                self.set_status("File uploaded.".to_string());
                Ok(())
            }
            Err(err) => self.fail("upload file", err),
        }
    }

    fn try_upload_file(&mut self, id: ContentId, path: &Path) -> Result<(), CatalogError> {
        if self.content_item(id).is_none() {
            return Err(CatalogError::UnknownContent(id));
        }
        self.set_status("Uploading file...".to_string());
        self.gateway.upload_file(id, path)?;
        tracing::info!(content = %id, path = %path.display(), "file uploaded");
        Ok(())
    }

    fn set_status(&mut self, status: String) {
        self.status = status.clone();
        self.emit(CatalogEvent::Status(status));
    }

    fn emit(&mut self, event: CatalogEvent) {
        self.subscribers.emit(event);
    }

    /// Record a failed operation. The mirror must not have been touched.
    fn fail<T>(&mut self, action: &str, err: CatalogError) -> Result<T, CatalogError> {
        tracing::warn!(action, error = %err, "catalog operation failed");
        self.set_status(format!("Failed to {}: {}", action, err));
        Err(err)
    }
}
