//! Per-item edit lifecycle: `Viewing -> Editing -> Viewing`.
//!
//! Entering, drafting and cancelling are local; only commit talks to the
//! server.

use crate::model::{ContentId, ContentItem};

use super::{CatalogError, CatalogEvent, CatalogViewState};

impl CatalogViewState {
    pub fn begin_edit(&mut self, id: ContentId) -> Result<(), CatalogError> {
        let Some(pos) = self.position(id) else {
            return self.fail("edit content", CatalogError::UnknownContent(id));
        };
        // Re-entering keeps the original snapshot.
        if !self.content[pos].is_editing() {
            self.content[pos] = self.content[pos].begin_edit();
            self.emit(CatalogEvent::EditStarted(id));
        }
        let title = self.content[pos].title.clone();
        self.set_status(format!("Editing: {}", title));
        Ok(())
    }

    /// Change the in-progress title and/or kind of an item being edited.
    pub fn edit_draft(
        &mut self,
        id: ContentId,
        title: Option<&str>,
        kind: Option<&str>,
    ) -> Result<(), CatalogError> {
        let pos = match self.editing_position(id) {
            Ok(pos) => pos,
            Err(err) => return self.fail("edit content", err),
        };
        self.content[pos] = self.content[pos].with_draft(title, kind);
        self.emit(CatalogEvent::EditDraftChanged(id));
        Ok(())
    }

    pub fn cancel_edit(&mut self, id: ContentId) -> Result<(), CatalogError> {
        let pos = match self.editing_position(id) {
            Ok(pos) => pos,
            Err(err) => return self.fail("cancel edit", err),
        };
        self.content[pos] = self.content[pos].cancel_edit();
        self.emit(CatalogEvent::EditCancelled(id));
        self.set_status("Edit cancelled.".to_string());
        Ok(())
    }

    /// Send the in-progress values. On success the row is replaced in place
    /// with the server's version; on failure it stays in edit mode untouched.
    pub fn commit_edit(&mut self, id: ContentId) -> Result<ContentItem, CatalogError> {
        match self.try_commit_edit(id) {
            Ok(item) => {
                self.set_status("Content updated.".to_string());
                Ok(item)
            }
            Err(err) => self.fail("update content", err),
        }
    }

    fn try_commit_edit(&mut self, id: ContentId) -> Result<ContentItem, CatalogError> {
        let pos = self.editing_position(id)?;
        let (title, kind) = {
            let item = &self.content[pos];
            (item.title.clone(), item.kind.clone())
        };
        let updated = self.gateway.update_content(id, Some(&title), Some(&kind))?;
        tracing::info!(content = %id, "content updated");

        self.content[pos] = updated.clone();
        self.emit(CatalogEvent::ContentReplaced { id, index: pos });
        Ok(updated)
    }

    fn position(&self, id: ContentId) -> Option<usize> {
        self.content.iter().position(|c| c.id == id)
    }

    fn editing_position(&self, id: ContentId) -> Result<usize, CatalogError> {
        let pos = self.position(id).ok_or(CatalogError::UnknownContent(id))?;
        if !self.content[pos].is_editing() {
            return Err(CatalogError::NotEditing(id));
        }
        Ok(pos)
    }
}
