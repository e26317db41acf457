use crate::model::{ContentId, ContentItem, CreatorId};

use super::{CatalogError, CatalogEvent, CatalogViewState};

impl CatalogViewState {
    /// Focus `id` and load its content. On failure the previous focus and
    /// list stay as they were.
    pub fn focus(&mut self, id: CreatorId) -> Result<usize, CatalogError> {
        let Some(name) = self.creator(id).map(|c| c.name.clone()) else {
            return self.fail("load content", CatalogError::UnknownCreator(id));
        };
        match self.gateway.list_content_by_creator(id) {
            Ok(items) => {
                if self.focused != Some(id) {
                    self.focused = Some(id);
                    self.emit(CatalogEvent::FocusChanged(Some(id)));
                }
                Ok(self.install_content(id, &name, items))
            }
            Err(err) => self.fail("load content", err.into()),
        }
    }

    pub fn clear_focus(&mut self) {
        if self.focused.is_some() {
            self.drop_focus();
        }
    }

    /// Refetch the focused creator's content. Without a focus there is
    /// nothing to fetch.
    pub fn reload_content(&mut self) -> Result<usize, CatalogError> {
        if self.focused.is_none() {
            self.set_status("No creator selected.".to_string());
            return Ok(0);
        }
        match self.try_reload_content() {
            Ok(n) => Ok(n),
            Err(err) => self.fail("load content", err),
        }
    }

    pub(super) fn try_reload_content(&mut self) -> Result<usize, CatalogError> {
        let id = self.focused.ok_or(CatalogError::NoFocus)?;
        let name = self
            .creator(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string());
        let items = self.gateway.list_content_by_creator(id)?;
        Ok(self.install_content(id, &name, items))
    }

    fn install_content(&mut self, id: CreatorId, name: &str, items: Vec<ContentItem>) -> usize {
        let n = items.len();
        self.content = items;
        self.emit(CatalogEvent::ContentReloaded {
            creator: id,
            count: n,
        });
        self.set_status(format!("Loaded {} content items for {}.", n, name));
        n
    }

    /// Create content for `target`, or the focused creator when `None`.
    pub fn create_content(
        &mut self,
        title: &str,
        kind: &str,
        target: Option<CreatorId>,
    ) -> Result<ContentItem, CatalogError> {
        match self.try_create_content(title, kind, target) {
            Ok((item, owner_name)) => {
                self.set_status(format!("Content added for {}.", owner_name));
                Ok(item)
            }
            Err(err) => self.fail("add content", err),
        }
    }

    fn try_create_content(
        &mut self,
        title: &str,
        kind: &str,
        target: Option<CreatorId>,
    ) -> Result<(ContentItem, String), CatalogError> {
        let owner = target.or(self.focused).ok_or(CatalogError::NoFocus)?;
        if title.trim().is_empty() {
            return Err(CatalogError::Blank("title"));
        }
        if kind.trim().is_empty() {
            return Err(CatalogError::Blank("kind"));
        }

        let created = self.gateway.create_content(title, kind, owner)?;
        tracing::info!(content = %created.id, creator = %owner, "content added");

        // The visible list only ever holds the focused creator's items.
        if self.focused == Some(owner) {
            self.content.push(created.clone());
            self.emit(CatalogEvent::ContentAdded(created.id));
        }
        self.adjust_content_count(owner, 1);

        let owner_name = self
            .creator(owner)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("creator {}", owner));
        Ok((created, owner_name))
    }

    pub fn delete_content(&mut self, id: ContentId) -> Result<(), CatalogError> {
        match self.try_delete_content(id) {
            Ok(()) => {
                self.set_status("Content removed.".to_string());
                Ok(())
            }
            Err(err) => self.fail("remove content", err),
        }
    }

    fn try_delete_content(&mut self, id: ContentId) -> Result<(), CatalogError> {
        let owner = self
            .content_item(id)
            .map(|c| c.owner)
            .ok_or(CatalogError::UnknownContent(id))?;
        self.gateway.delete_content(id)?;
        tracing::info!(content = %id, creator = %owner, "content removed");

        self.content.retain(|c| c.id != id);
        self.emit(CatalogEvent::ContentRemoved(id));
        self.adjust_content_count(owner, -1);
        Ok(())
    }
}
