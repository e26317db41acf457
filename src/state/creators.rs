use crate::model::{Creator, CreatorId};

use super::{CatalogError, CatalogEvent, CatalogViewState};

impl CatalogViewState {
    /// Replace the creator list with the server's, seeding every
    /// `content_count` from one content listing per creator.
    pub fn reload_creators(&mut self) -> Result<usize, CatalogError> {
        match self.try_reload_creators() {
            Ok(n) => {
                self.set_status(format!("Loaded {} creators.", n));
                Ok(n)
            }
            Err(err) => self.fail("load creators", err),
        }
    }

    fn try_reload_creators(&mut self) -> Result<usize, CatalogError> {
        let listed = self.gateway.list_creators()?;
        let mut creators = Vec::with_capacity(listed.len());
        for c in listed {
            let n = self.gateway.count_content_by_creator(c.id)?;
            creators.push(c.with_content_count(u32::try_from(n).unwrap_or(u32::MAX)));
        }

        let n = creators.len();
        self.creators = creators;
        self.emit(CatalogEvent::CreatorsReloaded { count: n });

        if let Some(id) = self.focused
            && self.creator(id).is_none()
        {
            self.drop_focus();
        }
        Ok(n)
    }

    pub fn create_creator(&mut self, name: &str) -> Result<Creator, CatalogError> {
        match self.try_create_creator(name) {
            Ok(c) => {
                self.set_status("Creator added.".to_string());
                Ok(c)
            }
            Err(err) => self.fail("add creator", err),
        }
    }

    fn try_create_creator(&mut self, name: &str) -> Result<Creator, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::Blank("creator name"));
        }
        let created = self.gateway.create_creator(name)?.with_content_count(0);
        tracing::info!(creator = %created.id, "creator added");
        self.creators.push(created.clone());
        self.emit(CatalogEvent::CreatorAdded(created.id));
        Ok(created)
    }

    pub fn delete_creator(&mut self, id: CreatorId) -> Result<(), CatalogError> {
        match self.try_delete_creator(id) {
            Ok(()) => {
                self.set_status("Creator removed.".to_string());
                Ok(())
            }
            Err(err) => self.fail("remove creator", err),
        }
    }

    fn try_delete_creator(&mut self, id: CreatorId) -> Result<(), CatalogError> {
        if self.creator(id).is_none() {
            return Err(CatalogError::UnknownCreator(id));
        }
        self.gateway.delete_creator(id)?;
        tracing::info!(creator = %id, "creator removed");
        self.creators.retain(|c| c.id != id);
        self.emit(CatalogEvent::CreatorRemoved(id));
        if self.focused == Some(id) {
            self.drop_focus();
        }
        Ok(())
    }

    /// Apply `delta` to a loaded creator's count. Creators that are not
    /// loaded are skipped.
    pub(super) fn adjust_content_count(&mut self, id: CreatorId, delta: i64) {
        let Some(pos) = self.creators.iter().position(|c| c.id == id) else {
            tracing::debug!(creator = %id, "owner not loaded; count unchanged");
            return;
        };
        let current = i64::from(self.creators[pos].content_count);
        let next = u32::try_from((current + delta).max(0)).unwrap_or(u32::MAX);
        self.creators[pos] = self.creators[pos].with_content_count(next);
        self.emit(CatalogEvent::ContentCountChanged {
            creator: id,
            count: next,
        });
    }

    pub(super) fn drop_focus(&mut self) {
        self.focused = None;
        self.content.clear();
        self.emit(CatalogEvent::FocusChanged(None));
    }
}
