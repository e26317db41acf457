use std::path::PathBuf;

use crate::model::{ContentItem, Creator, CreatorId};

use super::{CatalogError, CatalogViewState};

/// Text the user has typed but not yet submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingForms {
    pub creator_name: String,
    pub content_title: String,
    pub content_kind: String,
    /// Explicit owner for new content; the focused creator is used when unset.
    pub content_target: Option<CreatorId>,
    pub selected_file: Option<PathBuf>,
}

impl CatalogViewState {
    pub fn submit_creator_form(&mut self) -> Result<Creator, CatalogError> {
        let name = self.forms.creator_name.clone();
        let created = self.create_creator(&name)?;
        self.forms.creator_name.clear();
        Ok(created)
    }

    pub fn submit_content_form(&mut self) -> Result<ContentItem, CatalogError> {
        let title = self.forms.content_title.clone();
        let kind = self.forms.content_kind.clone();
        let target = self.forms.content_target;
        let created = self.create_content(&title, &kind, target)?;
        self.forms.content_title.clear();
        self.forms.content_kind.clear();
        self.forms.content_target = None;
        Ok(created)
    }

    pub fn upload_selected(&mut self, id: crate::model::ContentId) -> Result<(), CatalogError> {
        let Some(path) = self.forms.selected_file.clone() else {
            return self.fail("upload file", CatalogError::NoFileSelected);
        };
        self.upload_file(id, &path)?;
        self.forms.selected_file = None;
        Ok(())
    }
}
