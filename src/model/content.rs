use serde::{Deserialize, Serialize};

use super::{ContentId, CreatorId};

/// Pre-edit values captured when an item enters edit mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSnapshot {
    pub title: String,
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,

    #[serde(rename = "titulo")]
    pub title: String,

    /// Free-text classification ("video", "audio", ...). The API calls it `varchar`.
    #[serde(rename = "varchar", default)]
    pub kind: String,

    #[serde(rename = "arquivoPath", default)]
    pub file_path: Option<String>,

    #[serde(rename = "contentType", default)]
    pub media_type: Option<String>,

    #[serde(rename = "criadorId")]
    pub owner: CreatorId,

    /// Local UI state only. `Some` while the item is being edited.
    #[serde(skip)]
    pub edit: Option<EditSnapshot>,
}

impl ContentItem {
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn has_file(&self) -> bool {
        self.file_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Enter edit mode, snapshotting the current title and kind.
    pub fn begin_edit(&self) -> Self {
        Self {
            edit: Some(EditSnapshot {
                title: self.title.clone(),
                kind: self.kind.clone(),
            }),
            ..self.clone()
        }
    }

    /// Replace the in-progress title/kind. `None` keeps the current value.
    pub fn with_draft(&self, title: Option<&str>, kind: Option<&str>) -> Self {
        Self {
            title: title.map_or_else(|| self.title.clone(), str::to_string),
            kind: kind.map_or_else(|| self.kind.clone(), str::to_string),
            ..self.clone()
        }
    }

    /// Leave edit mode restoring the snapshot. Items not in edit mode are returned unchanged.
    pub fn cancel_edit(&self) -> Self {
        match &self.edit {
            Some(snap) => Self {
                title: snap.title.clone(),
                kind: snap.kind.clone(),
                edit: None,
                ..self.clone()
            },
            None => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ContentItem {
        ContentItem {
            id: ContentId(1),
            title: "Demo".to_string(),
            kind: "video".to_string(),
            file_path: None,
            media_type: None,
            owner: CreatorId(7),
            edit: None,
        }
    }

    #[test]
    fn cancel_restores_snapshot_exactly() {
        let editing = item().begin_edit().with_draft(Some("Démo ✨ "), Some(""));
        assert!(editing.is_editing());
        assert_eq!(editing.title, "Démo ✨ ");

        let restored = editing.cancel_edit();
        assert!(!restored.is_editing());
        assert_eq!(restored, item());
    }

    #[test]
    fn parses_api_payload() {
        let v: ContentItem = serde_json::from_str(
            r#"{"id":3,"titulo":"Song","varchar":"audio","arquivoPath":"3_song.mp3","contentType":"audio/mp3","criadorId":2}"#,
        )
        .unwrap();
        assert_eq!(v.id, ContentId(3));
        assert_eq!(v.kind, "audio");
        assert_eq!(v.file_path.as_deref(), Some("3_song.mp3"));
        assert_eq!(v.owner, CreatorId(2));
        assert!(!v.is_editing());
        assert!(v.has_file());
    }

    #[test]
    fn edit_state_is_never_serialized() {
        let json = serde_json::to_value(item().begin_edit()).unwrap();
        assert!(json.get("edit").is_none());
        assert_eq!(json["titulo"], "Demo");
    }
}
