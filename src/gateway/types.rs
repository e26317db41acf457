//! Request payloads. Field names follow the catalog API.

use serde::Serialize;

use crate::model::CreatorId;

#[derive(Debug, Serialize)]
pub(super) struct CreateCreatorRequest<'a> {
    pub(super) nome: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateContentRequest<'a> {
    pub(super) titulo: &'a str,
    pub(super) varchar: &'a str,
    #[serde(rename = "criadorId")]
    pub(super) criador_id: CreatorId,
}

/// Body of `PUT api/conteudos/{id}`. Unset fields are omitted, never sent empty.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub varchar: Option<String>,
}

impl UpdateContentRequest {
    pub fn partial(title: Option<&str>, kind: Option<&str>) -> Self {
        fn present(v: Option<&str>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty()).map(str::to_string)
        }
        Self {
            titulo: present(title),
            varchar: present(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.titulo.is_none() && self.varchar.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_omitted() {
        let req = UpdateContentRequest::partial(Some(""), Some("audio"));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"varchar": "audio"})
        );
    }

    #[test]
    fn whitespace_counts_as_unset() {
        let req = UpdateContentRequest::partial(Some("  \t"), None);
        assert!(req.is_empty());
        assert_eq!(serde_json::to_string(&req).unwrap(), "{}");
    }

    #[test]
    fn values_are_sent_verbatim() {
        let req = UpdateContentRequest::partial(Some(" New title "), Some("video"));
        assert_eq!(req.titulo.as_deref(), Some(" New title "));
        assert_eq!(req.varchar.as_deref(), Some("video"));
    }

    #[test]
    fn create_content_uses_api_field_names() {
        let body = CreateContentRequest {
            titulo: "Demo",
            varchar: "video",
            criador_id: CreatorId(4),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"titulo": "Demo", "varchar": "video", "criadorId": 4})
        );
    }
}
