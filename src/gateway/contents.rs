use std::path::Path;

use crate::model::{ContentId, ContentItem, Creator, CreatorId};

use super::types::{CreateContentRequest, UpdateContentRequest};
use super::{CatalogGateway, GatewayError, RemoteCatalogGateway};

impl RemoteCatalogGateway {
    fn post_content(
        &self,
        title: &str,
        kind: &str,
        creator: CreatorId,
    ) -> Result<ContentItem, GatewayError> {
        let req = self
            .client
            .post(self.url("api/conteudos"))
            .json(&CreateContentRequest {
                titulo: title,
                varchar: kind,
                criador_id: creator,
            });
        let resp = self.send(req, "create content")?;
        let resp = self.ensure_ok(resp, "create content")?;
        self.decode(resp, "create content")
    }

    fn put_content(
        &self,
        id: ContentId,
        body: &UpdateContentRequest,
    ) -> Result<ContentItem, GatewayError> {
        let req = self
            .client
            .put(self.url(&format!("api/conteudos/{}", id)))
            .json(body);
        let resp = self.send(req, "update content")?;
        let resp = self.ensure_ok(resp, "update content")?;
        self.decode(resp, "update content")
    }

    fn remove_content(&self, id: ContentId) -> Result<(), GatewayError> {
        let path = format!("api/conteudos/{}", id);
        let req = self.client.delete(self.url(&path));
        let resp = self.send(req, "delete content")?;
        self.ensure_deleted(resp, "delete content")
    }
}

impl CatalogGateway for RemoteCatalogGateway {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_creators(&self) -> Result<Vec<Creator>, GatewayError> {
        self.get_creators()
    }

    fn create_creator(&self, name: &str) -> Result<Creator, GatewayError> {
        self.post_creator(name)
    }

    fn delete_creator(&self, id: CreatorId) -> Result<(), GatewayError> {
        self.remove_creator(id)
    }

    fn list_content_by_creator(&self, id: CreatorId) -> Result<Vec<ContentItem>, GatewayError> {
        self.get_creator_content(id)
    }

    fn create_content(
        &self,
        title: &str,
        kind: &str,
        creator: CreatorId,
    ) -> Result<ContentItem, GatewayError> {
        self.post_content(title, kind, creator)
    }

    fn update_content(
        &self,
        id: ContentId,
        title: Option<&str>,
        kind: Option<&str>,
    ) -> Result<ContentItem, GatewayError> {
        self.put_content(id, &UpdateContentRequest::partial(title, kind))
    }

    fn delete_content(&self, id: ContentId) -> Result<(), GatewayError> {
        self.remove_content(id)
    }

    fn upload_file(&self, id: ContentId, path: &Path) -> Result<(), GatewayError> {
        self.post_file(id, path)
    }
}
