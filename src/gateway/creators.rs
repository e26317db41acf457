use crate::model::{ContentItem, Creator, CreatorId};

use super::types::CreateCreatorRequest;
use super::{GatewayError, RemoteCatalogGateway};

impl RemoteCatalogGateway {
    pub(super) fn get_creators(&self) -> Result<Vec<Creator>, GatewayError> {
        let resp = self.send(self.client.get(self.url("api/criadores")), "list creators")?;
        let resp = self.ensure_ok(resp, "list creators")?;
        self.decode(resp, "list creators")
    }

    pub(super) fn post_creator(&self, name: &str) -> Result<Creator, GatewayError> {
        let req = self
            .client
            .post(self.url("api/criadores"))
            .json(&CreateCreatorRequest { nome: name });
        let resp = self.send(req, "create creator")?;
        let resp = self.ensure_ok(resp, "create creator")?;
        self.decode(resp, "create creator")
    }

    pub(super) fn remove_creator(&self, id: CreatorId) -> Result<(), GatewayError> {
        let path = format!("api/criadores/{}", id);
        let req = self.client.delete(self.url(&path));
        let resp = self.send(req, "delete creator")?;
        self.ensure_deleted(resp, "delete creator")
    }

    pub(super) fn get_creator_content(
        &self,
        id: CreatorId,
    ) -> Result<Vec<ContentItem>, GatewayError> {
        let req = self
            .client
            .get(self.url(&format!("api/criadores/{}/conteudos", id)));
        let resp = self.send(req, "list content")?;
        let resp = self.ensure_ok(resp, "list content")?;
        self.decode(resp, "list content")
    }
}
