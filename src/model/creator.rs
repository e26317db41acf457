use serde::{Deserialize, Serialize};

use super::CreatorId;

/// A catalog creator as mirrored by the client.
///
/// `content_count` is maintained locally: it is seeded on a full reload and
/// adjusted after every confirmed content create/delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "contagemConteudos", default)]
    pub content_count: u32,
}

impl Creator {
    pub fn with_content_count(&self, content_count: u32) -> Self {
        Self {
            content_count,
            ..self.clone()
        }
    }
}
