use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::RwLock;

use catalog::model::{ContentId, ContentItem, Creator, CreatorId};

#[path = "catalog_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "catalog_server/handlers_creators.rs"]
mod handlers_creators;
use self::handlers_creators::*;
#[path = "catalog_server/handlers_content.rs"]
mod handlers_content;
use self::handlers_content::*;
#[path = "catalog_server/handlers_files.rs"]
mod handlers_files;
use self::handlers_files::*;
#[path = "catalog_server/runtime.rs"]
mod runtime;

#[derive(Clone)]
struct AppState {
    /// Uploaded files live directly under this directory.
    data_dir: PathBuf,

    catalog: Arc<RwLock<Catalog>>,
}

#[derive(Debug, Default)]
struct Catalog {
    next_creator_id: i64,
    next_content_id: i64,
    creators: BTreeMap<CreatorId, Creator>,
    content: BTreeMap<ContentId, ContentItem>,
}

impl Catalog {
    fn alloc_creator_id(&mut self) -> CreatorId {
        self.next_creator_id += 1;
        CreatorId(self.next_creator_id)
    }

    fn alloc_content_id(&mut self) -> ContentId {
        self.next_content_id += 1;
        ContentId(self.next_content_id)
    }

    fn content_of(&self, creator: CreatorId) -> impl Iterator<Item = &ContentItem> {
        self.content.values().filter(move |c| c.owner == creator)
    }
}

#[derive(Debug, serde::Deserialize)]
struct NewCreator {
    nome: String,
}

#[derive(Debug, serde::Deserialize)]
struct NewContent {
    titulo: String,
    #[serde(default)]
    varchar: String,
    #[serde(rename = "criadorId")]
    criador_id: CreatorId,
}

#[derive(Debug, serde::Deserialize)]
struct ContentPatch {
    #[serde(default)]
    titulo: Option<String>,
    #[serde(default)]
    varchar: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
