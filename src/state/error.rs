use crate::gateway::GatewayError;
use crate::model::{ContentId, CreatorId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("no creator selected")]
    NoFocus,

    #[error("creator {0} is not loaded")]
    UnknownCreator(CreatorId),

    #[error("content {0} is not in the displayed list")]
    UnknownContent(ContentId),

    #[error("content {0} is not being edited")]
    NotEditing(ContentId),

    #[error("no file selected")]
    NoFileSelected,

    #[error("content {0} has no stored file")]
    NoStoredFile(ContentId),
}
