mod content;
mod creator;
mod ids;

pub use self::content::{ContentItem, EditSnapshot};
pub use self::creator::Creator;
pub use self::ids::{ContentId, CreatorId};
