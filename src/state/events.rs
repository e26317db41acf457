use std::sync::mpsc::{self, Receiver, Sender};

use crate::model::{ContentId, CreatorId};

/// Fired by [`super::CatalogViewState`] after each accepted change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    CreatorsReloaded { count: usize },
    CreatorAdded(CreatorId),
    CreatorRemoved(CreatorId),
    ContentCountChanged { creator: CreatorId, count: u32 },
    FocusChanged(Option<CreatorId>),
    ContentReloaded { creator: CreatorId, count: usize },
    ContentAdded(ContentId),
    ContentRemoved(ContentId),
    ContentReplaced { id: ContentId, index: usize },
    EditStarted(ContentId),
    EditDraftChanged(ContentId),
    EditCancelled(ContentId),
    GatewayReplaced { base_url: String },
    Status(String),
}

#[derive(Default)]
pub(super) struct Subscribers {
    pub(super) senders: Vec<Sender<CatalogEvent>>,
}

impl Subscribers {
    pub(super) fn subscribe(&mut self) -> Receiver<CatalogEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver to every live receiver; dropped receivers are forgotten.
    pub(super) fn emit(&mut self, event: CatalogEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
