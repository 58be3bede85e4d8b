use crate::prelude::*;
use std::sync::Weak;

/// Handed to the host when a streaming call is set up. Unlike
/// [`BridgeOutcomeListener`] the host may call `notify_event` any number of
/// times.
///
/// Holds the router weakly, so a host keeping this listener alive does not
/// keep the dropped [`Purchases`] alive with it.
#[derive(Object)]
pub struct HostEventListener {
    router: Weak<HostEventRouter>,
}

impl HostEventListener {
    pub(crate) fn new(router: &Arc<HostEventRouter>) -> Self {
        Self {
            router: Arc::downgrade(router),
        }
    }
}

#[export]
impl HostEventListener {
    pub fn notify_event(&self, event: HostEvent) {
        let Some(router) = self.router.upgrade() else {
            tracing::debug!(?event, "Purchases dropped, ignoring host event");
            return;
        };
        router.route(event)
    }
}
