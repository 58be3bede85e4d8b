use crate::prelude::*;

/// Handed to the host together with every [`BridgeCall`]. The host calls
/// `notify_outcome` once the SDK has finished the operation, either
/// successfully or with failure. This is effectively a callback.
#[derive(Object)]
pub struct BridgeOutcomeListener {
    outcome_sender: OneshotOutcomeSender<BridgeOutcome>,
}

impl BridgeOutcomeListener {
    pub(crate) fn new(sender: Sender<BridgeOutcome>) -> Self {
        Self {
            outcome_sender: OneshotOutcomeSender::new(sender),
        }
    }
}

#[export]
impl BridgeOutcomeListener {
    /// Called from the host side, inside its implementation of
    /// `execute_bridge_call` on a [`HostBridgeExecutor`], when the SDK has
    /// finished the operation. Only the first call has any effect.
    pub fn notify_outcome(&self, outcome: BridgeOutcome) {
        self.outcome_sender.notify_outcome(outcome)
    }
}
