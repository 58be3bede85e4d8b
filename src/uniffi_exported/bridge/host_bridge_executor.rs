use crate::prelude::*;

/// The host side of the bridge, e.g. a Swift class wrapping the native
/// purchases SDK. Rust never talks to the SDK directly, it asks the executor
/// to carry out a [`BridgeCall`] and awaits the outcome.
#[uniffi::export(with_foreign)]
pub trait HostBridgeExecutor: Send + Sync {
    /// Rust tells the executor to perform `call`. Once the SDK has finished,
    /// the host MUST pass the outcome back exactly once using
    /// `listener_rust_side.notify_outcome`.
    ///
    /// Returning an error means the call was never started.
    fn execute_bridge_call(
        &self,
        call: BridgeCall,
        listener_rust_side: Arc<BridgeOutcomeListener>,
    ) -> Result<(), HostSideError>;

    /// Starts a streaming call, e.g. `configure`, after which the host keeps
    /// pushing [`HostEvent`]s to `listener_rust_side` for as long as the
    /// process lives.
    fn subscribe_to_host_events(
        &self,
        call: BridgeCall,
        listener_rust_side: Arc<HostEventListener>,
    ) -> Result<(), HostSideError>;
}
