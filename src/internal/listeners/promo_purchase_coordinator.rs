use crate::prelude::*;

/// Fans out promotional purchases initiated by the host to every registered
/// [`PromotionalPurchaseListener`], handing each the same
/// [`DeferredPromotionalPurchase`] so the purchase is resumed at most once.
pub(crate) struct PromoPurchaseCoordinator {
    dispatcher: Arc<BridgeDispatcher>,
    listeners: ListenerRegistry<dyn PromotionalPurchaseListener>,
}

impl PromoPurchaseCoordinator {
    pub(crate) fn new(dispatcher: Arc<BridgeDispatcher>) -> Self {
        Self {
            dispatcher,
            listeners: ListenerRegistry::default(),
        }
    }

    pub(crate) fn add_listener(
        &self,
        listener: Arc<dyn PromotionalPurchaseListener>,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    pub(crate) fn remove_listener(&self, listener: &Arc<dyn PromotionalPurchaseListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub(crate) fn remove_listener_by_id(&self, id: ListenerId) -> bool {
        self.listeners.remove_by_id(id)
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notifies the listeners registered right now, in registration order.
    /// Listeners added while notifying are not told about this purchase.
    pub(crate) fn on_promotional_purchase_initiated(
        &self,
        token: i64,
    ) -> Arc<DeferredPromotionalPurchase> {
        let deferred_purchase = Arc::new(DeferredPromotionalPurchase::new(
            token,
            self.dispatcher.clone(),
        ));
        let listeners = self.listeners.snapshot();
        if listeners.is_empty() {
            tracing::info!(
                token,
                "Promotional purchase initiated without listeners, it will not be made"
            );
        } else {
            tracing::debug!(token, listeners = listeners.len(), "Promotional purchase initiated");
        }
        for listener in listeners {
            listener.on_promotional_purchase_initiated(deferred_purchase.clone());
        }
        deferred_purchase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingExecutor {
        calls: Mutex<Vec<BridgeCall>>,
    }

    impl HostBridgeExecutor for RecordingExecutor {
        fn execute_bridge_call(
            &self,
            call: BridgeCall,
            listener_rust_side: Arc<BridgeOutcomeListener>,
        ) -> Result<(), HostSideError> {
            self.calls.lock().unwrap().push(call);
            listener_rust_side.notify_outcome(BridgeOutcome::Success {
                value_json: "".to_owned(),
            });
            Ok(())
        }

        fn subscribe_to_host_events(
            &self,
            call: BridgeCall,
            _listener_rust_side: Arc<HostEventListener>,
        ) -> Result<(), HostSideError> {
            self.calls.lock().unwrap().push(call);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CollectingListener {
        received: Mutex<Vec<Arc<DeferredPromotionalPurchase>>>,
    }

    impl PromotionalPurchaseListener for CollectingListener {
        fn on_promotional_purchase_initiated(
            &self,
            deferred_purchase: Arc<DeferredPromotionalPurchase>,
        ) {
            self.received.lock().unwrap().push(deferred_purchase);
        }
    }

    impl CollectingListener {
        fn count(&self) -> usize {
            self.received.lock().unwrap().len()
        }
    }

    fn sut() -> (Arc<RecordingExecutor>, PromoPurchaseCoordinator) {
        let executor = Arc::new(RecordingExecutor::default());
        let dispatcher = Arc::new(BridgeDispatcher::new(executor.clone()));
        (executor, PromoPurchaseCoordinator::new(dispatcher))
    }

    #[tokio::test]
    async fn every_listener_gets_same_token_once() {
        let (_, sut) = sut();
        let listeners: Vec<Arc<CollectingListener>> =
            (0..3).map(|_| Arc::new(CollectingListener::default())).collect();
        for listener in &listeners {
            sut.add_listener(listener.clone());
        }
        sut.on_promotional_purchase_initiated(7);
        for listener in &listeners {
            let received = listener.received.lock().unwrap();
            assert_eq!(received.len(), 1);
            assert_eq!(received[0].token(), 7);
        }
    }

    #[tokio::test]
    async fn resume_sends_one_bridge_call_with_token() {
        let (executor, sut) = sut();
        let listener = Arc::new(CollectingListener::default());
        sut.add_listener(listener.clone());
        let deferred = sut.on_promotional_purchase_initiated(7);

        assert_eq!(deferred.resume().await, Ok(true));
        assert_eq!(deferred.resume().await, Ok(false));
        assert!(deferred.is_resumed());

        let calls = executor.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "resumeDeferredPurchase");
        assert_eq!(calls[0].arguments().unwrap(), vec![json!(7)]);
    }

    #[tokio::test]
    async fn capability_is_shared_between_listeners() {
        let (executor, sut) = sut();
        let first = Arc::new(CollectingListener::default());
        let second = Arc::new(CollectingListener::default());
        sut.add_listener(first.clone());
        sut.add_listener(second.clone());
        sut.on_promotional_purchase_initiated(3);

        let from_first = first.received.lock().unwrap()[0].clone();
        let from_second = second.received.lock().unwrap()[0].clone();
        assert_eq!(from_first.resume().await, Ok(true));
        assert_eq!(from_second.resume().await, Ok(false));
        assert_eq!(executor.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removed_listener_is_not_notified() {
        let (_, sut) = sut();
        let listener = Arc::new(CollectingListener::default());
        let as_dyn: Arc<dyn PromotionalPurchaseListener> = listener.clone();
        sut.add_listener(as_dyn.clone());
        sut.on_promotional_purchase_initiated(1);
        assert!(sut.remove_listener(&as_dyn));
        assert!(!sut.remove_listener(&as_dyn));
        sut.on_promotional_purchase_initiated(2);
        assert_eq!(listener.count(), 1);
    }

    #[tokio::test]
    async fn abandoned_purchase_makes_no_bridge_call() {
        let (executor, sut) = sut();
        let deferred = sut.on_promotional_purchase_initiated(9);
        assert!(!deferred.is_resumed());
        drop(deferred);
        assert!(executor.calls.lock().unwrap().is_empty());
    }

    /// Registers another listener while being notified.
    struct RegisteringListener {
        coordinator: Arc<PromoPurchaseCoordinator>,
        late: Arc<CollectingListener>,
    }

    impl PromotionalPurchaseListener for RegisteringListener {
        fn on_promotional_purchase_initiated(
            &self,
            _deferred_purchase: Arc<DeferredPromotionalPurchase>,
        ) {
            self.coordinator.add_listener(self.late.clone());
        }
    }

    #[tokio::test]
    async fn listener_added_during_fan_out_misses_that_event() {
        let executor = Arc::new(RecordingExecutor::default());
        let dispatcher = Arc::new(BridgeDispatcher::new(executor));
        let coordinator = Arc::new(PromoPurchaseCoordinator::new(dispatcher));
        let late = Arc::new(CollectingListener::default());
        coordinator.add_listener(Arc::new(RegisteringListener {
            coordinator: coordinator.clone(),
            late: late.clone(),
        }));

        coordinator.on_promotional_purchase_initiated(1);
        assert_eq!(late.count(), 0);
        assert_eq!(coordinator.listener_count(), 2);

        coordinator.on_promotional_purchase_initiated(2);
        assert_eq!(late.count(), 1);
    }
}
