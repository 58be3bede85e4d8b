use crate::prelude::*;

/// The single chokepoint between Rust and the host: every operation becomes
/// exactly one [`BridgeCall`] passed to the [`HostBridgeExecutor`], and
/// exactly one outcome is routed back to the caller.
///
/// There is no timeout nor retry, if the host keeps the listener alive but
/// never notifies it the returned future never resolves.
pub(crate) struct BridgeDispatcher {
    /// Executor on the host side, receiving calls from us (Rust side),
    /// and passing the outcome back to us (Rust side).
    executor: Arc<dyn HostBridgeExecutor>,
}

impl BridgeDispatcher {
    pub(crate) fn new(executor: Arc<dyn HostBridgeExecutor>) -> Self {
        Self { executor }
    }

    /// Carries out `operation` on the host, any failure payload is normalized
    /// into [`PurchasesError::Bridge`].
    pub(crate) async fn dispatch(&self, operation: Operation) -> Result<Value, PurchasesError> {
        match self.outcome_of(operation).await? {
            Ok(value_json) => value_from(&value_json),
            Err(payload_json) => Err(bridge_failure(&payload_json)),
        }
    }

    /// Like [`Self::dispatch`] but for purchases, where the failure payload
    /// carries a user cancellation flag which is lifted out into
    /// [`PurchasesError::PurchaseFailed`].
    pub(crate) async fn dispatch_purchase(
        &self,
        operation: Operation,
    ) -> Result<Value, PurchasesError> {
        match self.outcome_of(operation).await? {
            Ok(value_json) => value_from(&value_json),
            Err(payload_json) => Err(purchase_failure(&payload_json)),
        }
    }

    /// Dispatches `operation` and decodes the success value into `T`.
    pub(crate) async fn dispatch_decoding<T>(
        &self,
        operation: Operation,
    ) -> Result<T, PurchasesError>
    where
        T: DeserializeOwned,
    {
        let value = self.dispatch(operation).await?;
        model_from_value(value)
    }

    /// Dispatches an operation which has no result.
    pub(crate) async fn dispatch_unit(&self, operation: Operation) -> Result<(), PurchasesError> {
        self.dispatch(operation).await.map(|_| ())
    }

    /// Starts a streaming call, the host pushes events to `listener` from now on.
    pub(crate) fn subscribe(
        &self,
        operation: Operation,
        listener: Arc<HostEventListener>,
    ) -> Result<(), PurchasesError> {
        let call = operation.into_bridge_call()?;
        tracing::debug!(method = %call.method, "Subscribing to host events");
        self.executor
            .subscribe_to_host_events(call, listener)
            .map_err(PurchasesError::from)
    }

    async fn outcome_of(
        &self,
        operation: Operation,
    ) -> Result<Result<String, String>, PurchasesError> {
        let call = operation.into_bridge_call()?;
        let method = call.method.clone();

        // Underlying tokio channel used to get the outcome from the host back to Rust.
        let (sender, receiver) = channel::<BridgeOutcome>();

        // Our callback we pass to the host
        let listener = BridgeOutcomeListener::new(sender);

        tracing::debug!(
            method = %method,
            arguments = %call.arguments_json,
            "Dispatching bridge call"
        );
        self.executor
            .execute_bridge_call(call, listener.into())
            .map_err(PurchasesError::from)?;

        // Await the host calling `listener.notify_outcome`
        let outcome = receiver
            .await
            .map_err(|_| RustSideError::FailedToReceiveOutcomeFromHost)?;

        tracing::debug!(method = %method, succeeded = outcome.is_success(), "Bridge call finished");
        Ok(outcome.into())
    }
}

/// An empty success payload means the operation had no result.
fn value_from(value_json: &str) -> Result<Value, PurchasesError> {
    if value_json.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(value_json).map_err(|e| {
        RustSideError::UnableToDeserializeBridgeValue {
            type_name: std::any::type_name::<Value>().to_owned(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub(crate) fn model_from_value<T>(value: Value) -> Result<T, PurchasesError>
where
    T: DeserializeOwned,
{
    serde_json::from_value::<T>(value).map_err(|e| {
        RustSideError::UnableToDeserializeBridgeValue {
            type_name: std::any::type_name::<T>().to_owned(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers every call with a fixed outcome, or never when `None`.
    struct ScriptedExecutor {
        outcome: Option<BridgeOutcome>,
        calls: Mutex<Vec<BridgeCall>>,
        parked: Mutex<Vec<Arc<BridgeOutcomeListener>>>,
    }

    impl ScriptedExecutor {
        fn new(outcome: Option<BridgeOutcome>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
                parked: Mutex::new(Vec::new()),
            })
        }
    }

    impl HostBridgeExecutor for ScriptedExecutor {
        fn execute_bridge_call(
            &self,
            call: BridgeCall,
            listener_rust_side: Arc<BridgeOutcomeListener>,
        ) -> Result<(), HostSideError> {
            self.calls.lock().unwrap().push(call);
            match &self.outcome {
                Some(outcome) => listener_rust_side.notify_outcome(outcome.clone()),
                None => self.parked.lock().unwrap().push(listener_rust_side),
            }
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

    struct RefusingExecutor;

    impl HostBridgeExecutor for RefusingExecutor {
        fn execute_bridge_call(
            &self,
            _call: BridgeCall,
            _listener_rust_side: Arc<BridgeOutcomeListener>,
        ) -> Result<(), HostSideError> {
            Err(HostSideError::ExecutorUnavailable {
                reason: "not ready".to_owned(),
            })
        }

        fn subscribe_to_host_events(
            &self,
            _call: BridgeCall,
            _listener_rust_side: Arc<HostEventListener>,
        ) -> Result<(), HostSideError> {
            Err(HostSideError::ExecutorUnavailable {
                reason: "not ready".to_owned(),
            })
        }
    }

    /// Drops the listener on the floor without notifying it.
    struct ForgetfulExecutor;

    impl HostBridgeExecutor for ForgetfulExecutor {
        fn execute_bridge_call(
            &self,
            _call: BridgeCall,
            _listener_rust_side: Arc<BridgeOutcomeListener>,
        ) -> Result<(), HostSideError> {
            Ok(())
        }

        fn subscribe_to_host_events(
            &self,
            _call: BridgeCall,
            _listener_rust_side: Arc<HostEventListener>,
        ) -> Result<(), HostSideError> {
            Ok(())
        }
    }

    const CANCELLED: &str =
        r#"{"code":2,"message":"x","readableErrorCode":"PURCHASE_CANCELLED","userCancelled":true}"#;

    fn cancelled_error() -> BridgeError {
        BridgeError {
            code: 2,
            message: "x".to_owned(),
            readable_error_code: "PURCHASE_CANCELLED".to_owned(),
            underlying_error_message: None,
        }
    }

    #[tokio::test]
    async fn success_value_is_decoded() {
        let executor = ScriptedExecutor::new(Some(BridgeOutcome::Success {
            value_json: "true".to_owned(),
        }));
        let sut = BridgeDispatcher::new(executor.clone());
        let value: bool = sut
            .dispatch_decoding(Operation::new(OperationKind::IsAnonymous))
            .await
            .unwrap();
        assert!(value);
        assert_eq!(executor.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_success_value_is_null() {
        let executor = ScriptedExecutor::new(Some(BridgeOutcome::Success {
            value_json: "".to_owned(),
        }));
        let sut = BridgeDispatcher::new(executor);
        let value = sut
            .dispatch(Operation::new(OperationKind::SyncPurchases))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn undecodable_success_value_names_type() {
        let executor = ScriptedExecutor::new(Some(BridgeOutcome::Success {
            value_json: r#""not a bool""#.to_owned(),
        }));
        let sut = BridgeDispatcher::new(executor);
        let error = sut
            .dispatch_decoding::<bool>(Operation::new(OperationKind::IsAnonymous))
            .await
            .unwrap_err();
        match error {
            PurchasesError::FromRust {
                error: RustSideError::UnableToDeserializeBridgeValue { type_name, .. },
            } => assert_eq!(type_name, "bool"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn purchase_failure_splits_cancellation() {
        let executor = ScriptedExecutor::new(Some(BridgeOutcome::Failure {
            payload_json: CANCELLED.to_owned(),
        }));
        let sut = BridgeDispatcher::new(executor);
        let error = sut
            .dispatch_purchase(Operation::new(OperationKind::PurchaseProduct))
            .await
            .unwrap_err();
        assert_eq!(
            error,
            PurchasesError::PurchaseFailed {
                error: cancelled_error(),
                user_cancelled: true
            }
        );
    }

    #[tokio::test]
    async fn non_purchase_failure_is_bridge_error() {
        let executor = ScriptedExecutor::new(Some(BridgeOutcome::Failure {
            payload_json: CANCELLED.to_owned(),
        }));
        let sut = BridgeDispatcher::new(executor);
        let error = sut
            .dispatch(Operation::new(OperationKind::RestorePurchases))
            .await
            .unwrap_err();
        assert_eq!(
            error,
            PurchasesError::Bridge {
                error: cancelled_error()
            }
        );
    }

    #[tokio::test]
    async fn executor_refusal_surfaces_host_error() {
        let sut = BridgeDispatcher::new(Arc::new(RefusingExecutor));
        let error = sut
            .dispatch(Operation::new(OperationKind::FetchOfferings))
            .await
            .unwrap_err();
        assert_eq!(
            error,
            PurchasesError::FromHost {
                error: HostSideError::ExecutorUnavailable {
                    reason: "not ready".to_owned()
                }
            }
        );
    }

    #[tokio::test]
    async fn dropped_listener_fails_instead_of_hanging() {
        let sut = BridgeDispatcher::new(Arc::new(ForgetfulExecutor));
        let error = sut
            .dispatch(Operation::new(OperationKind::FetchOfferings))
            .await
            .unwrap_err();
        assert_eq!(
            error,
            PurchasesError::FromRust {
                error: RustSideError::FailedToReceiveOutcomeFromHost
            }
        );
    }

    #[tokio::test]
    async fn unanswered_call_never_resolves() {
        let executor = ScriptedExecutor::new(None);
        let sut = BridgeDispatcher::new(executor.clone());
        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            sut.dispatch(Operation::new(OperationKind::FetchOfferings)),
        )
        .await;
        assert!(pending.is_err());
        assert_eq!(executor.parked.lock().unwrap().len(), 1);
    }
}
