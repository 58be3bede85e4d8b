use crate::prelude::*;

/// Which of the host subscriptions set up by `configure` are established.
#[derive(Debug, Default)]
struct Subscriptions {
    configure: bool,
    promotional_purchases: bool,
}

impl Subscriptions {
    fn established(&self) -> bool {
        self.configure && self.promotional_purchases
    }
}

/// The purchases SDK as seen from the app. Every operation is carried out by
/// the SDK on the host side, through a [`HostBridgeExecutor`] "installed"
/// from the host when constructing this object.
#[derive(Object)]
pub struct Purchases {
    pub(crate) dispatcher: Arc<BridgeDispatcher>,
    pub(crate) promo_purchases: Arc<PromoPurchaseCoordinator>,
    pub(crate) customer_info_listeners: Arc<ListenerRegistry<dyn CustomerInfoUpdateListener>>,
    /// The only strong reference, the listeners handed to the host refer
    /// back to it weakly.
    router: Arc<HostEventRouter>,
    subscriptions: parking_lot::Mutex<Subscriptions>,
}

#[export]
impl Purchases {
    /// Constructs a new [`Purchases`] using `executor`, a type implementing
    /// [`HostBridgeExecutor`] on the host side, wrapping the native SDK.
    #[uniffi::constructor]
    pub fn new(executor: Arc<dyn HostBridgeExecutor>) -> Self {
        let dispatcher = Arc::new(BridgeDispatcher::new(executor));
        let promo_purchases = Arc::new(PromoPurchaseCoordinator::new(dispatcher.clone()));
        let customer_info_listeners =
            Arc::new(ListenerRegistry::<dyn CustomerInfoUpdateListener>::default());
        let router = Arc::new(HostEventRouter::new(
            promo_purchases.clone(),
            customer_info_listeners.clone(),
        ));
        Self {
            dispatcher,
            promo_purchases,
            customer_info_listeners,
            router,
            subscriptions: parking_lot::Mutex::new(Subscriptions::default()),
        }
    }

    /// Sets up the SDK, then subscribes to customer info updates and
    /// promotional purchases, so no event after configuration is missed.
    ///
    /// Can only succeed once, later calls fail with
    /// [`RustSideError::AlreadyConfigured`] without reaching the host. If the
    /// host refuses one of the two subscriptions, calling again retries only
    /// the one missing, `configuration` is ignored if the SDK already was
    /// set up.
    pub fn configure(&self, configuration: PurchasesConfiguration) -> Result<(), PurchasesError> {
        let mut subscriptions = self.subscriptions.lock();
        if subscriptions.established() {
            return Err(RustSideError::AlreadyConfigured.into());
        }
        if !subscriptions.configure {
            tracing::info!(
                observer_mode = configuration.observer_mode,
                has_app_user_id = configuration.app_user_id.is_some(),
                "Configuring purchases"
            );
            self.dispatcher.subscribe(configuration.into_operation(), self.event_listener())?;
            subscriptions.configure = true;
        }
        if !subscriptions.promotional_purchases {
            self.dispatcher.subscribe(
                Operation::new(OperationKind::ListenForPromotionalPurchases),
                self.event_listener(),
            )?;
            subscriptions.promotional_purchases = true;
        }
        Ok(())
    }

    /// `true` once both host subscriptions of `configure` are established.
    pub fn is_configured(&self) -> bool {
        self.subscriptions.lock().established()
    }

    pub async fn fetch_offerings(&self) -> Result<Offerings, PurchasesError> {
        self.dispatcher
            .dispatch_decoding(Operation::new(OperationKind::FetchOfferings))
            .await
    }

    /// Fetches products by identifier, `product_type` defaults to
    /// [`ProductType::Subscription`].
    pub async fn fetch_products(
        &self,
        product_identifiers: Vec<String>,
        product_type: Option<ProductType>,
    ) -> Result<Vec<StoreProduct>, PurchasesError> {
        self.dispatcher
            .dispatch_decoding(
                Operation::new(OperationKind::FetchProducts)
                    .with_argument(product_identifiers)
                    .with_argument(product_type.unwrap_or_default()),
            )
            .await
    }

    /// Purchases the product with `product_identifier`, `product_type`
    /// defaults to [`ProductType::Subscription`].
    ///
    /// Fails with [`PurchasesError::PurchaseFailed`], where `user_cancelled`
    /// tells apart a user declining from a failing purchase.
    pub async fn purchase_product(
        &self,
        product_identifier: String,
        upgrade_info: Option<UpgradeInfo>,
        product_type: Option<ProductType>,
    ) -> Result<MadePurchase, PurchasesError> {
        let (old_sku, proration_mode) = upgrade_slots(upgrade_info);
        self.purchase(
            Operation::new(OperationKind::PurchaseProduct)
                .with_argument(product_identifier)
                .with_argument(old_sku)
                .with_argument(proration_mode)
                .with_argument(product_type.unwrap_or_default()),
        )
        .await
    }

    /// Purchases `package`, typically one from [`Purchases::fetch_offerings`].
    pub async fn purchase_package(
        &self,
        package: Package,
        upgrade_info: Option<UpgradeInfo>,
    ) -> Result<MadePurchase, PurchasesError> {
        let (old_sku, proration_mode) = upgrade_slots(upgrade_info);
        self.purchase(
            Operation::new(OperationKind::PurchasePackage)
                .with_argument(package.identifier)
                .with_argument(package.offering_identifier)
                .with_argument(old_sku)
                .with_argument(proration_mode),
        )
        .await
    }

    pub async fn restore_purchases(&self) -> Result<CustomerInfo, PurchasesError> {
        self.customer_info(Operation::new(OperationKind::RestorePurchases))
            .await
    }

    /// Links `new_app_user_id` with the current app user id. An empty id is
    /// rejected without reaching the host.
    pub async fn create_alias(
        &self,
        new_app_user_id: String,
    ) -> Result<CustomerInfo, PurchasesError> {
        let operation = OperationKind::CreateAlias;
        validate_app_user_id(operation, &new_app_user_id)?;
        self.customer_info(Operation::new(operation).with_argument(new_app_user_id))
            .await
    }

    /// Switches to `new_app_user_id`, e.g. after a log in. An empty id is
    /// rejected without reaching the host.
    pub async fn identify(&self, new_app_user_id: String) -> Result<CustomerInfo, PurchasesError> {
        let operation = OperationKind::Identify;
        validate_app_user_id(operation, &new_app_user_id)?;
        self.customer_info(Operation::new(operation).with_argument(new_app_user_id))
            .await
    }

    /// Switches to a new anonymous app user id.
    pub async fn reset_user(&self) -> Result<CustomerInfo, PurchasesError> {
        self.customer_info(Operation::new(OperationKind::ResetUser))
            .await
    }

    /// Cached customer info, fetched from the backend if stale.
    pub async fn get_customer_info(&self) -> Result<CustomerInfo, PurchasesError> {
        self.customer_info(Operation::new(OperationKind::GetCustomerInfo))
            .await
    }

    pub async fn get_app_user_id(&self) -> Result<String, PurchasesError> {
        self.dispatcher
            .dispatch_decoding(Operation::new(OperationKind::GetAppUserId))
            .await
    }

    /// Whether the app user id was generated by the SDK.
    pub async fn is_anonymous(&self) -> Result<bool, PurchasesError> {
        self.dispatcher
            .dispatch_decoding(Operation::new(OperationKind::IsAnonymous))
            .await
    }

    /// Intro price eligibility keyed by product identifier. iOS only, other
    /// hosts report [`IntroEligibilityStatus::Unknown`].
    pub async fn check_trial_or_introductory_price_eligibility(
        &self,
        product_identifiers: Vec<String>,
    ) -> Result<HashMap<String, IntroEligibility>, PurchasesError> {
        self.dispatcher
            .dispatch_decoding(
                Operation::new(OperationKind::CheckTrialOrIntroductoryPriceEligibility)
                    .with_argument(product_identifiers),
            )
            .await
    }

    /// Sets subscriber attributes, a `None` value deletes the attribute.
    pub async fn set_attributes(
        &self,
        attributes: HashMap<String, Option<String>>,
    ) -> Result<(), PurchasesError> {
        self.dispatcher
            .dispatch_unit(Operation::new(OperationKind::SetAttributes).with_argument(attributes))
            .await
    }
}

impl Purchases {
    fn event_listener(&self) -> Arc<HostEventListener> {
        Arc::new(HostEventListener::new(&self.router))
    }

    async fn customer_info(&self, operation: Operation) -> Result<CustomerInfo, PurchasesError> {
        let value = self.dispatcher.dispatch(operation).await?;
        CustomerInfo::from_value(value)
    }

    async fn purchase(&self, operation: Operation) -> Result<MadePurchase, PurchasesError> {
        tracing::debug!(operation = ?operation.kind(), "Starting purchase");
        let value = self.dispatcher.dispatch_purchase(operation).await?;
        MadePurchase::from_value(value)
    }
}

pub(crate) fn validate_app_user_id(
    operation: OperationKind,
    app_user_id: &str,
) -> Result<(), RustSideError> {
    if app_user_id.is_empty() {
        return Err(RustSideError::EmptyAppUserId {
            operation: operation.wire_name().to_owned(),
        });
    }
    Ok(())
}
