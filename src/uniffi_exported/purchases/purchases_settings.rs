use crate::prelude::*;

// Operations that merely forward a toggle or a value to the SDK.
#[export]
impl Purchases {
    /// Whether a purchase of a product already owned by another app user id on
    /// the same store account is treated as a restore.
    pub async fn set_allow_sharing_store_account(
        &self,
        allow_sharing: bool,
    ) -> Result<(), PurchasesError> {
        self.forward(
            Operation::new(OperationKind::SetAllowSharingStoreAccount).with_argument(allow_sharing),
        )
        .await
    }

    pub async fn add_attribution_data(
        &self,
        data: HashMap<String, String>,
        network: AttributionNetwork,
        network_user_id: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.forward(
            Operation::new(OperationKind::AddAttributionData)
                .with_argument(data)
                .with_argument(network)
                .with_argument(network_user_id),
        )
        .await
    }

    /// Toggles the SDK's own debug logs, see [`install_logging`] for the logs
    /// of this crate.
    pub async fn set_debug_logs_enabled(&self, enabled: bool) -> Result<(), PurchasesError> {
        self.forward(Operation::new(OperationKind::SetDebugLogsEnabled).with_argument(enabled))
            .await
    }

    /// iOS only.
    pub async fn set_simulates_ask_to_buy_in_sandbox(
        &self,
        enabled: bool,
    ) -> Result<(), PurchasesError> {
        self.forward(
            Operation::new(OperationKind::SetSimulatesAskToBuyInSandbox).with_argument(enabled),
        )
        .await
    }

    /// iOS only.
    pub async fn set_automatic_apple_search_ads_attribution_collection(
        &self,
        enabled: bool,
    ) -> Result<(), PurchasesError> {
        self.forward(
            Operation::new(OperationKind::SetAutomaticAppleSearchAdsAttributionCollection)
                .with_argument(enabled),
        )
        .await
    }

    /// Sends all purchases to the backend, for apps completing purchases
    /// themselves (observer mode).
    pub async fn sync_purchases(&self) -> Result<(), PurchasesError> {
        self.forward(Operation::new(OperationKind::SyncPurchases)).await
    }

    pub async fn invalidate_customer_info_cache(&self) -> Result<(), PurchasesError> {
        self.forward(Operation::new(OperationKind::InvalidateCustomerInfoCache)).await
    }

    /// iOS only.
    pub async fn present_code_redemption_sheet(&self) -> Result<(), PurchasesError> {
        self.forward(Operation::new(OperationKind::PresentCodeRedemptionSheet)).await
    }

    pub async fn collect_device_identifiers(&self) -> Result<(), PurchasesError> {
        self.forward(Operation::new(OperationKind::CollectDeviceIdentifiers)).await
    }

    /// Must be called before [`Purchases::configure`] to have any effect.
    pub async fn set_proxy_url(&self, url: String) -> Result<(), PurchasesError> {
        self.forward(Operation::new(OperationKind::SetProxyUrl).with_argument(url)).await
    }

    pub async fn set_email(&self, email: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::Email, email).await
    }

    pub async fn set_phone_number(
        &self,
        phone_number: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::PhoneNumber, phone_number).await
    }

    pub async fn set_display_name(
        &self,
        display_name: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::DisplayName, display_name).await
    }

    pub async fn set_push_token(&self, push_token: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::PushToken, push_token).await
    }

    pub async fn set_adjust_id(&self, adjust_id: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::AdjustId, adjust_id).await
    }

    pub async fn set_appsflyer_id(
        &self,
        appsflyer_id: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::AppsflyerId, appsflyer_id).await
    }

    pub async fn set_fb_anonymous_id(
        &self,
        fb_anonymous_id: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::FbAnonymousId, fb_anonymous_id).await
    }

    pub async fn set_mparticle_id(
        &self,
        mparticle_id: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::MparticleId, mparticle_id).await
    }

    pub async fn set_onesignal_id(
        &self,
        onesignal_id: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::OnesignalId, onesignal_id).await
    }

    pub async fn set_media_source(
        &self,
        media_source: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::MediaSource, media_source).await
    }

    pub async fn set_campaign(&self, campaign: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::Campaign, campaign).await
    }

    pub async fn set_ad_group(&self, ad_group: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::AdGroup, ad_group).await
    }

    pub async fn set_ad(&self, ad: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::Ad, ad).await
    }

    pub async fn set_keyword(&self, keyword: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::Keyword, keyword).await
    }

    pub async fn set_creative(&self, creative: Option<String>) -> Result<(), PurchasesError> {
        self.set_subscriber_attribute(SubscriberAttribute::Creative, creative).await
    }
}

impl Purchases {
    async fn forward(&self, operation: Operation) -> Result<(), PurchasesError> {
        self.dispatcher.dispatch_unit(operation).await
    }

    /// `None` (or an empty string) deletes the attribute.
    async fn set_subscriber_attribute(
        &self,
        attribute: SubscriberAttribute,
        value: Option<String>,
    ) -> Result<(), PurchasesError> {
        self.forward(
            Operation::new(OperationKind::SetSubscriberAttribute(attribute)).with_argument(value),
        )
        .await
    }
}
