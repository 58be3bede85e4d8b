use crate::prelude::*;

/// Every operation the bridge knows about, each with a stable wire name the
/// host switches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum OperationKind {
    Configure,
    ListenForPromotionalPurchases,
    FetchOfferings,
    FetchProducts,
    PurchaseProduct,
    PurchasePackage,
    RestorePurchases,
    CreateAlias,
    Identify,
    ResetUser,
    SetAttributes,
    ResumeDeferredPurchase,
    GetCustomerInfo,
    GetAppUserId,
    IsAnonymous,
    CheckTrialOrIntroductoryPriceEligibility,
    SetAllowSharingStoreAccount,
    AddAttributionData,
    SetDebugLogsEnabled,
    SetSimulatesAskToBuyInSandbox,
    SetAutomaticAppleSearchAdsAttributionCollection,
    SyncPurchases,
    InvalidateCustomerInfoCache,
    PresentCodeRedemptionSheet,
    CollectDeviceIdentifiers,
    SetProxyUrl,
    SetSubscriberAttribute(SubscriberAttribute),
}

/// Reserved subscriber attributes, each with a dedicated setter on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum SubscriberAttribute {
    Email,
    PhoneNumber,
    DisplayName,
    PushToken,
    AdjustId,
    AppsflyerId,
    FbAnonymousId,
    MparticleId,
    OnesignalId,
    MediaSource,
    Campaign,
    AdGroup,
    Ad,
    Keyword,
    Creative,
}

impl SubscriberAttribute {
    fn wire_name(&self) -> &'static str {
        match self {
            Self::Email => "setEmail",
            Self::PhoneNumber => "setPhoneNumber",
            Self::DisplayName => "setDisplayName",
            Self::PushToken => "setPushToken",
            Self::AdjustId => "setAdjustID",
            Self::AppsflyerId => "setAppsflyerID",
            Self::FbAnonymousId => "setFBAnonymousID",
            Self::MparticleId => "setMparticleID",
            Self::OnesignalId => "setOnesignalID",
            Self::MediaSource => "setMediaSource",
            Self::Campaign => "setCampaign",
            Self::AdGroup => "setAdGroup",
            Self::Ad => "setAd",
            Self::Keyword => "setKeyword",
            Self::Creative => "setCreative",
        }
    }
}

impl OperationKind {
    pub(crate) fn wire_name(&self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::ListenForPromotionalPurchases => "listenForPromotionalPurchases",
            Self::FetchOfferings => "fetchOfferings",
            Self::FetchProducts => "fetchProducts",
            Self::PurchaseProduct => "purchaseProduct",
            Self::PurchasePackage => "purchasePackage",
            Self::RestorePurchases => "restorePurchases",
            Self::CreateAlias => "createAlias",
            Self::Identify => "identify",
            Self::ResetUser => "resetUser",
            Self::SetAttributes => "setAttributes",
            Self::ResumeDeferredPurchase => "resumeDeferredPurchase",
            Self::GetCustomerInfo => "getCustomerInfo",
            Self::GetAppUserId => "getAppUserId",
            Self::IsAnonymous => "isAnonymous",
            Self::CheckTrialOrIntroductoryPriceEligibility => {
                "checkTrialOrIntroductoryPriceEligibility"
            }
            Self::SetAllowSharingStoreAccount => "setAllowSharingStoreAccount",
            Self::AddAttributionData => "addAttributionData",
            Self::SetDebugLogsEnabled => "setDebugLogsEnabled",
            Self::SetSimulatesAskToBuyInSandbox => "setSimulatesAskToBuyInSandbox",
            Self::SetAutomaticAppleSearchAdsAttributionCollection => {
                "setAutomaticAppleSearchAdsAttributionCollection"
            }
            Self::SyncPurchases => "syncPurchases",
            Self::InvalidateCustomerInfoCache => "invalidateCustomerInfoCache",
            Self::PresentCodeRedemptionSheet => "presentCodeRedemptionSheet",
            Self::CollectDeviceIdentifiers => "collectDeviceIdentifiers",
            Self::SetProxyUrl => "setProxyURLString",
            Self::SetSubscriberAttribute(attribute) => attribute.wire_name(),
        }
    }
}

/// A single request to the host: which operation, and its positional
/// arguments. Built per call and consumed by the dispatcher.
#[derive(Debug)]
pub(crate) struct Operation {
    kind: OperationKind,
    arguments: Vec<Result<Value, serde_json::Error>>,
}

impl Operation {
    pub(crate) fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            arguments: Vec::new(),
        }
    }

    pub(crate) fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Appends the next positional argument. `None` becomes an explicit
    /// `null` slot.
    pub(crate) fn with_argument(mut self, argument: impl Serialize) -> Self {
        self.arguments.push(serde_json::to_value(argument));
        self
    }

    pub(crate) fn into_bridge_call(self) -> Result<BridgeCall, RustSideError> {
        let method = self.kind.wire_name();
        let serialization_failed = || RustSideError::UnableToSerializeArguments {
            operation: method.to_owned(),
        };
        let arguments = self
            .arguments
            .into_iter()
            .collect::<Result<Vec<Value>, _>>()
            .map_err(|_| serialization_failed())?;
        let arguments_json = serde_json::to_string(&arguments).map_err(|_| serialization_failed())?;
        Ok(BridgeCall {
            method: method.to_owned(),
            arguments_json,
        })
    }
}
