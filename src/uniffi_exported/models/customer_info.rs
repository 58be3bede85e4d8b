use crate::prelude::*;

/// The status of a single entitlement, i.e. an access right derived from the
/// purchase history of the user.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementInfo {
    pub identifier: String,
    pub is_active: bool,
    /// Always `true` for lifetime access.
    pub will_renew: bool,
    /// One of `NORMAL`, `INTRO`, `TRIAL`.
    pub period_type: String,
    pub latest_purchase_date: String,
    pub original_purchase_date: String,
    /// `None` for lifetime access.
    pub expiration_date: Option<String>,
    pub store: String,
    pub product_identifier: String,
    pub is_sandbox: bool,
    pub unsubscribe_detected_at: Option<String>,
    pub billing_issue_detected_at: Option<String>,
}

#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct EntitlementInfos {
    /// Active and inactive entitlements, keyed by identifier.
    pub all: HashMap<String, EntitlementInfo>,
    pub active: HashMap<String, EntitlementInfo>,
}

#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreTransaction {
    pub revenue_cat_id: String,
    pub product_id: String,
    /// ISO 8601
    pub purchase_date: String,
}

/// Everything the SDK knows about the purchases of the current user.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub entitlements: EntitlementInfos,
    pub active_subscriptions: Vec<String>,
    pub all_purchased_product_identifiers: Vec<String>,
    /// Ordered oldest first.
    #[serde(default)]
    pub non_subscription_transactions: Vec<StoreTransaction>,
    pub latest_expiration_date: Option<String>,
    pub first_seen: String,
    pub original_app_user_id: String,
    pub request_date: String,
    pub all_expiration_dates: HashMap<String, Option<String>>,
    pub all_purchase_dates: HashMap<String, Option<String>>,
    pub original_application_version: Option<String>,
    pub original_purchase_date: Option<String>,
    #[serde(rename = "managementURL")]
    pub management_url: Option<String>,
}

impl CustomerInfo {
    /// Decodes a customer record, making sure the transaction history is
    /// ordered oldest first whatever order the host used.
    pub(crate) fn from_value(value: Value) -> Result<Self, PurchasesError> {
        let mut info: Self = model_from_value(value)?;
        // ISO 8601 timestamps order lexicographically.
        info.non_subscription_transactions
            .sort_by(|lhs, rhs| lhs.purchase_date.cmp(&rhs.purchase_date));
        Ok(info)
    }

    pub(crate) fn from_json(json: &str) -> Result<Self, PurchasesError> {
        let value = serde_json::from_str::<Value>(json).map_err(|e| {
            RustSideError::UnableToDeserializeBridgeValue {
                type_name: std::any::type_name::<Self>().to_owned(),
                reason: e.to_string(),
            }
        })?;
        Self::from_value(value)
    }
}
