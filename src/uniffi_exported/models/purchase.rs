use crate::prelude::*;

/// How a subscription replacement takes effect, sent to the host as an
/// integer.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProrationMode {
    UnknownSubscriptionUpgradeDowngradePolicy,
    /// Takes effect immediately, remaining time is prorated and credited.
    ImmediateWithTimeProration,
    /// Takes effect immediately, billing cycle stays the same, the price for
    /// the remaining period is charged. Upgrades only.
    ImmediateAndChargeProratedPrice,
    /// Takes effect immediately, new price is charged on next recurrence.
    ImmediateWithoutProration,
    /// Takes effect when the old plan expires.
    Deferred,
}

impl ProrationMode {
    pub fn discriminant(&self) -> i32 {
        match self {
            Self::UnknownSubscriptionUpgradeDowngradePolicy => 0,
            Self::ImmediateWithTimeProration => 1,
            Self::ImmediateAndChargeProratedPrice => 2,
            Self::ImmediateWithoutProration => 3,
            Self::Deferred => 4,
        }
    }
}

impl Serialize for ProrationMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.discriminant())
    }
}

/// Which product a subscription purchase replaces. Android only, ignored by
/// other hosts.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct UpgradeInfo {
    pub old_sku: String,
    pub proration_mode: Option<ProrationMode>,
}

impl UpgradeInfo {
    pub fn new(old_sku: impl AsRef<str>) -> Self {
        Self {
            old_sku: old_sku.as_ref().to_owned(),
            proration_mode: None,
        }
    }

    pub fn with_proration_mode(mut self, proration_mode: ProrationMode) -> Self {
        self.proration_mode = Some(proration_mode);
        self
    }
}

/// The two positional slots an optional [`UpgradeInfo`] occupies in an
/// argument list, both `None` when absent.
pub(crate) fn upgrade_slots(
    upgrade_info: Option<UpgradeInfo>,
) -> (Option<String>, Option<ProrationMode>) {
    match upgrade_info {
        Some(info) => (Some(info.old_sku), info.proration_mode),
        None => (None, None),
    }
}

/// The result of a successful purchase.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MadePurchase {
    pub product_identifier: String,
    #[serde(rename = "purchaserInfo")]
    pub customer_info: CustomerInfo,
}

impl MadePurchase {
    pub(crate) fn from_value(value: Value) -> Result<Self, PurchasesError> {
        let mut purchase: Self = model_from_value(value)?;
        purchase
            .customer_info
            .non_subscription_transactions
            .sort_by(|lhs, rhs| lhs.purchase_date.cmp(&rhs.purchase_date));
        Ok(purchase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proration_mode_is_sent_as_integer() {
        assert_eq!(json!(ProrationMode::Deferred), json!(4));
        assert_eq!(
            json!(ProrationMode::UnknownSubscriptionUpgradeDowngradePolicy),
            json!(0)
        );
        assert_eq!(json!(Some(ProrationMode::ImmediateWithTimeProration)), json!(1));
    }

    #[test]
    fn absent_upgrade_info_is_two_empty_slots() {
        assert_eq!(upgrade_slots(None), (None, None));
    }

    #[test]
    fn upgrade_info_without_proration_mode() {
        assert_eq!(
            upgrade_slots(Some(UpgradeInfo::new("silver_monthly"))),
            (Some("silver_monthly".to_owned()), None)
        );
    }

    #[test]
    fn upgrade_info_with_proration_mode() {
        let info = UpgradeInfo::new("silver_monthly").with_proration_mode(ProrationMode::Deferred);
        assert_eq!(
            upgrade_slots(Some(info)),
            (Some("silver_monthly".to_owned()), Some(ProrationMode::Deferred))
        );
    }
}
