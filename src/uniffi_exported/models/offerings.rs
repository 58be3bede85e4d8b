use crate::prelude::*;

#[derive(Enum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    Unknown,
    Custom,
    Lifetime,
    Annual,
    SixMonth,
    ThreeMonth,
    TwoMonth,
    Monthly,
    Weekly,
}

/// A product placed in an offering, configured server side.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub identifier: String,
    pub package_type: PackageType,
    pub product: StoreProduct,
    pub offering_identifier: String,
}

/// A group of packages to present to the user, with a slot per predefined
/// package duration.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub identifier: String,
    pub server_description: String,
    pub available_packages: Vec<Package>,
    pub lifetime: Option<Package>,
    pub annual: Option<Package>,
    pub six_month: Option<Package>,
    pub three_month: Option<Package>,
    pub two_month: Option<Package>,
    pub monthly: Option<Package>,
    pub weekly: Option<Package>,
}

impl Offering {
    pub fn package_with_identifier(&self, identifier: &str) -> Option<&Package> {
        self.available_packages
            .iter()
            .find(|p| p.identifier == identifier)
    }
}

#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Offerings {
    /// Keyed by offering identifier.
    pub all: HashMap<String, Offering>,
    pub current: Option<Offering>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::offerings_json;
    use super::*;

    #[test]
    fn decodes_offerings() {
        let offerings: Offerings = serde_json::from_value(offerings_json()).unwrap();
        let current = offerings.current.unwrap();
        assert_eq!(current.identifier, "default");
        let monthly = current.monthly.as_ref().unwrap();
        assert_eq!(monthly.package_type, PackageType::Monthly);
        assert_eq!(monthly.product.intro_price_cycles, Some(1));
        assert!(current.annual.is_none());
        assert_eq!(
            current.package_with_identifier("$rc_monthly"),
            Some(monthly)
        );
        assert!(offerings.all.contains_key("default"));
    }

    #[test]
    fn package_type_wire_values() {
        assert_eq!(json!(PackageType::SixMonth), json!("SIX_MONTH"));
        assert_eq!(
            serde_json::from_value::<PackageType>(json!("TWO_MONTH")).unwrap(),
            PackageType::TwoMonth
        );
    }
}
