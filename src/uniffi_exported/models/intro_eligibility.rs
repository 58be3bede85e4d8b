use crate::prelude::*;

/// Whether the user can get the introductory price (or trial) of a product.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntroEligibilityStatus {
    /// Not enough information to decide, show the regular price.
    Unknown,
    Ineligible,
    Eligible,
}

impl<'de> Deserialize<'de> for IntroEligibilityStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match i32::deserialize(deserializer)? {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Ineligible),
            2 => Ok(Self::Eligible),
            other => Err(serde::de::Error::custom(format!(
                "unknown intro eligibility status: {other}"
            ))),
        }
    }
}

#[derive(Record, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IntroEligibility {
    pub status: IntroEligibilityStatus,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_eligibility_map() {
        let map: HashMap<String, IntroEligibility> = serde_json::from_value(json!({
            "gold_monthly": { "status": 2, "description": "eligible" },
            "gold_yearly": { "status": 0, "description": "unknown" }
        }))
        .unwrap();
        assert_eq!(map["gold_monthly"].status, IntroEligibilityStatus::Eligible);
        assert_eq!(map["gold_yearly"].status, IntroEligibilityStatus::Unknown);
    }

    #[test]
    fn rejects_unknown_status() {
        let result = serde_json::from_value::<IntroEligibility>(json!({
            "status": 7,
            "description": "?"
        }));
        assert!(result.is_err());
    }
}
