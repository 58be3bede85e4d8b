use crate::prelude::*;

/// Attribution providers the SDK can forward attribution data to, sent to the
/// host as an integer.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributionNetwork {
    AppleSearchAds,
    Adjust,
    AppsFlyer,
    Branch,
    Tenjin,
    Facebook,
}

impl AttributionNetwork {
    pub fn discriminant(&self) -> i32 {
        match self {
            Self::AppleSearchAds => 0,
            Self::Adjust => 1,
            Self::AppsFlyer => 2,
            Self::Branch => 3,
            Self::Tenjin => 4,
            Self::Facebook => 5,
        }
    }
}

impl Serialize for AttributionNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.discriminant())
    }
}
