use crate::prelude::*;

/// Which kind of store product an operation refers to.
#[derive(Enum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// In-app products, consumable or not.
    #[serde(rename = "inapp")]
    InApp,

    #[default]
    #[serde(rename = "subs")]
    Subscription,
}

/// A product as listed by the store, with prices localized for the user.
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoreProduct {
    pub identifier: String,
    pub description: String,
    pub title: String,
    pub price: f64,
    /// Formatted price including currency sign, e.g. `€3.99`.
    pub price_string: String,
    pub currency_code: String,
    pub intro_price: Option<f64>,
    pub intro_price_string: Option<String>,
    /// ISO 8601 period, e.g. `P1W`.
    pub intro_price_period: Option<String>,
    pub intro_price_cycles: Option<i32>,
    /// `DAY`, `WEEK`, `MONTH` or `YEAR`.
    pub intro_price_period_unit: Option<String>,
    pub intro_price_period_number_of_units: Option<i32>,
}
