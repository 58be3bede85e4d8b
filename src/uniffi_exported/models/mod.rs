mod attribution;
mod configuration;
mod customer_info;
mod intro_eligibility;
mod offerings;
mod product;
mod purchase;

pub use attribution::*;
pub use configuration::*;
pub use customer_info::*;
pub use intro_eligibility::*;
pub use offerings::*;
pub use product::*;
pub use purchase::*;
