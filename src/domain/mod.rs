pub mod period;
pub mod subscription;

pub use period::{BillingPeriod, DisplayPeriod};
pub use subscription::Subscription;
