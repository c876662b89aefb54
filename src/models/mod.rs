mod plan;
mod subscription;

pub use plan::{Plan, PlanTier};
pub use subscription::{Subscription, SubscriptionStatus};
