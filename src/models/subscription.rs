use serde::{Deserialize, Serialize};

use crate::id::EntityType;
use crate::models::Plan;

/// Lifecycle status of an internal subscription.
///
/// Several provider states intentionally collapse to one internal value:
/// `incomplete` and `unpaid` both mean access is gated pending payment,
/// while `incomplete_expired` is the harder suspension where the provider
/// has given up retrying and the subscription itself is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    InGracePeriod,
    PaymentRequired,
    SuspendedForPaymentFailure,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trial => "trial",
            Self::InGracePeriod => "in_grace_period",
            Self::PaymentRequired => "payment_required",
            Self::SuspendedForPaymentFailure => "suspended_for_payment_failure",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The persisted domain record consumed by the rest of the application for
/// entitlement and access decisions.
///
/// Created once per customer signup. Every provider event afterwards runs a
/// reconciliation pass that overwrites status, dates, and seat count in
/// full, but `id` is assigned here exactly once and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    /// Seats purchased on the primary line item. Add-ons never contribute.
    pub purchased_user_count: i64,
    pub provider_subscription_id: Option<String>,
    pub provider_customer_id: Option<String>,
    pub latest_invoice_id: Option<String>,
    pub start_date: i64,
    pub ended_at: Option<i64>,
    pub trial_start: Option<i64>,
    pub trial_end: Option<i64>,
    pub current_period_start: i64,
    pub current_period_end: i64,
}

impl Subscription {
    /// Fresh placeholder created at signup, before the first provider event
    /// arrives. Reconciliation fills in everything except `id`.
    pub fn new(plan: Plan) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: EntityType::Subscription.gen_id(),
            plan,
            status: SubscriptionStatus::PaymentRequired,
            purchased_user_count: 0,
            provider_subscription_id: None,
            provider_customer_id: None,
            latest_invoice_id: None,
            start_date: now,
            ended_at: None,
            trial_start: None,
            trial_end: None,
            current_period_start: now,
            current_period_end: now,
        }
    }

    /// Whether `now` falls inside the trial window, when one exists.
    pub fn in_trial(&self, now: i64) -> bool {
        match (self.trial_start, self.trial_end) {
            (Some(start), Some(end)) => now >= start && now < end,
            _ => false,
        }
    }
}
