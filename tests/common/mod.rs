//! Test utilities and fixtures for subsync integration tests

#![allow(dead_code)]

use std::collections::HashMap;

pub use subsync::config::Config;
pub use subsync::error::ReconcileError;
pub use subsync::models::*;
pub use subsync::payments::*;
pub use subsync::reconcile::{populate, ReconcileInput};

/// Fixed base timestamp so fixtures are deterministic.
pub const T0: i64 = 1_700_000_000;
pub const ONE_DAY: i64 = 86_400;

/// A paid plan as the plan catalog would resolve it from a provider price.
pub fn paid_plan() -> Plan {
    Plan {
        id: "ss_plan_a1b2c3d4e5f6789012345678901234ab".to_string(),
        name: "Business".to_string(),
        active: true,
        custom_plan: false,
        allow_esign: true,
        allow_forms: true,
        allow_templates: true,
        allow_api_access: true,
        allow_in_person_sign: false,
        allow_print_and_sign: true,
        allow_ad_integration: false,
        user_limit: 25,
        template_count: 50,
        api_cost: 200,
        api_count: 100,
        esign_cost: 200,
        esign_count: 100,
        plan_sign_count: 25,
        test_rate_limit: 50,
        production_rate_limit: 100,
        trial_period_days: 14,
        currency: Some("usd".to_string()),
        tier: PlanTier::Paid,
    }
}

/// A negotiated custom plan. Entitlements here are authoritative as stored;
/// reconciliation must attach them untouched.
pub fn custom_plan() -> Plan {
    Plan {
        name: "CustomPlan".to_string(),
        custom_plan: true,
        user_limit: 1,
        tier: PlanTier::Custom,
        allow_ad_integration: true,
        allow_in_person_sign: true,
        trial_period_days: 1,
        ..paid_plan()
    }
}

/// Subscription item carrying the main-subscription marker.
pub fn primary_item(id: &str, quantity: i64) -> StripeSubscriptionItem {
    StripeSubscriptionItem {
        id: id.to_string(),
        quantity,
        metadata: main_item_metadata(),
    }
}

/// Add-on item with no marker.
pub fn addon_item(id: &str, quantity: i64) -> StripeSubscriptionItem {
    StripeSubscriptionItem {
        id: id.to_string(),
        quantity,
        metadata: HashMap::new(),
    }
}

/// Provider snapshot with the given status and a single primary line item
/// of `quantity` seats.
pub fn snapshot(status: &str, quantity: i64) -> StripeSubscription {
    snapshot_with_items(status, vec![primary_item("si_main", quantity)])
}

pub fn snapshot_with_items(
    status: &str,
    items: Vec<StripeSubscriptionItem>,
) -> StripeSubscription {
    StripeSubscription {
        id: "sub_1KGwb7Js7zz5FOJ0QkGhmP12".to_string(),
        customer: Some("cus_LxT4Bb2WqC9f1k".to_string()),
        status: status.to_string(),
        start_date: T0,
        ended_at: Some(T0 + ONE_DAY),
        trial_start: Some(T0),
        trial_end: Some(T0 + 2 * ONE_DAY),
        current_period_start: T0,
        current_period_end: T0 + 30 * ONE_DAY,
        items: StripeList { data: items },
        latest_invoice: Some("in_1KGwb7Js7zz5FOJ0aaaa0001".to_string()),
    }
}

/// Stored internal record, as it would exist before the pass.
pub fn existing_subscription(plan: &Plan) -> Subscription {
    Subscription::new(plan.clone())
}

/// Expanded invoice object, as a caller fetching the latest invoice
/// separately would hold it.
pub fn expanded_invoice(id: &str) -> StripeInvoice {
    StripeInvoice {
        id: id.to_string(),
        customer: Some("cus_LxT4Bb2WqC9f1k".to_string()),
        subscription: Some("sub_1KGwb7Js7zz5FOJ0QkGhmP12".to_string()),
        billing_reason: Some("subscription_create".to_string()),
        status: "paid".to_string(),
    }
}
