//! Subscription state reconciliation.
//!
//! Takes the authoritative provider snapshot plus the stored internal
//! record and produces the updated internal record: lifecycle status,
//! billing period dates, trial window, and purchased seat count. The whole
//! module is pure - no I/O, no storage - so the calling layer owns fetching
//! the snapshot and persisting the result.

mod seats;
mod status;

pub use seats::purchased_user_count;
pub use status::{map_status, ProviderStatus};

use crate::error::Result;
use crate::models::{Plan, Subscription};
use crate::payments::{StripeInvoice, StripeSubscription};

/// Everything one reconciliation pass needs, assembled by the caller.
///
/// The core fetches nothing itself: the snapshot comes from a provider API
/// response or webhook payload, `existing` is the stored internal record (a
/// fresh placeholder on first reconciliation), and `plan` has already been
/// resolved from the provider price or an internal custom-plan override.
#[derive(Debug)]
pub struct ReconcileInput<'a> {
    pub snapshot: &'a StripeSubscription,
    pub existing: &'a Subscription,
    pub plan: &'a Plan,
    /// Latest invoice, when the caller expanded it separately. Falls back
    /// to the snapshot's own `latest_invoice` reference.
    pub latest_invoice: Option<&'a StripeInvoice>,
}

/// Build the updated internal record from a provider snapshot.
///
/// Pure and idempotent: the same snapshot and plan always produce the same
/// record, and nothing is written anywhere - persisting the result is the
/// caller's job. Status and seat-count failures abort before any record
/// exists, so the stored record stays untouched until a valid pass
/// succeeds.
///
/// The output is a full replacement of every field except `id`, which is
/// assigned at signup and never reassigned here. Because of full-replace
/// semantics, callers must not interleave two passes for the same
/// subscription id; serialize on the id in the calling layer.
pub fn populate(input: ReconcileInput<'_>) -> Result<Subscription> {
    let status = status::map_status(&input.snapshot.status)?;

    let items = input.snapshot.line_items();
    let purchased_user_count = seats::purchased_user_count(&items)?;

    let snapshot = input.snapshot;

    tracing::debug!(
        "reconciled {} from provider {}: status={}, seats={}",
        input.existing.id,
        snapshot.id,
        status,
        purchased_user_count
    );

    Ok(Subscription {
        id: input.existing.id.clone(),
        // The plan is attached as resolved by the caller. For custom plans
        // the stored entitlements are authoritative; the provider's price
        // object is never consulted.
        plan: input.plan.clone(),
        status,
        purchased_user_count,
        provider_subscription_id: Some(snapshot.id.clone()),
        provider_customer_id: snapshot.customer.clone(),
        latest_invoice_id: input
            .latest_invoice
            .map(|inv| inv.id.clone())
            .or_else(|| snapshot.latest_invoice.clone()),
        start_date: snapshot.start_date,
        ended_at: snapshot.ended_at,
        trial_start: snapshot.trial_start,
        trial_end: snapshot.trial_end,
        current_period_start: snapshot.current_period_start,
        current_period_end: snapshot.current_period_end,
    })
}
