use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;

/// Metadata key a Stripe subscription item carries when it represents the
/// base subscription seats rather than an add-on or usage item.
///
/// Set by the checkout layer when the subscription is created, so every
/// snapshot we receive back can tell the primary item apart without
/// guessing from price IDs.
pub const MAIN_ITEM_METADATA_KEY: &str = "main_subscription_item";

/// Metadata marking a subscription item as the primary (base) item.
/// Attached at checkout; used by tests and fixtures as well.
pub fn main_item_metadata() -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert(MAIN_ITEM_METADATA_KEY.to_string(), "true".to_string());
    metadata
}

/// Generic Stripe webhook event - object is parsed based on event_type
#[derive(Debug, Deserialize)]
pub struct StripeWebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

/// Stripe wraps collections in a list envelope: `{"object": "list", "data": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> Default for StripeList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

// ============ customer.subscription.* ============

/// One billing cycle's subscription snapshot as Stripe reports it.
///
/// All timestamps are Unix epoch seconds, as on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeSubscription {
    pub id: String,
    pub customer: Option<String>,
    /// Raw provider status. Kept as a string at the boundary so an
    /// out-of-vocabulary value can be logged verbatim for triage; mapping
    /// to an internal status happens in the reconcile core.
    pub status: String,
    pub start_date: i64,
    pub ended_at: Option<i64>,
    pub trial_start: Option<i64>,
    pub trial_end: Option<i64>,
    pub current_period_start: i64,
    pub current_period_end: i64,
    #[serde(default)]
    pub items: StripeList<StripeSubscriptionItem>,
    /// Latest invoice ID (in_xxx), when Stripe sent it unexpanded.
    pub latest_invoice: Option<String>,
}

impl StripeSubscription {
    /// Parse the subscription object out of a webhook event envelope.
    ///
    /// The caller has already verified the event signature and matched the
    /// event type; this only handles the payload shape.
    pub fn from_event(event: &StripeWebhookEvent) -> Result<Self> {
        Ok(serde_json::from_value(event.data.object.clone())?)
    }

    /// Line items with their roles resolved from metadata.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.items
            .data
            .iter()
            .cloned()
            .map(StripeSubscriptionItem::into_line_item)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StripeSubscriptionItem {
    pub id: String,
    /// Absent for metered items; those are never the primary item.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl StripeSubscriptionItem {
    /// Role of this item, resolved from the metadata marker.
    pub fn role(&self) -> LineItemRole {
        match self.metadata.get(MAIN_ITEM_METADATA_KEY).map(String::as_str) {
            Some("true") => LineItemRole::Primary,
            _ => LineItemRole::AddOn,
        }
    }

    pub fn into_line_item(self) -> LineItem {
        let role = self.role();
        LineItem {
            id: self.id,
            quantity: self.quantity,
            role,
        }
    }
}

/// Whether a line item is the base subscription or an add-on/usage item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemRole {
    Primary,
    AddOn,
}

/// A subscription line item with its role made explicit.
///
/// Resolving the role once at the boundary means the reconcile core never
/// touches the string-keyed metadata bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: String,
    pub quantity: i64,
    pub role: LineItemRole,
}

// ============ invoice reference ============

/// Invoice summary attached to a snapshot, when the caller expanded it.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeInvoice {
    pub id: String,
    pub customer: Option<String>,
    pub subscription: Option<String>,
    pub billing_reason: Option<String>, // "subscription_create", "subscription_cycle", etc.
    pub status: String,                 // "paid", "open", etc.
}
