use std::str::FromStr;

use crate::error::{ReconcileError, Result};
use crate::models::SubscriptionStatus;

/// The provider's subscription status vocabulary, closed at the boundary.
///
/// Anything outside this set fails the pass instead of defaulting: billing
/// state must never be guessed, and provider vocabularies do evolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Active,
    Trialing,
    PastDue,
    Incomplete,
    IncompleteExpired,
    Canceled,
    Unpaid,
}

impl FromStr for ProviderStatus {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "trialing" => Ok(Self::Trialing),
            "past_due" => Ok(Self::PastDue),
            "incomplete" => Ok(Self::Incomplete),
            "incomplete_expired" => Ok(Self::IncompleteExpired),
            "canceled" => Ok(Self::Canceled),
            "unpaid" => Ok(Self::Unpaid),
            other => Err(ReconcileError::UnrecognizedStatus {
                raw: other.to_string(),
            }),
        }
    }
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::PastDue => "past_due",
            Self::Incomplete => "incomplete",
            Self::IncompleteExpired => "incomplete_expired",
            Self::Canceled => "canceled",
            Self::Unpaid => "unpaid",
        }
    }

    /// Internal status this provider state maps to.
    ///
    /// `incomplete` and `unpaid` collapse to `PaymentRequired`: both mean
    /// access is gated pending payment. `incomplete_expired` is kept
    /// distinct as the harder suspension - the provider has stopped
    /// retrying and the subscription itself is void.
    pub fn internal(&self) -> SubscriptionStatus {
        match self {
            Self::Active => SubscriptionStatus::Active,
            Self::Trialing => SubscriptionStatus::Trial,
            Self::PastDue => SubscriptionStatus::InGracePeriod,
            Self::Incomplete | Self::Unpaid => SubscriptionStatus::PaymentRequired,
            Self::IncompleteExpired => SubscriptionStatus::SuspendedForPaymentFailure,
            Self::Canceled => SubscriptionStatus::Cancelled,
        }
    }
}

/// Map a raw provider status string to the internal lifecycle status.
///
/// Unknown strings fail the pass; the raw value is logged so an operator
/// can triage new provider vocabulary by hand.
pub fn map_status(raw: &str) -> Result<SubscriptionStatus> {
    match raw.parse::<ProviderStatus>() {
        Ok(status) => Ok(status.internal()),
        Err(e) => {
            tracing::warn!("reconciliation rejected: unrecognized provider status {:?}", raw);
            Err(e)
        }
    }
}
