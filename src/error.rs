use thiserror::Error;

/// Errors surfaced by a reconciliation pass.
///
/// Every variant is fatal to the pass. Billing state must never be guessed,
/// so nothing here is recovered from or silently defaulted; the caller
/// re-fetches a corrected snapshot if it wants to retry.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Provider status string outside the known vocabulary.
    #[error("unrecognized provider status: {raw:?}")]
    UnrecognizedStatus { raw: String },

    #[error("no line item carries the main-subscription marker")]
    PrimaryLineItemMissing,

    #[error("{count} line items carry the main-subscription marker, expected exactly one")]
    AmbiguousPrimaryLineItem { count: usize },

    #[error("primary line item reports a negative quantity: {quantity}")]
    InvalidSeatQuantity { quantity: i64 },

    #[error("invalid provider payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
