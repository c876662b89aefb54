use crate::error::{ReconcileError, Result};
use crate::payments::{LineItem, LineItemRole};

/// Seats purchased on the base subscription.
///
/// Exactly one line item must carry the primary marker; its quantity is the
/// purchased seat count. Add-on quantities never contribute. Seat count
/// gates access control downstream, so a malformed item list fails the pass
/// instead of defaulting to zero or one. A negative quantity (only possible
/// from a malformed payload) is rejected the same way: the count is always
/// >= 0.
pub fn purchased_user_count(items: &[LineItem]) -> Result<i64> {
    let mut primary = items.iter().filter(|i| i.role == LineItemRole::Primary);

    let first = primary.next().ok_or(ReconcileError::PrimaryLineItemMissing)?;
    let extra = primary.count();
    if extra > 0 {
        return Err(ReconcileError::AmbiguousPrimaryLineItem { count: extra + 1 });
    }

    if first.quantity < 0 {
        return Err(ReconcileError::InvalidSeatQuantity {
            quantity: first.quantity,
        });
    }

    Ok(first.quantity)
}
