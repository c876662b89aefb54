//! Subsync - subscription state reconciliation engine
//!
//! Reconciles the authoritative subscription record held by the payment
//! provider with the internal billing model the rest of the application
//! reads (entitlements, seat counts, grace periods). The core is pure:
//! callers assemble a [`reconcile::ReconcileInput`] from provider data and
//! the stored record, and [`reconcile::populate`] returns the updated
//! record for persistence.

pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod payments;
pub mod reconcile;
