//! Prefixed ID generation for internal billing entities.
//!
//! Internal IDs use an `ss_` brand prefix so they can never be confused
//! with payment provider IDs (Stripe's `sub_`, `cus_`, `price_`, etc.).
//!
//! Format: `ss_{entity}_{uuid_simple}` (32 hex chars, no hyphens)

use uuid::Uuid;

/// All known entity prefixes for validation.
const ALL_PREFIXES: &[&str] = &["ss_sub_", "ss_plan_"];

/// Validate that a string is a valid internal prefixed ID.
///
/// Cheap check to reject garbage (or a provider ID passed by mistake)
/// before it reaches storage. Validates format: `ss_{entity}_{32_hex_chars}`
pub fn is_valid_prefixed_id(s: &str) -> bool {
    let Some(prefix) = ALL_PREFIXES.iter().find(|p| s.starts_with(*p)) else {
        return false;
    };

    let hex_part = &s[prefix.len()..];
    hex_part.len() == 32 && hex_part.chars().all(|c| c.is_ascii_hexdigit())
}

/// Entity types that have prefixed IDs.
#[derive(Debug, Clone, Copy)]
pub enum EntityType {
    Subscription,
    Plan,
}

impl EntityType {
    /// Returns the prefix for this entity type.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Subscription => "ss_sub",
            Self::Plan => "ss_plan",
        }
    }

    /// Generates a new prefixed ID for this entity type.
    pub fn gen_id(&self) -> String {
        format!("{}_{}", self.prefix(), Uuid::new_v4().as_simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = EntityType::Subscription.gen_id();
        assert!(id.starts_with("ss_sub_"));
        // ss_sub_ (7 chars) + 32 hex chars = 39 chars total
        assert_eq!(id.len(), 39);
    }

    #[test]
    fn test_ids_are_unique() {
        let id1 = EntityType::Subscription.gen_id();
        let id2 = EntityType::Subscription.gen_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_is_valid_prefixed_id() {
        assert!(is_valid_prefixed_id("ss_sub_a1b2c3d4e5f6789012345678901234ab"));
        assert!(is_valid_prefixed_id("ss_plan_00000000000000000000000000000000"));
        assert!(is_valid_prefixed_id(&EntityType::Subscription.gen_id()));
        assert!(is_valid_prefixed_id(&EntityType::Plan.gen_id()));

        assert!(!is_valid_prefixed_id("")); // empty
        assert!(!is_valid_prefixed_id("a1b2c3d4-e5f6-7890-1234-567890123456")); // plain UUID
        assert!(!is_valid_prefixed_id("sub_1KGwb7Js7zz5FOJ0QkGhmP12")); // provider ID
        assert!(!is_valid_prefixed_id("ss_unknown_a1b2c3d4e5f6789012345678901234ab")); // unknown prefix
        assert!(!is_valid_prefixed_id("ss_sub_a1b2c3d4")); // too short
        assert!(!is_valid_prefixed_id("ss_sub_a1b2c3d4e5f6789012345678901234gg")); // non-hex
    }
}
