use serde::{Deserialize, Serialize};

/// Pricing tier of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Paid,
    Free,
    Custom,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Free => "free",
            Self::Custom => "custom",
        }
    }
}

impl std::str::FromStr for PlanTier {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "paid" => Ok(Self::Paid),
            "free" => Ok(Self::Free),
            "custom" => Ok(Self::Custom),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internal pricing/entitlement definition.
///
/// Owned by the plan catalog; treated as immutable for the duration of a
/// reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub active: bool,
    /// Custom plans are negotiated directly with the customer. Their
    /// entitlements and limits are authoritative as stored here - never
    /// recomputed from provider price/plan data.
    pub custom_plan: bool,
    pub allow_esign: bool,
    pub allow_forms: bool,
    pub allow_templates: bool,
    pub allow_api_access: bool,
    pub allow_in_person_sign: bool,
    pub allow_print_and_sign: bool,
    pub allow_ad_integration: bool,
    /// Maximum seats the plan permits (purchased seats may be lower).
    pub user_limit: i32,
    pub template_count: i32,
    pub api_cost: i64,
    pub api_count: i32,
    pub esign_cost: i64,
    pub esign_count: i32,
    pub plan_sign_count: i32,
    pub test_rate_limit: i32,
    pub production_rate_limit: i32,
    pub trial_period_days: i32,
    /// Currency code (e.g., "usd")
    pub currency: Option<String>,
    pub tier: PlanTier,
}
