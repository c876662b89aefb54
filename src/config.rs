use std::env;

const SECONDS_PER_DAY: i64 = 86400;

/// Billing-wide settings the reconciliation layer needs.
///
/// Always handed to the core as a value. The core never reads the process
/// environment itself, so tests (and embedded callers) construct this
/// struct literally; `from_env` exists for the service entry points.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the account/login authority, used when composing
    /// plan-invite links.
    pub login_authority: String,
    /// Internal plan id redeemed by friends & family invites.
    pub friends_family_plan_id: i64,
    /// Provider coupon applied to friends & family subscriptions.
    pub friends_plan_coupon_id: String,
    /// Seats granted on the friends & family plan.
    pub friends_plan_user_count: i64,
    /// Discounted yearly price (cents) for the friends & family plan.
    pub friends_plan_discount_price: i64,
    /// How many times a single invite code may be redeemed.
    pub max_redemption_limit: i64,
    pub invite_link_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            login_authority: env::var("LOGIN_AUTHORITY")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
            friends_family_plan_id: env_i64("FRIENDS_FAMILY_PLAN_ID", 0),
            friends_plan_coupon_id: env::var("FRIENDS_PLAN_COUPON_ID").unwrap_or_default(),
            friends_plan_user_count: env_i64("FRIENDS_PLAN_USER_COUNT", 3),
            friends_plan_discount_price: env_i64("FRIENDS_PLAN_DISCOUNT_PRICE", 360),
            max_redemption_limit: env_i64("MAX_REDEMPTION_LIMIT", 1),
            invite_link_expiry_days: env_i64("INVITE_LINK_EXPIRY_DAYS", 365),
        }
    }

    /// Expiry timestamp for a plan invite link issued at `base_time`.
    pub fn invite_link_expires_at(&self, base_time: i64) -> i64 {
        base_time + self.invite_link_expiry_days * SECONDS_PER_DAY
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
