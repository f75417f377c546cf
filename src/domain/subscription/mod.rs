//! Subscription domain — current plan, available plans, usage limits.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::Envelope;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plan feature as listed on subscriptions and plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub name: String,
    pub description: String,
    pub included: bool,
}

/// Posting quota of the calling user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLimits {
    pub posts_used: u32,
    pub posts_remaining: u32,
    pub plan_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_slug: Option<String>,
    pub posts_per_month: u32,
    /// Feature entries; their shape differs between endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<serde_json::Value>>,
}

// ─── Status ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan_name: String,
    pub plan_slug: String,
    pub price: f64,
    pub currency: String,
    pub interval: String,
    pub posts_per_month: u32,
    pub posts_used: u32,
    pub posts_remaining: u32,
    pub status: String,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
    pub features: Vec<PlanFeature>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionData {
    pub subscription: Subscription,
}

/// `GET /subscription/status`
pub type SubscriptionStatus = Envelope<SubscriptionData>;

// ─── Plans ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub interval: String,
    pub posts_per_month: u32,
    pub features: Vec<PlanFeature>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_product_id: Option<String>,
}

/// `GET /subscription/plans`
pub type PlansResponse = Envelope<Vec<Plan>>;

// ─── Limits ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralRateLimit {
    pub requests_per_minute: u32,
    pub requests_per_hour: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRateLimit {
    #[serde(rename = "requestsPer5Minutes")]
    pub requests_per_5_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCheckRateLimit {
    pub requests_per_minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimits {
    pub general: GeneralRateLimit,
    pub content_generation: GenerationRateLimit,
    pub status_checks: StatusCheckRateLimit,
}

/// Quota of one plan tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    pub name: String,
    pub slug: String,
    pub posts_per_month: u32,
    pub price: f64,
    pub currency: String,
    pub interval: String,
    pub has_api_access: bool,
    pub features: Vec<PlanFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLimits {
    pub rate_limits: RateLimits,
    pub subscription_limits: Vec<PlanLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limits: Option<UserLimits>,
}

/// `GET /subscription/limits`
pub type ApiLimitsResponse = Envelope<ApiLimits>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_status_deserialize() {
        let json = r#"{
            "success": true,
            "data": {
                "subscription": {
                    "planName": "Pro",
                    "planSlug": "pro",
                    "price": 29.99,
                    "currency": "USD",
                    "interval": "month",
                    "postsPerMonth": 100,
                    "postsUsed": 25,
                    "postsRemaining": 75,
                    "status": "active",
                    "currentPeriodStart": "2024-01-01T00:00:00Z",
                    "currentPeriodEnd": "2024-02-01T00:00:00Z",
                    "cancelAtPeriodEnd": false,
                    "features": []
                }
            }
        }"#;
        let status: SubscriptionStatus = serde_json::from_str(json).unwrap();
        let sub = &status.data().unwrap().subscription;
        assert_eq!(sub.plan_name, "Pro");
        assert_eq!(sub.posts_remaining, 75);
        assert!(sub.is_active());
        assert!(!sub.cancel_at_period_end);
    }

    #[test]
    fn test_plan_id_rename() {
        let json = r#"{"_id":"plan_1","name":"Starter","slug":"starter","price":0,
            "currency":"USD","interval":"month","postsPerMonth":5,
            "features":[{"name":"API","description":"API access","included":false}]}"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.id, "plan_1");
        assert_eq!(plan.features.len(), 1);
        assert!(!plan.features[0].included);
        assert!(plan.stripe_price_id.is_none());
    }

    #[test]
    fn test_rate_limits_wire_names() {
        let json = r#"{
            "general": {"requestsPerMinute": 60, "requestsPerHour": 1000},
            "contentGeneration": {"requestsPer5Minutes": 10},
            "statusChecks": {"requestsPerMinute": 120}
        }"#;
        let limits: RateLimits = serde_json::from_str(json).unwrap();
        assert_eq!(limits.content_generation.requests_per_5_minutes, 10);
        assert_eq!(limits.status_checks.requests_per_minute, 120);
    }

    #[test]
    fn test_user_limits_dynamic_features() {
        let json = r#"{"postsUsed":1,"postsRemaining":9,"planName":"Free","postsPerMonth":10,
            "features":[{"featureId":{"name":"x","description":"y","identifier":"z"},"included":true}]}"#;
        let limits: UserLimits = serde_json::from_str(json).unwrap();
        let features = limits.features.unwrap();
        assert_eq!(features[0]["featureId"]["identifier"], "z");
    }
}
