//! Statistics domain — account-wide usage counters.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::image::ImageStats;
use crate::shared::Envelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationCounts {
    pub total: u32,
    pub published: u32,
    pub draft: u32,
    pub archived: u32,
    pub this_month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyStats {
    pub total_keys: u32,
    pub active_keys: u32,
    pub total_requests: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLimits {
    pub posts_used: u32,
    pub posts_remaining: u32,
    pub plan_name: String,
    pub posts_per_month: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub publications: PublicationCounts,
    pub images: ImageStats,
    pub api_keys: ApiKeyStats,
    pub user_limits: UsageLimits,
}

/// `GET /statistics/overview`
pub type StatisticsOverview = Envelope<Overview>;

/// `GET /statistics/publications` and `GET /statistics/images`; the payload
/// shape is server-defined.
pub type RawStatistics = Envelope<serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_deserialize() {
        let json = r#"{
            "success": true,
            "data": {
                "publications": {"total": 12, "published": 8, "draft": 3, "archived": 1, "thisMonth": 4},
                "images": {"totalImages": 30, "totalSize": 4096000, "averageSize": 136533.3},
                "apiKeys": {"totalKeys": 2, "activeKeys": 1, "totalRequests": 5400},
                "userLimits": {"postsUsed": 4, "postsRemaining": 96, "planName": "Pro", "postsPerMonth": 100}
            }
        }"#;
        let overview: StatisticsOverview = serde_json::from_str(json).unwrap();
        let data = overview.data().unwrap();
        assert_eq!(data.publications.this_month, 4);
        assert_eq!(data.images.total_images, 30);
        assert_eq!(data.api_keys.total_requests, 5400);
        assert_eq!(data.user_limits.plan_name, "Pro");
    }
}
