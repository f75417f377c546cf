//! Subscription sub-client.

use crate::client::ContentGemClient;
use crate::domain::subscription::{ApiLimitsResponse, PlansResponse, SubscriptionStatus};
use crate::error::SdkError;

pub struct SubscriptionClient<'a> {
    pub(crate) client: &'a ContentGemClient,
}

impl<'a> SubscriptionClient<'a> {
    pub async fn status(&self) -> Result<SubscriptionStatus, SdkError> {
        Ok(self.client.http.get("/subscription/status").await?)
    }

    pub async fn limits(&self) -> Result<ApiLimitsResponse, SdkError> {
        Ok(self.client.http.get("/subscription/limits").await?)
    }

    pub async fn plans(&self) -> Result<PlansResponse, SdkError> {
        Ok(self.client.http.get("/subscription/plans").await?)
    }
}
