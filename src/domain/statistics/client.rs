//! Statistics sub-client.

use crate::client::ContentGemClient;
use crate::domain::statistics::{RawStatistics, StatisticsOverview};
use crate::error::SdkError;

pub struct Statistics<'a> {
    pub(crate) client: &'a ContentGemClient,
}

impl<'a> Statistics<'a> {
    pub async fn overview(&self) -> Result<StatisticsOverview, SdkError> {
        Ok(self.client.http.get("/statistics/overview").await?)
    }

    pub async fn publications(&self) -> Result<RawStatistics, SdkError> {
        Ok(self.client.http.get("/statistics/publications").await?)
    }

    pub async fn images(&self) -> Result<RawStatistics, SdkError> {
        Ok(self.client.http.get("/statistics/images").await?)
    }
}
