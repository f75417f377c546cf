//! Company sub-client — profile and website parsing.

use crate::client::ContentGemClient;
use crate::domain::company::{
    CompanyInfo, CompanyParsingRequest, CompanyParsingResponse, CompanyParsingStatus,
    CompanyResponse,
};
use crate::error::{JobKind, SdkError};
use crate::poll::{poll_until_done, PollConfig};

/// Sub-client for the company profile.
pub struct Company<'a> {
    pub(crate) client: &'a ContentGemClient,
}

impl<'a> Company<'a> {
    pub async fn get(&self) -> Result<CompanyResponse, SdkError> {
        Ok(self.client.http.get("/company").await?)
    }

    /// Update the profile. Only fields set on `data` are sent.
    pub async fn update(&self, data: &CompanyInfo) -> Result<CompanyResponse, SdkError> {
        Ok(self.client.http.put("/company", data).await?)
    }

    /// Start extracting a company profile from a website.
    pub async fn parse_website(
        &self,
        website_url: &str,
    ) -> Result<CompanyParsingResponse, SdkError> {
        let body = CompanyParsingRequest {
            website_url: website_url.to_string(),
        };
        Ok(self.client.http.post("/company/parse", &body).await?)
    }

    pub async fn parsing_status(&self) -> Result<CompanyParsingStatus, SdkError> {
        Ok(self.client.http.get("/company/parsing-status").await?)
    }

    /// Poll the parsing status until it completes or fails.
    pub async fn wait_for_parsing(
        &self,
        config: PollConfig,
    ) -> Result<CompanyParsingStatus, SdkError> {
        poll_until_done(JobKind::CompanyParsing, config, move || self.parsing_status()).await
    }
}
