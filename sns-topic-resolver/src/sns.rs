//! AWS SDK integration: SNS-backed topic lister and client configuration.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_sns::config::Region;
use aws_sdk_sns::operation::list_topics::ListTopicsOutput;
use aws_sdk_sns::Client as SnsClient;
use log::debug;

use crate::error::BoxError;
use crate::lister::{ListTopicsPage, TopicLister};

/// Overrides applied on top of the default AWS configuration chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnsClientOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Custom endpoint, e.g. a local SNS emulator.
    pub endpoint_url: Option<String>,
}

impl SnsClientOptions {
    /// Load SDK configuration using the standard credential provider chain,
    /// then apply any overrides that are set.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader.load().await
    }
}

/// Lists topics through the SNS `ListTopics` API.
#[derive(Debug, Clone)]
pub struct SnsTopicLister {
    client: SnsClient,
}

impl SnsTopicLister {
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    pub async fn from_options(options: &SnsClientOptions) -> Self {
        let config = options.load_sdk_config().await;
        Self::new(SnsClient::new(&config))
    }
}

#[async_trait]
impl TopicLister for SnsTopicLister {
    async fn list_topics(&self, next_token: Option<String>) -> Result<ListTopicsPage, BoxError> {
        let output = self
            .client
            .list_topics()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(BoxError::from)?;
        let page = page_from_output(output);
        debug!(
            "ListTopics returned {} topics (more pages: {})",
            page.topic_arns.len(),
            page.next_token.is_some()
        );
        Ok(page)
    }
}

/// Topics without an ARN are skipped.
fn page_from_output(output: ListTopicsOutput) -> ListTopicsPage {
    let topic_arns = output
        .topics
        .unwrap_or_default()
        .into_iter()
        .filter_map(|topic| topic.topic_arn)
        .collect();
    ListTopicsPage::new(topic_arns, output.next_token)
}
