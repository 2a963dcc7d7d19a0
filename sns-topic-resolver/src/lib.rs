//! Resolve Amazon SNS topic ARNs from bare topic names.
//!
//! - Typed ARN parsing
//! - Topic listing over an injectable [`TopicLister`]
//! - Exact-name resolution, with an optional caching layer
//! - An SNS-backed lister built on the AWS SDK
//!

mod arn;
mod error;
mod lister;
pub mod resolver;
mod sns;

pub use arn::Arn;
pub use error::{BoxError, Result, TopicArnError};
pub use lister::{list_all_topic_arns, ListTopicsPage, TopicLister};
pub use resolver::{CachingTopicArnResolver, TopicArnResolver, TopicsListingTopicArnResolver};
pub use sns::{SnsClientOptions, SnsTopicLister};

/// Resolver over the live SNS API.
pub type SnsTopicArnResolver = TopicsListingTopicArnResolver<SnsTopicLister>;

impl SnsTopicArnResolver {
    /// Build a resolver with AWS configuration loaded from the default chain
    /// plus `options`.
    pub async fn from_options(options: &SnsClientOptions) -> Self {
        Self::new(SnsTopicLister::from_options(options).await)
    }
}
