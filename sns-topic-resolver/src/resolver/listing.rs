//! Resolution by listing every visible topic and matching the name segment.

use async_trait::async_trait;
use log::{debug, warn};

use super::{is_arn, TopicArnResolver};
use crate::arn::{resource_name_of, Arn};
use crate::error::{Result, TopicArnError};
use crate::lister::TopicLister;

/// Resolves a topic name by walking the full topic listing.
///
/// A topic matches when the segment after the last colon of its ARN equals the
/// requested name exactly. `topic1` never matches `...:topic11`. Listing
/// entries that are not valid ARNs are skipped. Pages are fetched until a match
/// is found or the continuation token runs out. Nothing is kept between calls.
///
/// Names starting with `arn:` are parsed as ARNs and returned without listing.
#[derive(Debug, Clone)]
pub struct TopicsListingTopicArnResolver<L> {
    lister: L,
}

impl<L: TopicLister> TopicsListingTopicArnResolver<L> {
    pub fn new(lister: L) -> Self {
        Self { lister }
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    async fn find_topic_arn(&self, name: &str) -> Result<Arn> {
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .lister
                .list_topics(next_token.take())
                .await
                .map_err(TopicArnError::Listing)?;
            pages += 1;
            debug!(
                "Listed page {} with {} topics while resolving '{}'",
                pages,
                page.topic_arns.len(),
                name
            );

            for topic_arn in page
                .topic_arns
                .iter()
                .filter(|topic_arn| resource_name_of(topic_arn) == name)
            {
                match Arn::parse(topic_arn) {
                    Ok(arn) => {
                        debug!("Resolved topic '{}' to {}", name, arn);
                        return Ok(arn);
                    }
                    Err(err) => warn!("Skipping malformed topic ARN in listing: {}", err),
                }
            }

            match page.next_token.filter(|token| !token.is_empty()) {
                Some(token) => next_token = Some(token),
                None => return Err(TopicArnError::not_found(name)),
            }
        }
    }
}

#[async_trait]
impl<L: TopicLister> TopicArnResolver for TopicsListingTopicArnResolver<L> {
    async fn resolve_topic_arn(&self, name: &str) -> Result<Arn> {
        if is_arn(name) {
            return Arn::parse(name);
        }
        self.find_topic_arn(name).await
    }
}
