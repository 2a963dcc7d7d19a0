//! The listing capability the resolver consumes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{self, BoxError, TopicArnError};

/// One page of a topic listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTopicsPage {
    pub topic_arns: Vec<String>,
    /// Continuation token for the next page, `None` on the last page.
    pub next_token: Option<String>,
}

impl ListTopicsPage {
    pub fn new(topic_arns: Vec<String>, next_token: Option<String>) -> Self {
        Self {
            topic_arns,
            next_token,
        }
    }

    /// A single, final page.
    pub fn last(topic_arns: Vec<String>) -> Self {
        Self::new(topic_arns, None)
    }
}

/// Lists the topics visible to the caller, one page per call.
#[async_trait]
pub trait TopicLister: Send + Sync {
    /// Fetch the page identified by `next_token` (`None` for the first page).
    async fn list_topics(&self, next_token: Option<String>) -> Result<ListTopicsPage, BoxError>;
}

#[async_trait]
impl<T: TopicLister + ?Sized> TopicLister for Arc<T> {
    async fn list_topics(&self, next_token: Option<String>) -> Result<ListTopicsPage, BoxError> {
        (**self).list_topics(next_token).await
    }
}

#[async_trait]
impl<T: TopicLister + ?Sized> TopicLister for &T {
    async fn list_topics(&self, next_token: Option<String>) -> Result<ListTopicsPage, BoxError> {
        (**self).list_topics(next_token).await
    }
}

/// Collect every topic ARN visible to `lister`, following continuation tokens.
pub async fn list_all_topic_arns<L: TopicLister + ?Sized>(lister: &L) -> error::Result<Vec<String>> {
    let mut topic_arns = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = lister
            .list_topics(next_token.take())
            .await
            .map_err(TopicArnError::Listing)?;
        topic_arns.extend(page.topic_arns);

        match page.next_token.filter(|token| !token.is_empty()) {
            Some(token) => next_token = Some(token),
            None => return Ok(topic_arns),
        }
    }
}
