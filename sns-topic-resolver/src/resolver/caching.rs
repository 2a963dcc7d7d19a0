//! Memoizing decorator over another resolver.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::debug;

use super::TopicArnResolver;
use crate::arn::Arn;
use crate::error::Result;

/// Caches successful resolutions of the wrapped resolver by requested name.
///
/// Failed lookups are not cached, so a topic created after a `TopicNotFound`
/// is picked up on the next call.
#[derive(Debug)]
pub struct CachingTopicArnResolver<R> {
    inner: R,
    cache: RwLock<HashMap<String, Arn>>,
}

impl<R: TopicArnResolver> CachingTopicArnResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Drop the cached ARN for `name`, returning it if present.
    pub fn invalidate(&self, name: &str) -> Option<Arn> {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached(&self, name: &str) -> Option<Arn> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

#[async_trait]
impl<R: TopicArnResolver> TopicArnResolver for CachingTopicArnResolver<R> {
    async fn resolve_topic_arn(&self, name: &str) -> Result<Arn> {
        if let Some(arn) = self.cached(name) {
            debug!("Topic '{}' served from cache", name);
            return Ok(arn);
        }

        let arn = self.inner.resolve_topic_arn(name).await?;
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), arn.clone());
        Ok(arn)
    }
}
