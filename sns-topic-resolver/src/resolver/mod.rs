//! Topic ARN resolution.

mod caching;
mod listing;

pub use caching::CachingTopicArnResolver;
pub use listing::TopicsListingTopicArnResolver;

use async_trait::async_trait;

use crate::arn::Arn;
use crate::error::Result;

/// Resolves a topic name to its ARN.
#[async_trait]
pub trait TopicArnResolver: Send + Sync {
    /// Resolve `name`, which is either a bare topic name or a full topic ARN.
    async fn resolve_topic_arn(&self, name: &str) -> Result<Arn>;
}

/// True when `name` already looks like an ARN rather than a bare topic name.
///
/// The scheme check ignores case so that `ARN:...` is routed to [`Arn::parse`]
/// instead of the listing; the parser only accepts a lowercase `arn` scheme
/// and rejects it there.
pub(crate) fn is_arn(name: &str) -> bool {
    name.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("arn:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_arn() {
        assert!(is_arn("arn:aws:sns:eu-west-1:123456789012:topic1"));
        assert!(is_arn("ARN:aws:sns:eu-west-1:123456789012:topic1"));
        assert!(!is_arn("topic1"));
        assert!(!is_arn("arn"));
        assert!(!is_arn("arnold"));
        assert!(!is_arn(""));
    }
}
