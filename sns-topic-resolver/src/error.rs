//! Error types for topic ARN resolution.

use thiserror::Error;

/// Boxed error returned by a [`TopicLister`](crate::TopicLister) transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, TopicArnError>;

/// Errors that can occur while resolving a topic ARN.
#[derive(Debug, Error)]
pub enum TopicArnError {
    /// The listing completed but no topic's name matched exactly.
    #[error("Topic does not exist for given topic name: {name}")]
    TopicNotFound { name: String },

    /// The upstream listing call itself failed. The transport error is kept
    /// as the source.
    #[error("Failed to list SNS topics")]
    Listing(#[source] BoxError),

    #[error("Invalid ARN '{arn}': {reason}")]
    InvalidArn { arn: String, reason: String },
}

impl TopicArnError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::TopicNotFound { name: name.into() }
    }

    pub(crate) fn invalid_arn(arn: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArn {
            arn: arn.into(),
            reason: reason.into(),
        }
    }

    /// True when listing succeeded but nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TopicNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message_names_topic() {
        let err = TopicArnError::not_found("orders");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Topic does not exist for given topic name: orders"
        );
    }

    #[test]
    fn test_listing_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "connect timed out");
        let err = TopicArnError::Listing(Box::new(io));
        assert!(!err.is_not_found());

        let source = err.source().expect("listing error should have a source");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("source should be the io::Error");
        assert_eq!(io.kind(), std::io::ErrorKind::TimedOut);
    }
}
