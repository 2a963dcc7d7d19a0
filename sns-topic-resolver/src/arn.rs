//! Typed Amazon Resource Names.
//!
//! An ARN has the shape `arn:<partition>:<service>:<region>:<account-id>:<resource>`.
//! The resource part is everything after the fifth colon and may itself contain
//! colons (SNS subscription ARNs do), so parsing splits into at most six fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopicArnError;

const ARN_SCHEME: &str = "arn";
const ARN_FIELD_COUNT: usize = 6;

/// A parsed ARN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Arn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource: String,
}

impl Arn {
    /// Parse an ARN string.
    ///
    /// `partition`, `service` and `resource` must be non-empty. `region` and
    /// `account_id` may be empty, as they are for global services such as S3.
    pub fn parse(input: &str) -> Result<Self, TopicArnError> {
        let fields: Vec<&str> = input.splitn(ARN_FIELD_COUNT, ':').collect();
        if fields.len() != ARN_FIELD_COUNT {
            return Err(TopicArnError::invalid_arn(
                input,
                format!("expected {ARN_FIELD_COUNT} colon-separated fields"),
            ));
        }
        if fields[0] != ARN_SCHEME {
            return Err(TopicArnError::invalid_arn(input, "missing 'arn' prefix"));
        }
        for (value, field) in [
            (fields[1], "partition"),
            (fields[2], "service"),
            (fields[5], "resource"),
        ] {
            if value.is_empty() {
                return Err(TopicArnError::invalid_arn(input, format!("empty {field}")));
            }
        }

        Ok(Self {
            partition: fields[1].to_string(),
            service: fields[2].to_string(),
            region: fields[3].to_string(),
            account_id: fields[4].to_string(),
            resource: fields[5].to_string(),
        })
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The whole resource part, colons included.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The last colon-delimited segment; for a topic ARN this is the topic name.
    pub fn resource_name(&self) -> &str {
        resource_name_of(&self.resource)
    }
}

/// Text after the last colon of `arn`, or the whole string if it has none.
pub(crate) fn resource_name_of(arn: &str) -> &str {
    arn.rsplit(':').next().unwrap_or(arn)
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ARN_SCHEME}:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

impl FromStr for Arn {
    type Err = TopicArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Arn {
    type Error = TopicArnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Arn> for String {
    fn from(arn: Arn) -> Self {
        arn.to_string()
    }
}
