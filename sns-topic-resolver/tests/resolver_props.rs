use std::collections::BTreeSet;

use async_trait::async_trait;
use proptest::prelude::*;
use sns_topic_resolver::{
    BoxError, ListTopicsPage, TopicArnResolver, TopicLister, TopicsListingTopicArnResolver,
};

const ACCOUNT_PREFIX: &str = "arn:aws:sns:eu-west-1:123456789012:";

/// Splits a fixed listing into pages of `page_size`; the token is the page index.
struct ChunkedLister {
    topic_arns: Vec<String>,
    page_size: usize,
}

#[async_trait]
impl TopicLister for ChunkedLister {
    async fn list_topics(&self, next_token: Option<String>) -> Result<ListTopicsPage, BoxError> {
        let index: usize = next_token.as_deref().unwrap_or("0").parse()?;
        let page_count = self.topic_arns.len().div_ceil(self.page_size).max(1);
        let topic_arns = self
            .topic_arns
            .chunks(self.page_size)
            .nth(index)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        let next_token = (index + 1 < page_count).then(|| (index + 1).to_string());
        Ok(ListTopicsPage::new(topic_arns, next_token))
    }
}

fn resolve(
    names: &[String],
    page_size: usize,
    target: &str,
) -> sns_topic_resolver::Result<sns_topic_resolver::Arn> {
    let lister = ChunkedLister {
        topic_arns: names
            .iter()
            .map(|name| format!("{ACCOUNT_PREFIX}{name}"))
            .collect(),
        page_size,
    };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build test runtime");
    runtime.block_on(TopicsListingTopicArnResolver::new(lister).resolve_topic_arn(target))
}

/// Distinct names plus a target, with decoys that contain the target as a
/// prefix or suffix, shuffled.
fn listing_with_target() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::btree_set("[a-z][a-z0-9_-]{0,10}", 1..12),
        any::<prop::sample::Index>(),
    )
        .prop_flat_map(|(names, pick)| {
            let names: Vec<String> = names.into_iter().collect();
            let target = pick.get(names.as_slice()).clone();
            let mut listing: BTreeSet<String> = names.into_iter().collect();
            listing.insert(format!("{target}1"));
            listing.insert(format!("x{target}"));
            let listing: Vec<String> = listing.into_iter().collect();
            (Just(listing).prop_shuffle(), Just(target))
        })
}

proptest! {
    #[test]
    fn resolves_the_unique_exact_match((listing, target) in listing_with_target(), page_size in 1usize..5) {
        let arn = resolve(&listing, page_size, &target).unwrap();
        prop_assert_eq!(arn.resource_name(), target.as_str());
        prop_assert_eq!(arn.to_string(), format!("{ACCOUNT_PREFIX}{target}"));
    }

    #[test]
    fn result_does_not_depend_on_listing_order((listing, target) in listing_with_target()) {
        let mut reversed = listing.clone();
        reversed.reverse();
        let forward = resolve(&listing, 3, &target).unwrap();
        let backward = resolve(&reversed, 3, &target).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn missing_name_is_not_found((listing, target) in listing_with_target()) {
        let listing: Vec<String> = listing.into_iter().filter(|name| name != &target).collect();
        let err = resolve(&listing, 2, &target).unwrap_err();
        prop_assert!(err.is_not_found());
    }
}
